//! # Runtime Schema Validation
//!
//! Validates MCP federation manifests against the bundled JSON Schema
//! (Draft 2020-12). The schema is embedded at compile time, so a built
//! binary can never be separated from it; parse and compile problems
//! still surface as ordinary errors at construction time.
//!
//! ## Design
//!
//! The [`ManifestValidator`] parses and compiles the schema once at
//! construction and is reused for every document. Validation collects
//! all violations via `iter_errors`, each carrying the JSON Pointer to
//! the violating field, so a failing document is fully diagnosed in a
//! single pass.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// The federation manifest schema shipped with this repository.
const BUNDLED_SCHEMA: &str = include_str!("../../../spec/mcp-fed.schema.json");

/// Repository-relative path of the bundled schema, used as its origin
/// in diagnostics when the schema carries no `$id`.
const BUNDLED_SCHEMA_PATH: &str = "spec/mcp-fed.schema.json";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A single schema violation with diagnostic context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer to the field in the instance that failed validation.
    pub instance_path: String,
    /// JSON Pointer within the schema that triggered the violation.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered collection of schema violations for one document.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for ValidationViolations {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl std::fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Errors returned by schema validation operations.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The schema could not be read or parsed as JSON.
    #[error("failed to load schema {path}: {reason}")]
    SchemaLoadError {
        /// Path or identifier of the schema that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The schema parsed as JSON but could not be compiled into a validator.
    #[error("failed to compile schema {schema_id}: {reason}")]
    SchemaCompileError {
        /// The schema `$id` or origin path.
        schema_id: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The target document could not be read or parsed as JSON.
    #[error("failed to load document {path}: {reason}")]
    DocumentLoadError {
        /// Path to the document that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The document is well-formed JSON but violates the schema.
    #[error("document does not conform to {schema_id}, {n} violation(s):\n{violations}", n = .violations.len())]
    ValidationFailed {
        /// The schema that was violated.
        schema_id: String,
        /// Individual violation details.
        violations: ValidationViolations,
    },
}

// ---------------------------------------------------------------------------
// ManifestValidator
// ---------------------------------------------------------------------------

/// A compiled validator for MCP federation manifests.
///
/// Holds the parsed schema and the compiled `jsonschema` validator.
/// Immutable after construction; validating a document never mutates
/// any state, so repeated runs over an unchanged file classify
/// identically.
///
/// ## Thread Safety
///
/// `ManifestValidator` is `Send + Sync` — the compiled validator can be
/// shared across threads.
pub struct ManifestValidator {
    /// The parsed schema document.
    schema: Value,
    /// The schema `$id`, or its origin path when no `$id` is declared.
    schema_id: String,
    /// The compiled validator, built once at construction.
    compiled: jsonschema::Validator,
}

impl std::fmt::Debug for ManifestValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestValidator")
            .field("schema_id", &self.schema_id)
            .finish()
    }
}

impl ManifestValidator {
    /// Create a validator from the schema bundled into the binary.
    ///
    /// The schema text is embedded at compile time, so it cannot be
    /// missing at run time; it is still parsed and compiled here, and
    /// any problem surfaces as [`SchemaValidationError::SchemaLoadError`]
    /// or [`SchemaValidationError::SchemaCompileError`].
    pub fn bundled() -> Result<Self, SchemaValidationError> {
        Self::from_schema_str(BUNDLED_SCHEMA, BUNDLED_SCHEMA_PATH)
    }

    /// Create a validator from a schema file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::SchemaLoadError`] if the file
    /// cannot be read or is not valid JSON, and
    /// [`SchemaValidationError::SchemaCompileError`] if the JSON is not
    /// a usable schema.
    pub fn from_schema_file(path: impl AsRef<Path>) -> Result<Self, SchemaValidationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::from_schema_str(&content, &path.display().to_string())
    }

    /// Create a validator from an already-parsed schema value.
    ///
    /// The schema identity in diagnostics is taken from its `$id`, or
    /// `(inline schema)` when none is declared.
    pub fn from_schema_value(schema: Value) -> Result<Self, SchemaValidationError> {
        Self::compile(schema, "(inline schema)")
    }

    /// Returns the parsed schema document.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Returns the schema `$id`, or its origin path when no `$id` is declared.
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Validate a parsed JSON value against the schema.
    ///
    /// Returns `Ok(())` if the value satisfies every constraint, or a
    /// [`SchemaValidationError::ValidationFailed`] carrying every
    /// violation found.
    pub fn validate_value(&self, value: &Value) -> Result<(), SchemaValidationError> {
        let violations: Vec<Violation> = self
            .compiled
            .iter_errors(value)
            .map(|err| Violation {
                instance_path: err.instance_path.to_string(),
                schema_path: err.schema_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_id: self.schema_id.clone(),
                violations: violations.into(),
            })
        }
    }

    /// Validate a JSON document at the given path.
    ///
    /// Loads the file, parses it, and validates against the schema.
    /// Read and parse failures map to
    /// [`SchemaValidationError::DocumentLoadError`].
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<(), SchemaValidationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemaValidationError::DocumentLoadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            SchemaValidationError::DocumentLoadError {
                path: path.display().to_string(),
                reason: format!("JSON parse error: {e}"),
            }
        })?;

        self.validate_value(&value)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn from_schema_str(content: &str, origin: &str) -> Result<Self, SchemaValidationError> {
        let schema: Value = serde_json::from_str(content).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                path: origin.to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::compile(schema, origin)
    }

    fn compile(schema: Value, origin: &str) -> Result<Self, SchemaValidationError> {
        let schema_id = schema
            .get("$id")
            .and_then(|v| v.as_str())
            .unwrap_or(origin)
            .to_string();

        let compiled = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(&schema)
            .map_err(|e| SchemaValidationError::SchemaCompileError {
                schema_id: schema_id.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            schema,
            schema_id,
            compiled,
        })
    }
}
