//! # fedmcp-schema — Federation Manifest Validation
//!
//! Runtime JSON Schema validation for MCP federation manifests.
//!
//! ## Responsibilities
//!
//! - **Schema loading:** The federation manifest schema
//!   (`spec/mcp-fed.schema.json`, Draft 2020-12) is embedded in the
//!   binary at compile time and compiled once per process.
//! - **Validation:** Manifest documents are checked against the compiled
//!   schema; every violation is collected, not just the first, and each
//!   carries the JSON Pointer to the offending field.
//!
//! ## Design
//!
//! [`ManifestValidator`] is immutable after construction and `Send + Sync`,
//! so a single compiled validator can check any number of documents.
//! Validation errors are structured: the schema identity, the instance
//! path, and a human-readable message per violation.

pub mod validate;

// Re-export primary types.
pub use validate::{
    ManifestValidator, SchemaValidationError, ValidationViolations, Violation,
};
