//! # Manifest Validation Command
//!
//! Validates a single federation manifest file against the bundled
//! schema. Matches the behavior of the Python `fedmcp.py` script:
//! one positional path, a success line on stdout, and uncaught error
//! propagation on any failure.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fedmcp_schema::ManifestValidator;

/// Arguments for the `fedmcp` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the federation manifest (a JSON document) to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute validation of a single manifest file.
///
/// Returns the process exit code: 0 when the document conforms to the
/// schema. Every failure (schema load, document load, schema violation)
/// propagates as an error; nothing is caught or translated here, so the
/// library's own diagnostic reaches the process boundary intact.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let validator =
        ManifestValidator::bundled().context("failed to load the federation schema")?;

    tracing::debug!(schema_id = validator.schema_id(), "compiled federation schema");

    validator.validate_file(&args.path)?;

    println!("✅ {} valid", args.path.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedmcp_schema::SchemaValidationError;
    use serde_json::json;

    fn write_manifest(dir: &tempfile::TempDir, contents: &[u8]) -> PathBuf {
        let path = dir.path().join("federation.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn valid_manifest_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = json!({
            "federation": { "id": "acme-tools", "name": "ACME Tool Federation" },
            "manifest_version": "1.0.0",
            "servers": [{
                "name": "search",
                "endpoint": "https://mcp.acme.example/search",
                "transport": "streamable-http"
            }]
        });
        let path = write_manifest(&dir, &serde_json::to_vec(&manifest).unwrap());

        let args = ValidateArgs { path };
        let code = run_validate(&args).expect("valid manifest should not error");
        assert_eq!(code, 0);
    }

    #[test]
    fn schema_violation_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // Well-formed JSON, but `servers` is required and absent.
        let manifest = json!({
            "federation": { "id": "acme-tools", "name": "ACME Tool Federation" },
            "manifest_version": "1.0.0"
        });
        let path = write_manifest(&dir, &serde_json::to_vec(&manifest).unwrap());

        let args = ValidateArgs { path };
        let err = run_validate(&args).expect_err("invalid manifest should error");
        assert!(matches!(
            err.downcast_ref::<SchemaValidationError>(),
            Some(SchemaValidationError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn missing_file_propagates_as_document_load_error() {
        let args = ValidateArgs {
            path: PathBuf::from("/tmp/no-such-fedmcp-manifest-67890.json"),
        };
        let err = run_validate(&args).expect_err("missing file should error");
        assert!(matches!(
            err.downcast_ref::<SchemaValidationError>(),
            Some(SchemaValidationError::DocumentLoadError { .. })
        ));
    }

    #[test]
    fn malformed_json_propagates_as_document_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, b"{invalid json");

        let args = ValidateArgs { path };
        let err = run_validate(&args).expect_err("malformed JSON should error");
        match err.downcast_ref::<SchemaValidationError>() {
            Some(SchemaValidationError::DocumentLoadError { reason, .. }) => {
                assert!(reason.contains("JSON parse error"));
            }
            other => panic!("Expected DocumentLoadError, got: {other:?}"),
        }
    }

    #[test]
    fn repeated_runs_classify_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, b"{\"federation\": {}}");

        let args = ValidateArgs { path };
        let first = run_validate(&args);
        let second = run_validate(&args);
        assert!(first.is_err());
        assert!(second.is_err());
    }
}
