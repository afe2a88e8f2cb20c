//! # fedmcp-cli — CLI for MCP Federation Manifests
//!
//! Provides the `fedmcp` command-line interface, replacing the Python
//! `fedmcp.py` script with a structured Rust implementation.
//!
//! ## Usage
//!
//! ```bash
//! fedmcp path/to/federation.json
//! ```
//!
//! On success the command prints a single confirmation line and exits 0:
//!
//! ```text
//! ✅ path/to/federation.json valid
//! ```
//!
//! Any failure (unreadable file, malformed JSON, schema violation)
//! terminates the process with exit code 1 and a diagnostic on stderr.

pub mod validate;
