//! Errors raised while building or loading a manifest.
//!
//! Lookups never error: a missing category or file is `None`. Everything in
//! this module describes a manifest that should not have shipped, so callers
//! are expected to fail fast at startup rather than recover.

use std::path::PathBuf;
use thiserror::Error;

/// A malformed manifest, or a manifest document that could not be read.
///
/// Variants carry owned strings so the error is `Clone`; the built-in
/// manifest caches its construction result and hands out copies.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("manifest contains no categories")]
    Empty,

    #[error("category display name must not be blank")]
    BlankName,

    #[error("duplicate category '{0}'")]
    DuplicateName(String),

    #[error("category '{category}' path '{path}' collides with category '{other}'")]
    DuplicatePath {
        category: String,
        path: String,
        other: String,
    },

    #[error("category '{category}' has invalid path '{path}': {reason}")]
    InvalidPath {
        category: String,
        path: String,
        reason: &'static str,
    },

    #[error("category '{0}' lists no files")]
    EmptyFiles(String),

    #[error("category '{category}' lists '{file}' more than once")]
    DuplicateFile { category: String, file: String },

    #[error("category '{category}' has invalid filename '{file}': {reason}")]
    InvalidFile {
        category: String,
        file: String,
        reason: &'static str,
    },

    #[error("reading manifest {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("parsing manifest: {0}")]
    Parse(String),

    #[error("manifest schema_version '{found}' not in allowed set {allowed:?}")]
    SchemaVersion {
        found: String,
        allowed: Vec<String>,
    },

    #[error("manifest failed schema validation:\n{0}")]
    Schema(String),

    /// The schema compiled into this build is itself unusable.
    #[error("bundled manifest schema is invalid: {0}")]
    BundledSchema(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
