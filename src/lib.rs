//! Shared library for the documentation category manifest.
//!
//! The crate exposes one read-only table: documentation categories keyed by
//! display name, each naming a content directory and its markdown files in
//! reading order. Renderers and site generators use it to build navigation
//! and to turn a `(category, file)` pair into a path under their own content
//! root.
//!
//! Lookups that miss return `None`. A malformed manifest is a
//! [`ConfigurationError`] raised when the manifest is built, never later.

pub mod content;
pub mod error;
pub mod manifest;
pub mod schema_loader;

pub use content::{orphaned_files, resource_path, verify_content};
pub use error::ConfigurationError;
pub use manifest::{
    Category, MANIFEST_SCHEMA_VERSION, Manifest, ManifestDocument, builtin, builtin_categories,
};
pub use schema_loader::{MANIFEST_SCHEMA_JSON, allowed_schema_versions};
