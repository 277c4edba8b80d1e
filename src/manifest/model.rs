//! Deserializable representation of a manifest document.
//!
//! The types mirror `schema/doc_manifest.schema.json`. A `Category` is a plain
//! value; use `Manifest` for validation and lookup, and `ManifestDocument` when
//! reading or writing the JSON form.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version tag written into every manifest document.
pub const MANIFEST_SCHEMA_VERSION: &str = "doc_manifest_v1";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A named group of documentation files sharing one content directory.
pub struct Category {
    /// Display name, also the lookup key.
    pub name: String,
    /// Directory name under the content root.
    pub path: String,
    /// Markdown filenames in reading order.
    pub files: Vec<String>,
}

impl Category {
    pub fn new<I>(name: impl Into<String>, path: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            name: name.into(),
            path: path.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, file: &str) -> bool {
        self.files.iter().any(|candidate| candidate == file)
    }

    /// `path/file` for every file, in order.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let dir = Path::new(&self.path);
        self.files.iter().map(move |file| dir.join(file))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Manifest as stored on disk.
pub struct ManifestDocument {
    pub schema_version: String,
    pub categories: Vec<Category>,
}

impl ManifestDocument {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            schema_version: MANIFEST_SCHEMA_VERSION.to_string(),
            categories,
        }
    }
}
