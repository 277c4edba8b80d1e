//! Validated, indexed view of the documentation categories.
//!
//! Construction is strict: blank or duplicate names, colliding paths, empty or
//! duplicate file lists, and unsafe path components are all rejected before a
//! `Manifest` exists. After that every operation is a read, so a `Manifest`
//! can be shared freely between threads.

use crate::error::{ConfigurationError, Result};
use crate::manifest::model::{Category, ManifestDocument};
use crate::manifest::naming::{collision_key, component_problem, markdown_file_problem};
use crate::schema_loader::{validate_document, validate_schema_version};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
/// Categories in declaration order plus a name index.
pub struct Manifest {
    categories: Vec<Category>,
    by_name: BTreeMap<String, usize>,
}

impl Manifest {
    /// Validate `categories` and index them by display name.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        let by_name = build_index(&categories)?;
        debug!(categories = categories.len(), "manifest validated");
        Ok(Self {
            categories,
            by_name,
        })
    }

    pub fn from_document(document: ManifestDocument) -> Result<Self> {
        validate_schema_version(&document.schema_version)?;
        Self::from_categories(document.categories)
    }

    /// Parse a JSON manifest document.
    ///
    /// The version tag is checked first so an old or future document gets a
    /// version error instead of a pile of schema violations.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(input).map_err(|err| ConfigurationError::Parse(err.to_string()))?;
        let schema_version = value
            .get("schema_version")
            .and_then(Value::as_str)
            .unwrap_or_default();
        validate_schema_version(schema_version)?;
        validate_document(&value)?;
        let document: ManifestDocument =
            serde_json::from_value(value).map_err(|err| ConfigurationError::Parse(err.to_string()))?;
        Self::from_document(document)
    }

    /// Read and validate a manifest document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|err| ConfigurationError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let manifest = Self::from_json_str(&data)?;
        debug!(
            path = %path.display(),
            categories = manifest.len(),
            "loaded manifest document"
        );
        Ok(manifest)
    }

    /// Look up a category by exact display name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.by_name.get(name).map(|&idx| &self.categories[idx])
    }

    /// `(display name, category)` pairs in declaration order.
    ///
    /// Each call starts a fresh pass over the same immutable data.
    pub fn list(&self) -> impl ExactSizeIterator<Item = (&str, &Category)> + Clone + '_ {
        self.categories
            .iter()
            .map(|category| (category.name.as_str(), category))
    }

    /// Join the category's directory with one of its files.
    ///
    /// Returns `None` when the category is unknown or does not list `file`.
    pub fn resolve_path(&self, name: &str, file: &str) -> Option<PathBuf> {
        let category = self.get(name)?;
        category
            .contains(file)
            .then(|| Path::new(&category.path).join(file))
    }

    /// Display names in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.categories.iter().map(|category| category.name.as_str())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Serializable form, suitable for [`Manifest::from_json_str`].
    pub fn to_document(&self) -> ManifestDocument {
        ManifestDocument::new(self.categories.clone())
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

fn build_index(categories: &[Category]) -> Result<BTreeMap<String, usize>> {
    if categories.is_empty() {
        return Err(ConfigurationError::Empty);
    }

    let mut by_name = BTreeMap::new();
    let mut paths: BTreeMap<String, &str> = BTreeMap::new();
    for (idx, category) in categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(ConfigurationError::BlankName);
        }
        if by_name.contains_key(&category.name) {
            return Err(ConfigurationError::DuplicateName(category.name.clone()));
        }
        if let Some(reason) = component_problem(&category.path) {
            return Err(ConfigurationError::InvalidPath {
                category: category.name.clone(),
                path: category.path.clone(),
                reason,
            });
        }
        if let Some(other) = paths.insert(collision_key(&category.path), &category.name) {
            return Err(ConfigurationError::DuplicatePath {
                category: category.name.clone(),
                path: category.path.clone(),
                other: other.to_string(),
            });
        }
        validate_files(category)?;
        by_name.insert(category.name.clone(), idx);
    }
    Ok(by_name)
}

fn validate_files(category: &Category) -> Result<()> {
    if category.files.is_empty() {
        return Err(ConfigurationError::EmptyFiles(category.name.clone()));
    }

    let mut seen = BTreeSet::new();
    for file in &category.files {
        if let Some(reason) = markdown_file_problem(file) {
            return Err(ConfigurationError::InvalidFile {
                category: category.name.clone(),
                file: file.clone(),
                reason,
            });
        }
        if !seen.insert(collision_key(file)) {
            return Err(ConfigurationError::DuplicateFile {
                category: category.name.clone(),
                file: file.clone(),
            });
        }
    }
    Ok(())
}
