//! JSON Schema handling for manifest documents.
//!
//! The schema ships inside the crate so a loaded document is always checked
//! against the contract this build understands. It is parsed and compiled
//! once per process; the allowed `schema_version` set is read from the
//! schema's own `const`, falling back to [`MANIFEST_SCHEMA_VERSION`] if the
//! pointer ever moves.

use crate::error::{ConfigurationError, Result};
use crate::manifest::MANIFEST_SCHEMA_VERSION;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Raw text of `schema/doc_manifest.schema.json`.
pub const MANIFEST_SCHEMA_JSON: &str = include_str!("../schema/doc_manifest.schema.json");

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

struct BundledSchema {
    compiled: JSONSchema,
    schema_version: String,
}

static BUNDLED: OnceLock<Result<BundledSchema>> = OnceLock::new();

fn bundled_schema() -> Result<&'static BundledSchema> {
    BUNDLED
        .get_or_init(|| parse_bundled(MANIFEST_SCHEMA_JSON))
        .as_ref()
        .map_err(Clone::clone)
}

fn parse_bundled(raw: &str) -> Result<BundledSchema> {
    let schema: Value = serde_json::from_str(raw)
        .map_err(|err| ConfigurationError::BundledSchema(format!("parsing: {err}")))?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| ConfigurationError::BundledSchema(format!("compiling: {err}")))?;
    let schema_version = extract_schema_version(&schema, SCHEMA_VERSION_POINTER)
        .unwrap_or_else(|| MANIFEST_SCHEMA_VERSION.to_string());
    Ok(BundledSchema {
        compiled,
        schema_version,
    })
}

/// `schema_version` values this build accepts.
pub fn allowed_schema_versions() -> Result<BTreeSet<String>> {
    let bundled = bundled_schema()?;
    Ok(BTreeSet::from_iter([bundled.schema_version.clone()]))
}

pub(crate) fn validate_schema_version(schema_version: &str) -> Result<()> {
    let allowed = allowed_schema_versions()?;
    if !is_identifier(schema_version) || !allowed.contains(schema_version) {
        return Err(ConfigurationError::SchemaVersion {
            found: schema_version.to_string(),
            allowed: allowed.into_iter().collect(),
        });
    }
    Ok(())
}

/// Check a raw document against the bundled schema, reporting every violation.
pub(crate) fn validate_document(document: &Value) -> Result<()> {
    let bundled = bundled_schema()?;
    if let Err(errors) = bundled.compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(ConfigurationError::Schema(details));
    }
    Ok(())
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    is_identifier(version).then(|| version.to_string())
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
