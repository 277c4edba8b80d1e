//! Documentation category manifest.
//!
//! `builtin()` returns the categories compiled into the crate; `Manifest::load`
//! reads the same shape from a JSON document so content can be redeployed
//! without a rebuild. Either way the result is validated once and read-only.

pub mod builtin;
pub mod index;
pub mod model;
mod naming;

pub use builtin::{builtin, builtin_categories};
pub use index::Manifest;
pub use model::{Category, MANIFEST_SCHEMA_VERSION, ManifestDocument};
