//! Core library for crudkit, a CRUD scaffolding generator.
//!
//! Given an entity's field metadata and an owning bundle, crudkit emits a
//! controller, a set of view templates, a functional-test stub, and a
//! routing configuration file, all rendered from a themed skeleton of Tera
//! templates. The library holds no state across runs: callers build an
//! immutable [`CrudRequest`] and pass it to [`generate`].

pub mod actions;
pub mod bundle;
pub mod check;
pub mod entity;
pub mod error;
pub mod format;
pub mod generate;
pub mod metadata;
pub mod render;
pub mod skeleton;

pub use actions::ActionSet;
pub use bundle::Bundle;
pub use entity::EntityName;
pub use error::{CrudkitError, Result};
pub use format::ConfigFormat;
pub use generate::{generate, CrudRequest, GeneratedCrud};
pub use metadata::{load_metadata, EntityMetadata, FieldMapping};
pub use skeleton::{SkeletonLocator, DEFAULT_THEME};
