use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::EntityName;
use crate::error::{CrudkitError, Result};

/// A single mapped field of the entity, in declaration order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldMapping {
    pub name: String,

    /// Storage type, e.g. `integer`, `string`, `datetime`.
    #[serde(rename = "type")]
    pub field_type: String,

    pub length: Option<u32>,

    #[serde(default)]
    pub nullable: bool,
}

/// Field metadata for one entity, as supplied by the metadata provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntityMetadata {
    /// Names of the identifier fields.
    pub identifier: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldMapping>,
}

impl EntityMetadata {
    /// Enforce the identifier invariant: exactly one identifier field,
    /// named `id`. Checked before any file is written.
    pub fn validate(&self, entity: &EntityName) -> Result<()> {
        if self.identifier.len() != 1 {
            return Err(CrudkitError::IdentifierCardinality {
                entity: entity.full(),
                count: self.identifier.len(),
            });
        }

        if self.identifier[0] != "id" {
            return Err(CrudkitError::IdentifierNotId {
                entity: entity.full(),
                field: self.identifier[0].clone(),
            });
        }

        Ok(())
    }

    /// The sole identifier field name. Valid only after `validate`.
    pub fn identifier_name(&self) -> &str {
        &self.identifier[0]
    }
}

/// Load entity metadata from a TOML file.
pub fn load_metadata(path: &Path) -> Result<EntityMetadata> {
    if !path.exists() {
        return Err(CrudkitError::MetadataNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CrudkitError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| CrudkitError::MetadataParse { source: e })
}
