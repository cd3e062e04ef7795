use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CrudkitError, Result};

/// The owning project unit that receives generated files.
///
/// Supplied by the caller and never mutated; the generator only reads the
/// root path for target construction and passes name/namespace through to
/// template variables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bundle {
    pub name: String,
    pub namespace: String,
    pub root: PathBuf,
}

impl Bundle {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            root: root.into(),
        }
    }

    /// Ensure the bundle root is a resolvable directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(CrudkitError::BundleRootMissing {
                path: self.root.clone(),
            });
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
