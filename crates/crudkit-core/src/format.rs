use serde::{Deserialize, Serialize};

/// Dialect of the emitted routing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Yaml,
    Xml,
    Php,
    Annotation,
}

impl ConfigFormat {
    /// Normalize a raw format string. Unrecognized values silently fall
    /// back to `Yaml`; only `annotation` is kept as a distinct non-emitting
    /// format.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "xml" => Self::Xml,
            "php" => Self::Php,
            "annotation" => Self::Annotation,
            _ => Self::Yaml,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Php => "php",
            Self::Annotation => "annotation",
        }
    }

    /// Whether a standalone routing configuration file is emitted.
    /// Annotation declares routes inline in the controller and emits none.
    pub fn emits_routing(&self) -> bool {
        matches!(self, Self::Yaml | Self::Xml | Self::Php)
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
