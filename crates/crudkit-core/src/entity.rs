use crate::error::{CrudkitError, Result};

/// A namespace-qualified entity name, e.g. `Blog.Post`.
///
/// Segments are separated by `.`; `\` is also accepted on input so metadata
/// exported from foreign toolchains parses unchanged. Both normalize to the
/// same derived names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    segments: Vec<String>,
}

impl EntityName {
    /// Parse and validate a raw entity name.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(CrudkitError::EntityNameInvalid {
                name: raw.to_string(),
                reason: "name is empty".into(),
            });
        }

        let segment_re = regex_lite::Regex::new("^[A-Za-z][A-Za-z0-9]*$")
            .expect("segment pattern is valid");

        let segments: Vec<String> = raw
            .split(['.', '\\'])
            .map(str::to_string)
            .collect();

        for segment in &segments {
            if !segment_re.is_match(segment) {
                return Err(CrudkitError::EntityNameInvalid {
                    name: raw.to_string(),
                    reason: format!("invalid segment '{segment}'"),
                });
            }
        }

        Ok(Self { segments })
    }

    /// The full dot-separated name, e.g. `Blog.Post`.
    pub fn full(&self) -> String {
        self.segments.join(".")
    }

    /// The simple class name (final segment), e.g. `Post`.
    pub fn class(&self) -> &str {
        self.segments.last().expect("parse guarantees >= 1 segment")
    }

    /// The namespace prefix, e.g. `Blog`; empty for a bare name.
    pub fn namespace(&self) -> String {
        self.segments[..self.segments.len() - 1].join(".")
    }

    /// The namespace with segments joined by `/`, for path construction.
    pub fn namespace_path(&self) -> String {
        self.segments[..self.segments.len() - 1].join("/")
    }

    /// Lower-cased class name, e.g. `post`.
    pub fn singular(&self) -> String {
        self.class().to_lowercase()
    }

    /// Singular form with a trailing `s`. Deliberately naive suffixing:
    /// `Box` pluralizes to `boxs`, matching legacy generator behavior.
    pub fn plural(&self) -> String {
        format!("{}s", self.singular())
    }

    /// Full name lower-cased with separators as underscores, e.g.
    /// `blog_post`. Used for the routing configuration file name.
    pub fn underscored(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }
}
