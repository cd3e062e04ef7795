use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CrudkitError {
    #[error("Invalid entity name '{name}': {reason}")]
    #[diagnostic(help(
        "Entity names are dot-separated identifiers, e.g. 'Post' or 'Blog.Post'"
    ))]
    EntityNameInvalid { name: String, reason: String },

    #[error("Entity '{entity}' declares {count} identifier field(s)")]
    #[diagnostic(help("CRUD generation requires exactly one identifier field, named 'id'"))]
    IdentifierCardinality { entity: String, count: usize },

    #[error("Entity '{entity}' uses '{field}' as its identifier")]
    #[diagnostic(help("CRUD generation requires the identifier field to be named 'id'"))]
    IdentifierNotId { entity: String, field: String },

    #[error("Bundle root directory not found: {path}")]
    #[diagnostic(help("The bundle's root path must exist before generating into it"))]
    BundleRootMissing { path: PathBuf },

    #[error("Controller already exists: {path}")]
    #[diagnostic(help(
        "Remove the existing controller or generate under a different subdirectory"
    ))]
    ControllerExists { path: PathBuf },

    #[error("Skeleton theme '{theme}' not found at {path}")]
    SkeletonThemeMissing { theme: String, path: PathBuf },

    #[error("Template '{resource}' not found in skeleton")]
    #[diagnostic(help("The skeleton installation is missing this template in every theme"))]
    TemplateNotFound {
        resource: String,
        themed: PathBuf,
        fallback: PathBuf,
    },

    #[error("Failed to render template '{template}'")]
    #[diagnostic(help("Check the Tera syntax of the skeleton template"))]
    RenderError {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Entity metadata file not found: {path}")]
    MetadataNotFound { path: PathBuf },

    #[error("Failed to parse entity metadata")]
    #[diagnostic(help("Check the TOML syntax of the metadata file"))]
    MetadataParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

pub type Result<T> = std::result::Result<T, CrudkitError>;
