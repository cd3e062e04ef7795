use std::path::Path;

use tera::{Context, Tera};

use crate::error::{CrudkitError, Result};

/// Read a template file from disk and render it with the given context.
pub fn render_template_file(template_path: &Path, context: &Context) -> Result<String> {
    let content = std::fs::read_to_string(template_path).map_err(|e| CrudkitError::Io {
        context: format!("reading template {}", template_path.display()),
        source: e,
    })?;

    let template_name = template_path.to_string_lossy().into_owned();

    let mut tera = Tera::default();
    tera.add_raw_template(&template_name, &content)
        .map_err(|e| CrudkitError::RenderError {
            template: template_name.clone(),
            source: e,
        })?;

    tera.render(&template_name, context)
        .map_err(|e| CrudkitError::RenderError {
            template: template_name,
            source: e,
        })
}
