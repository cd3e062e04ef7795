use std::path::Path;

use crate::error::{CrudkitError, Result};
use crate::skeleton::{SkeletonLocator, DEFAULT_THEME};

/// Every resource the full read-write pipeline can ask for.
const REQUIRED_RESOURCES: &[&str] = &[
    "crud/controller.rs.tera",
    "crud/views/list.html.tera",
    "crud/views/filter.html.tera",
    "crud/views/show.html.tera",
    "crud/views/new.html.tera",
    "crud/views/edit.html.tera",
    "crud/tests/controller_test.rs.tera",
    "crud/config/routing.yaml.tera",
    "crud/config/routing.xml.tera",
    "crud/config/routing.php.tera",
];

/// Result of validating a skeleton installation.
pub struct CheckResult {
    pub theme: String,
    pub resolved: usize,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Validate a skeleton root for a selected theme.
///
/// Checks that every resource the generator can request resolves through
/// the themed lookup, then validates the Tera syntax of each template file
/// in the involved theme directories. Read-only.
pub fn check_skeleton(root: &Path, theme: &str) -> Result<CheckResult> {
    let locator = SkeletonLocator::new(root, theme);

    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let mut resolved = 0;

    for resource in REQUIRED_RESOURCES {
        match locator.locate(resource) {
            Ok(_) => resolved += 1,
            Err(CrudkitError::TemplateNotFound { resource, .. }) => {
                errors.push(format!("Missing template: {resource}"));
            }
            Err(e) => return Err(e),
        }
    }

    let mut dirs = vec![root.join(DEFAULT_THEME)];
    if theme != DEFAULT_THEME {
        dirs.push(root.join(theme));
    }
    for dir in dirs {
        if dir.is_dir() {
            validate_tera_files(&dir, &mut warnings, &mut errors);
        }
    }

    Ok(CheckResult {
        theme: theme.to_string(),
        resolved,
        warnings,
        errors,
    })
}

fn validate_tera_files(dir: &Path, warnings: &mut Vec<String>, errors: &mut Vec<String>) {
    let walker = walkdir::WalkDir::new(dir).into_iter().filter_map(|e| e.ok());
    for entry in walker {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path.to_string_lossy().ends_with(".tera") {
            continue;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut tera = tera::Tera::default();
                let template_name = path.strip_prefix(dir).unwrap_or(path).to_string_lossy();
                if let Err(e) = tera.add_raw_template(&template_name, &content) {
                    let rel = path.strip_prefix(dir).unwrap_or(path).display();
                    errors.push(format!("Tera syntax error in {rel}: {e}"));
                }
            }
            Err(e) => {
                let rel = path.strip_prefix(dir).unwrap_or(path).display();
                warnings.push(format!("Could not read {rel}: {e}"));
            }
        }
    }
}
