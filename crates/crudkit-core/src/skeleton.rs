use std::path::{Path, PathBuf};

use crate::error::{CrudkitError, Result};

/// Theme used when the caller selects none, and the fallback for every
/// selected theme.
pub const DEFAULT_THEME: &str = "default";

/// Resolution of logical skeleton resources to template files on disk.
///
/// The seam exists so the locator's fallback chain can be exercised against
/// a fake resolver in tests; `FsResolver` is the production implementation.
pub trait ResourceResolver {
    /// Resolve `resource` against a themed directory, falling through to the
    /// default directory's copy. Signals `SkeletonThemeMissing` when the
    /// themed directory itself does not exist.
    fn locate_pair(&self, themed_dir: &Path, default_dir: &Path, resource: &str)
        -> Result<PathBuf>;

    /// Resolve `resource` against a single directory.
    fn locate(&self, dir: &Path, resource: &str) -> Result<PathBuf>;
}

/// Filesystem-backed resolver.
pub struct FsResolver;

impl ResourceResolver for FsResolver {
    fn locate_pair(
        &self,
        themed_dir: &Path,
        default_dir: &Path,
        resource: &str,
    ) -> Result<PathBuf> {
        if !themed_dir.is_dir() {
            let theme = themed_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(CrudkitError::SkeletonThemeMissing {
                theme,
                path: themed_dir.to_path_buf(),
            });
        }

        let themed = themed_dir.join(resource);
        if themed.is_file() {
            return Ok(themed);
        }

        let fallback = default_dir.join(resource);
        if fallback.is_file() {
            return Ok(fallback);
        }

        Err(CrudkitError::TemplateNotFound {
            resource: resource.to_string(),
            themed,
            fallback,
        })
    }

    fn locate(&self, dir: &Path, resource: &str) -> Result<PathBuf> {
        let candidate = dir.join(resource);
        if candidate.is_file() {
            return Ok(candidate);
        }

        Err(CrudkitError::TemplateNotFound {
            resource: resource.to_string(),
            themed: candidate.clone(),
            fallback: candidate,
        })
    }
}

/// Locates skeleton templates for a selected theme with fallback to the
/// default theme.
///
/// A custom theme overrides only the templates it ships; any template it
/// omits resolves to the default theme's copy. Resolution is two-phase:
/// the `(themed, default)` pair is tried first, and only when the selected
/// theme is reported missing as a whole is the default theme retried alone.
/// A template found in neither theme is a fatal lookup error.
pub struct SkeletonLocator<R = FsResolver> {
    root: PathBuf,
    theme: String,
    resolver: R,
}

impl SkeletonLocator<FsResolver> {
    pub fn new(root: impl Into<PathBuf>, theme: impl Into<String>) -> Self {
        Self::with_resolver(root, theme, FsResolver)
    }
}

impl<R: ResourceResolver> SkeletonLocator<R> {
    pub fn with_resolver(root: impl Into<PathBuf>, theme: impl Into<String>, resolver: R) -> Self {
        Self {
            root: root.into(),
            theme: theme.into(),
            resolver,
        }
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical resource such as `crud/controller.rs.tera`.
    pub fn locate(&self, resource: &str) -> Result<PathBuf> {
        let themed_dir = self.root.join(&self.theme);
        let default_dir = self.root.join(DEFAULT_THEME);

        match self
            .resolver
            .locate_pair(&themed_dir, &default_dir, resource)
        {
            Ok(path) => Ok(path),
            Err(CrudkitError::SkeletonThemeMissing { .. }) => {
                self.resolver.locate(&default_dir, resource)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_template(root: &Path, theme: &str, resource: &str, content: &str) {
        let path = root.join(theme).join(resource);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn template_in_both_resolves_to_selected_theme() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "default", "crud/list.html.tera", "default list");
        write_template(dir.path(), "dark", "crud/list.html.tera", "dark list");

        let locator = SkeletonLocator::new(dir.path(), "dark");
        let path = locator.locate("crud/list.html.tera").unwrap();
        assert!(path.starts_with(dir.path().join("dark")));
    }

    #[test]
    fn template_missing_from_theme_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "default", "crud/show.html.tera", "default show");
        write_template(dir.path(), "dark", "crud/list.html.tera", "dark list");

        let locator = SkeletonLocator::new(dir.path(), "dark");
        let path = locator.locate("crud/show.html.tera").unwrap();
        assert!(path.starts_with(dir.path().join("default")));
    }

    #[test]
    fn missing_theme_directory_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "default", "crud/list.html.tera", "default list");

        let locator = SkeletonLocator::new(dir.path(), "nope");
        let path = locator.locate("crud/list.html.tera").unwrap();
        assert!(path.starts_with(dir.path().join("default")));
    }

    #[test]
    fn template_in_no_theme_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "default", "crud/list.html.tera", "default list");

        let locator = SkeletonLocator::new(dir.path(), "default");
        let result = locator.locate("crud/missing.html.tera");
        assert!(matches!(
            result,
            Err(CrudkitError::TemplateNotFound { ref resource, .. })
                if resource == "crud/missing.html.tera"
        ));
    }

    #[test]
    fn pair_not_found_propagates_without_second_phase() {
        // The theme directory exists, so a double miss must surface as
        // TemplateNotFound from the pair lookup, not retry the default.
        struct CountingResolver {
            calls: std::cell::RefCell<Vec<&'static str>>,
        }

        impl ResourceResolver for CountingResolver {
            fn locate_pair(&self, _: &Path, _: &Path, resource: &str) -> Result<PathBuf> {
                self.calls.borrow_mut().push("pair");
                Err(CrudkitError::TemplateNotFound {
                    resource: resource.to_string(),
                    themed: PathBuf::new(),
                    fallback: PathBuf::new(),
                })
            }

            fn locate(&self, _: &Path, _: &str) -> Result<PathBuf> {
                self.calls.borrow_mut().push("single");
                Ok(PathBuf::new())
            }
        }

        let resolver = CountingResolver {
            calls: std::cell::RefCell::new(Vec::new()),
        };
        let locator = SkeletonLocator::with_resolver("/skel", "dark", resolver);
        let result = locator.locate("crud/list.html.tera");

        assert!(matches!(result, Err(CrudkitError::TemplateNotFound { .. })));
        assert_eq!(*locator.resolver.calls.borrow(), vec!["pair"]);
    }

    #[test]
    fn theme_missing_triggers_second_phase() {
        struct ThemelessResolver {
            calls: std::cell::RefCell<Vec<&'static str>>,
        }

        impl ResourceResolver for ThemelessResolver {
            fn locate_pair(&self, themed_dir: &Path, _: &Path, _: &str) -> Result<PathBuf> {
                self.calls.borrow_mut().push("pair");
                Err(CrudkitError::SkeletonThemeMissing {
                    theme: "dark".into(),
                    path: themed_dir.to_path_buf(),
                })
            }

            fn locate(&self, dir: &Path, resource: &str) -> Result<PathBuf> {
                self.calls.borrow_mut().push("single");
                Ok(dir.join(resource))
            }
        }

        let resolver = ThemelessResolver {
            calls: std::cell::RefCell::new(Vec::new()),
        };
        let locator = SkeletonLocator::with_resolver("/skel", "dark", resolver);
        let path = locator.locate("crud/list.html.tera").unwrap();

        assert_eq!(path, Path::new("/skel/default/crud/list.html.tera"));
        assert_eq!(*locator.resolver.calls.borrow(), vec!["pair", "single"]);
    }
}
