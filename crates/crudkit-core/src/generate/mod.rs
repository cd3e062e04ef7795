use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tera::Value;

use crate::actions::ActionSet;
use crate::bundle::Bundle;
use crate::entity::EntityName;
use crate::error::{CrudkitError, Result};
use crate::format::ConfigFormat;
use crate::metadata::EntityMetadata;
use crate::render::{build_context, render_template_file};
use crate::skeleton::{ResourceResolver, SkeletonLocator};

const CONTROLLER_TEMPLATE: &str = "crud/controller.rs.tera";
const TEST_TEMPLATE: &str = "crud/tests/controller_test.rs.tera";

/// Views emitted only when their action is in the requested set.
const CONDITIONAL_VIEWS: &[&str] = &["filter", "show", "new", "edit"];

/// Immutable inputs for one generation run.
///
/// All validation and normalization happens in `new`; the emission steps
/// read from the request and never mutate it, so a request can be inspected
/// (paths, variable maps) without side effects.
pub struct CrudRequest<'a> {
    pub bundle: &'a Bundle,
    pub entity: &'a EntityName,
    pub metadata: &'a EntityMetadata,
    pub format: ConfigFormat,
    pub route_prefix: String,
    pub route_name_prefix: String,
    pub actions: ActionSet,
    pub subdir: String,
}

/// Derive the route-name prefix used to namespace generated route
/// identifiers: every `/` in the route prefix becomes `_`.
pub fn route_name_prefix(route_prefix: &str) -> String {
    route_prefix.replace('/', "_")
}

impl<'a> CrudRequest<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bundle: &'a Bundle,
        entity: &'a EntityName,
        metadata: &'a EntityMetadata,
        format_raw: &str,
        route_prefix: &str,
        with_write: bool,
        subdir: &str,
    ) -> Result<Self> {
        bundle.validate()?;
        metadata.validate(entity)?;

        Ok(Self {
            bundle,
            entity,
            metadata,
            format: ConfigFormat::parse(format_raw),
            route_prefix: route_prefix.to_string(),
            route_name_prefix: route_name_prefix(route_prefix),
            actions: ActionSet::for_write(with_write),
            subdir: subdir.to_string(),
        })
    }

    /// `Controller/<subdir>/<namespace>/<Class>Controller.<ext>`, relative
    /// to the bundle root.
    pub fn controller_path(&self) -> PathBuf {
        let ext = emitted_extension(CONTROLLER_TEMPLATE);
        join_parts(&["Controller", &self.subdir, &self.entity.namespace_path()])
            .join(format!("{}Controller.{ext}", self.entity.class()))
    }

    /// `Resources/views/<subdir>/<namespace>`, relative to the bundle root.
    pub fn views_dir(&self) -> PathBuf {
        join_parts(&[
            "Resources",
            "views",
            &self.subdir,
            &self.entity.namespace_path(),
        ])
    }

    /// `Tests/Controller/<namespace>/<Class>ControllerTest.<ext>`.
    pub fn test_path(&self) -> PathBuf {
        let ext = emitted_extension(TEST_TEMPLATE);
        join_parts(&["Tests", "Controller", &self.entity.namespace_path()])
            .join(format!("{}ControllerTest.{ext}", self.entity.class()))
    }

    /// `Resources/config/routing/<entity_underscored>.<format>`.
    pub fn routing_path(&self) -> PathBuf {
        join_parts(&["Resources", "config", "routing"]).join(format!(
            "{}.{}",
            self.entity.underscored(),
            self.format.extension()
        ))
    }

    fn view_template(action: &str) -> String {
        format!("crud/views/{action}.html.tera")
    }

    fn routing_template(&self) -> String {
        format!("crud/config/routing.{}.tera", self.format.extension())
    }

    /// Variables shared by every emitted file.
    fn common_variables(&self) -> BTreeMap<String, Value> {
        let mut vars = BTreeMap::new();
        vars.insert("bundle".into(), Value::String(self.bundle.name.clone()));
        vars.insert("entity".into(), Value::String(self.entity.full()));
        vars.insert(
            "entity_class".into(),
            Value::String(self.entity.class().to_string()),
        );
        vars.insert(
            "entity_singular".into(),
            Value::String(self.entity.singular()),
        );
        vars.insert(
            "route_prefix".into(),
            Value::String(self.route_prefix.clone()),
        );
        vars.insert(
            "route_name_prefix".into(),
            Value::String(self.route_name_prefix.clone()),
        );
        vars.insert("actions".into(), string_array(self.actions.names()));
        vars
    }

    fn controller_variables(&self) -> BTreeMap<String, Value> {
        let mut vars = self.common_variables();
        vars.insert(
            "namespace".into(),
            Value::String(self.bundle.namespace.clone()),
        );
        vars.insert(
            "entity_namespace".into(),
            Value::String(self.entity.namespace()),
        );
        vars.insert("entity_plural".into(), Value::String(self.entity.plural()));
        vars.insert(
            "format".into(),
            Value::String(self.format.extension().to_string()),
        );
        vars.insert("subdir".into(), Value::String(self.subdir.clone()));
        vars
    }

    fn view_variables(&self, action: &str) -> BTreeMap<String, Value> {
        let mut vars = self.common_variables();
        match action {
            "list" => {
                vars.insert("entity_plural".into(), Value::String(self.entity.plural()));
                vars.insert(
                    "identifier".into(),
                    Value::String(self.metadata.identifier_name().to_string()),
                );
                vars.insert("fields".into(), self.fields_value());
                vars.insert(
                    "record_actions".into(),
                    string_array(&self.actions.record_actions()),
                );
            }
            "filter" => {
                vars.insert("entity_plural".into(), Value::String(self.entity.plural()));
                vars.insert(
                    "identifier".into(),
                    Value::String(self.metadata.identifier_name().to_string()),
                );
            }
            "show" => {
                vars.insert(
                    "identifier".into(),
                    Value::String(self.metadata.identifier_name().to_string()),
                );
                vars.insert("fields".into(), self.fields_value());
            }
            "edit" => {
                vars.insert(
                    "identifier".into(),
                    Value::String(self.metadata.identifier_name().to_string()),
                );
            }
            _ => {}
        }
        vars
    }

    fn test_variables(&self) -> BTreeMap<String, Value> {
        let mut vars = self.common_variables();
        vars.insert(
            "namespace".into(),
            Value::String(self.bundle.namespace.clone()),
        );
        vars.insert(
            "entity_namespace".into(),
            Value::String(self.entity.namespace()),
        );
        vars.insert(
            "format".into(),
            Value::String(self.format.extension().to_string()),
        );
        vars.insert("subdir".into(), Value::String(self.subdir.clone()));
        vars
    }

    fn routing_variables(&self) -> BTreeMap<String, Value> {
        let mut vars = self.common_variables();
        vars.insert(
            "entity_underscored".into(),
            Value::String(self.entity.underscored()),
        );
        vars.insert("subdir".into(), Value::String(self.subdir.clone()));
        vars
    }

    fn fields_value(&self) -> Value {
        serde_json::to_value(&self.metadata.fields).unwrap_or(Value::Null)
    }
}

/// Files produced by one generation run.
pub struct GeneratedCrud {
    /// Paths relative to the bundle root, in emission order.
    pub files_created: Vec<PathBuf>,
    /// True when the format emits no standalone routing configuration.
    pub routing_skipped: bool,
}

/// Run the full emission pipeline for a validated request.
///
/// Steps execute strictly in order; a failing step aborts the rest and
/// leaves earlier writes in place (generation is not transactional).
pub fn generate<R: ResourceResolver>(
    request: &CrudRequest<'_>,
    locator: &SkeletonLocator<R>,
) -> Result<GeneratedCrud> {
    let root = request.bundle.root();
    let mut files_created = Vec::new();

    // Controller first; its pre-existence is the one collision guard.
    let controller_rel = request.controller_path();
    let controller_abs = root.join(&controller_rel);
    if controller_abs.exists() {
        return Err(CrudkitError::ControllerExists {
            path: controller_abs,
        });
    }
    emit(
        locator,
        root,
        CONTROLLER_TEMPLATE,
        &controller_rel,
        &request.controller_variables(),
    )?;
    files_created.push(controller_rel);

    // Per-entity view directory, idempotent.
    let views_dir = request.views_dir();
    create_dir(&root.join(&views_dir))?;

    // The list view is always emitted.
    let list_rel = views_dir.join(emitted_name(&CrudRequest::view_template("list")));
    emit(
        locator,
        root,
        &CrudRequest::view_template("list"),
        &list_rel,
        &request.view_variables("list"),
    )?;
    files_created.push(list_rel);

    for action in CONDITIONAL_VIEWS {
        if !request.actions.contains(action) {
            continue;
        }
        let template = CrudRequest::view_template(action);
        let view_rel = views_dir.join(emitted_name(&template));
        emit(
            locator,
            root,
            &template,
            &view_rel,
            &request.view_variables(action),
        )?;
        files_created.push(view_rel);
    }

    let test_rel = request.test_path();
    emit(
        locator,
        root,
        TEST_TEMPLATE,
        &test_rel,
        &request.test_variables(),
    )?;
    files_created.push(test_rel);

    let routing_skipped = !request.format.emits_routing();
    if !routing_skipped {
        let routing_rel = request.routing_path();
        emit(
            locator,
            root,
            &request.routing_template(),
            &routing_rel,
            &request.routing_variables(),
        )?;
        files_created.push(routing_rel);
    }

    Ok(GeneratedCrud {
        files_created,
        routing_skipped,
    })
}

/// Resolve, render, and write a single file.
fn emit<R: ResourceResolver>(
    locator: &SkeletonLocator<R>,
    root: &Path,
    resource: &str,
    target_rel: &Path,
    variables: &BTreeMap<String, Value>,
) -> Result<()> {
    let template_path = locator.locate(resource)?;
    let rendered = render_template_file(&template_path, &build_context(variables))?;

    let target = root.join(target_rel);
    if let Some(parent) = target.parent() {
        create_dir(parent)?;
    }
    std::fs::write(&target, rendered).map_err(|e| CrudkitError::Io {
        context: format!("writing {}", target.display()),
        source: e,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| CrudkitError::Io {
        context: format!("creating directory {}", path.display()),
        source: e,
    })
}

/// Join path parts, skipping empty components (bare entity names have no
/// namespace, and the controller subdirectory may be unset).
fn join_parts(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::new();
    for part in parts {
        if !part.is_empty() {
            path.push(part);
        }
    }
    path
}

/// Output file name for a template resource: the resource file name with the
/// `.tera` suffix stripped (`list.html.tera` emits `list.html`).
fn emitted_name(resource: &str) -> String {
    let name = resource.rsplit('/').next().unwrap_or(resource);
    name.strip_suffix(".tera").unwrap_or(name).to_string()
}

/// Extension of the emitted file, taken from the template resource name
/// (`controller.rs.tera` emits `.rs` sources).
fn emitted_extension(resource: &str) -> String {
    let stem = emitted_name(resource);
    stem.split_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_default()
}

fn string_array(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|s| Value::String(s.to_string())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_name_prefix_replaces_slashes() {
        assert_eq!(route_name_prefix("admin/blog"), "admin_blog");
        assert_eq!(route_name_prefix("post"), "post");
        assert_eq!(route_name_prefix("a/b/c"), "a_b_c");
    }

    #[test]
    fn emitted_name_strips_suffix() {
        assert_eq!(emitted_name("crud/views/list.html.tera"), "list.html");
        assert_eq!(emitted_name("crud/controller.rs.tera"), "controller.rs");
    }

    #[test]
    fn emitted_extension_from_resource() {
        assert_eq!(emitted_extension("crud/controller.rs.tera"), "rs");
        assert_eq!(emitted_extension("crud/config/routing.yaml.tera"), "yaml");
    }

    #[test]
    fn join_parts_skips_empty_components() {
        assert_eq!(
            join_parts(&["Controller", "", "Blog"]),
            PathBuf::from("Controller/Blog")
        );
        assert_eq!(join_parts(&["Controller", "", ""]), PathBuf::from("Controller"));
    }

    mod request {
        use super::super::*;
        use crate::metadata::FieldMapping;

        fn sample_metadata() -> EntityMetadata {
            EntityMetadata {
                identifier: vec!["id".into()],
                fields: vec![
                    FieldMapping {
                        name: "id".into(),
                        field_type: "integer".into(),
                        length: None,
                        nullable: false,
                    },
                    FieldMapping {
                        name: "title".into(),
                        field_type: "string".into(),
                        length: Some(255),
                        nullable: false,
                    },
                ],
            }
        }

        fn with_request<T>(f: impl FnOnce(&CrudRequest<'_>) -> T) -> T {
            let dir = tempfile::tempdir().unwrap();
            let bundle = Bundle::new("BlogBundle", "Blog", dir.path());
            let entity = EntityName::parse("Blog.Post").unwrap();
            let metadata = sample_metadata();
            let request =
                CrudRequest::new(&bundle, &entity, &metadata, "yaml", "post", true, "Backend")
                    .unwrap();
            f(&request)
        }

        #[test]
        fn controller_path_layout() {
            with_request(|request| {
                assert_eq!(
                    request.controller_path(),
                    PathBuf::from("Controller/Backend/Blog/PostController.rs")
                );
            });
        }

        #[test]
        fn views_dir_layout() {
            with_request(|request| {
                assert_eq!(
                    request.views_dir(),
                    PathBuf::from("Resources/views/Backend/Blog")
                );
            });
        }

        #[test]
        fn test_path_has_no_subdir() {
            with_request(|request| {
                assert_eq!(
                    request.test_path(),
                    PathBuf::from("Tests/Controller/Blog/PostControllerTest.rs")
                );
            });
        }

        #[test]
        fn routing_path_uses_underscored_entity() {
            with_request(|request| {
                assert_eq!(
                    request.routing_path(),
                    PathBuf::from("Resources/config/routing/blog_post.yaml")
                );
            });
        }

        #[test]
        fn unknown_format_normalizes_to_yaml() {
            let dir = tempfile::tempdir().unwrap();
            let bundle = Bundle::new("BlogBundle", "Blog", dir.path());
            let entity = EntityName::parse("Post").unwrap();
            let metadata = sample_metadata();
            let request =
                CrudRequest::new(&bundle, &entity, &metadata, "ini", "post", false, "").unwrap();
            assert_eq!(request.format, ConfigFormat::Yaml);
        }

        #[test]
        fn invalid_metadata_rejected_before_any_effect() {
            let dir = tempfile::tempdir().unwrap();
            let bundle = Bundle::new("BlogBundle", "Blog", dir.path());
            let entity = EntityName::parse("Post").unwrap();
            let metadata = EntityMetadata {
                identifier: vec!["uuid".into()],
                fields: Vec::new(),
            };
            let result =
                CrudRequest::new(&bundle, &entity, &metadata, "yaml", "post", false, "");
            assert!(matches!(result, Err(CrudkitError::IdentifierNotId { .. })));
        }

        #[test]
        fn list_variables_carry_fields_and_record_actions() {
            with_request(|request| {
                let vars = request.view_variables("list");
                assert_eq!(
                    vars.get("record_actions"),
                    Some(&Value::Array(vec![
                        Value::String("show".into()),
                        Value::String("edit".into()),
                    ]))
                );
                let fields = vars.get("fields").unwrap().as_array().unwrap();
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[1]["name"], Value::String("title".into()));
                assert_eq!(fields[1]["type"], Value::String("string".into()));
            });
        }

        #[test]
        fn new_view_variables_have_no_fields() {
            with_request(|request| {
                let vars = request.view_variables("new");
                assert!(vars.get("fields").is_none());
                assert!(vars.get("identifier").is_none());
                assert!(vars.get("route_prefix").is_some());
            });
        }
    }
}
