use std::path::Path;

use console::style;
use miette::Result;

use crudkit_core::{
    generate, load_metadata, Bundle, CrudRequest, CrudkitError, EntityName, SkeletonLocator,
};

const FORMATS: &[&str] = &["yaml", "xml", "php", "annotation"];

pub struct CrudArgs {
    pub entity: String,
    pub metadata: String,
    pub bundle: String,
    pub path: String,
    pub namespace: Option<String>,
    pub format: Option<String>,
    pub route_prefix: Option<String>,
    pub with_write: bool,
    pub theme: String,
    pub skeleton: String,
    pub subdir: String,
    pub no_interaction: bool,
}

pub fn run(args: CrudArgs) -> Result<()> {
    let entity = EntityName::parse(&args.entity)?;
    let metadata = load_metadata(Path::new(&args.metadata))?;

    let namespace = args.namespace.unwrap_or_else(|| args.bundle.clone());
    let bundle = Bundle::new(args.bundle.as_str(), namespace, args.path.as_str());

    let (with_write, format, route_prefix) = if args.no_interaction {
        (
            args.with_write,
            args.format.unwrap_or_else(|| "yaml".to_string()),
            args.route_prefix.unwrap_or_else(|| entity.singular()),
        )
    } else {
        ask_options(&entity, args.with_write, args.format, args.route_prefix)?
    };

    // Route-name derivation replaces every `/` with `_`; a leading slash
    // must be gone before the prefix reaches the generator.
    let route_prefix = route_prefix.trim_start_matches('/').to_string();

    let request = CrudRequest::new(
        &bundle,
        &entity,
        &metadata,
        &format,
        &route_prefix,
        with_write,
        &args.subdir,
    )?;
    let locator = SkeletonLocator::new(args.skeleton.as_str(), args.theme.as_str());

    let result = generate(&request, &locator)?;

    println!(
        "\n{} CRUD generated for {} in {}",
        style("✓").green().bold(),
        style(entity.full()).cyan(),
        style(bundle.root().display()).cyan()
    );
    for file in &result.files_created {
        println!("  {} {}", style("create").green(), file.display());
    }
    if result.routing_skipped {
        println!(
            "  {} routing configuration skipped (routes are declared in the controller)",
            style("note").dim()
        );
    }
    println!("\n{} files written", result.files_created.len());

    Ok(())
}

/// The interactive question flow: write actions, configuration format,
/// route prefix. Flag values become defaults.
fn ask_options(
    entity: &EntityName,
    with_write: bool,
    format: Option<String>,
    route_prefix: Option<String>,
) -> Result<(bool, String, String), CrudkitError> {
    let with_write = inquire::Confirm::new("Generate the write actions (new, edit, delete)?")
        .with_default(with_write)
        .prompt()
        .map_err(|_| CrudkitError::PromptCancelled)?;

    let mut select = inquire::Select::new("Configuration format:", FORMATS.to_vec());
    if let Some(default) = format.as_deref() {
        if let Some(idx) = FORMATS.iter().position(|f| *f == default) {
            select = select.with_starting_cursor(idx);
        }
    }
    let format = select
        .prompt()
        .map_err(|_| CrudkitError::PromptCancelled)?
        .to_string();

    let default_prefix = route_prefix.unwrap_or_else(|| entity.singular());
    let route_prefix = inquire::Text::new("Route prefix:")
        .with_default(&default_prefix)
        .prompt()
        .map_err(|_| CrudkitError::PromptCancelled)?;

    Ok((with_write, format, route_prefix))
}
