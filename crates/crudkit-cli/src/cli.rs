use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "crudkit",
    about = "Generate CRUD controllers, views, routing and test stubs for an entity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a CRUD workflow for an entity
    Crud {
        /// Namespace-qualified entity name (e.g. Blog.Post)
        entity: String,

        /// Entity metadata file (TOML)
        #[arg(short, long)]
        metadata: String,

        /// Name of the bundle receiving the generated files
        #[arg(short, long)]
        bundle: String,

        /// Bundle root directory
        #[arg(short, long)]
        path: String,

        /// Bundle namespace (default: the bundle name)
        #[arg(long)]
        namespace: Option<String>,

        /// Routing configuration format: yaml, xml, php or annotation
        #[arg(short, long)]
        format: Option<String>,

        /// Route prefix (e.g. admin/blog)
        #[arg(long)]
        route_prefix: Option<String>,

        /// Also generate the write actions (new, edit, delete)
        #[arg(long)]
        with_write: bool,

        /// Skeleton theme to use
        #[arg(long, default_value = "default")]
        theme: String,

        /// Skeleton root directory
        #[arg(long, default_value = "skeletons")]
        skeleton: String,

        /// Subdirectory for controllers and views within the bundle
        #[arg(long, default_value = "")]
        subdir: String,

        /// Never prompt; use flag values and defaults as-is
        #[arg(short = 'n', long)]
        no_interaction: bool,
    },

    /// Validate a skeleton installation
    Check {
        /// Skeleton root directory
        #[arg(long, default_value = "skeletons")]
        skeleton: String,

        /// Skeleton theme to check
        #[arg(long, default_value = "default")]
        theme: String,
    },
}
