mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::Crud {
            entity,
            metadata,
            bundle,
            path,
            namespace,
            format,
            route_prefix,
            with_write,
            theme,
            skeleton,
            subdir,
            no_interaction,
        } => commands::crud::run(commands::crud::CrudArgs {
            entity,
            metadata,
            bundle,
            path,
            namespace,
            format,
            route_prefix,
            with_write,
            theme,
            skeleton,
            subdir,
            no_interaction,
        }),
        Commands::Check { skeleton, theme } => commands::check::run(skeleton, theme),
    }
}
