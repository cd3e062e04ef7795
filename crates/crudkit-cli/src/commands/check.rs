use std::path::Path;

use console::style;
use miette::Result;

use crudkit_core::check::check_skeleton;

pub fn run(skeleton: String, theme: String) -> Result<()> {
    let root = Path::new(&skeleton);

    println!(
        "{} {} (theme: {})",
        style("Checking skeleton at").bold(),
        style(root.display()).cyan(),
        style(&theme).cyan()
    );

    let result = check_skeleton(root, &theme)?;

    println!("  Templates resolved: {}", result.resolved);

    if !result.warnings.is_empty() {
        println!("\n{}", style("Warnings:").yellow().bold());
        for w in &result.warnings {
            println!("  {} {}", style("⚠").yellow(), w);
        }
    }

    if !result.errors.is_empty() {
        println!("\n{}", style("Errors:").red().bold());
        for e in &result.errors {
            println!("  {} {}", style("✗").red(), e);
        }
        println!(
            "\n{} Skeleton has {} error(s)",
            style("✗").red().bold(),
            result.errors.len()
        );
        std::process::exit(1);
    }

    println!("\n{} Skeleton is valid!", style("✓").green().bold());
    Ok(())
}
