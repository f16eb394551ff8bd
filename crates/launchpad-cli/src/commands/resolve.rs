//! Resolve command
//!
//! Loads a generation request, resolves it against the built-in catalog and
//! prints the frozen project state.

use std::path::Path;

use colored::Colorize;
use launchpad_core::{GenerationRequest, ProjectState, Resolver};
use tracing::debug;

use crate::error::{CliError, Result};

/// Run the resolve command
pub fn run_resolve(request: &Path, json: bool) -> Result<()> {
    let request = GenerationRequest::from_path(request)?;
    let catalog = super::load_catalog()?;

    if let Some(unknown) = request.extensions.iter().find(|id| !catalog.contains(id)) {
        return Err(CliError::user(format!(
            "Extension '{}' not found in catalog. Run 'launchpad list' to see available extensions.",
            unknown
        )));
    }

    let state = Resolver::new(&catalog).generate(&request)?;
    debug!(
        platforms = state.platforms().len(),
        versions = state.version_properties().len(),
        "project state frozen"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_summary(&request, &state);
    }
    Ok(())
}

fn print_summary(request: &GenerationRequest, state: &ProjectState) {
    println!(
        "{} Resolved '{}' ({} extensions selected)",
        "=>".blue().bold(),
        request.project.name.cyan(),
        request.extensions.len()
    );

    for platform in state.platforms().active() {
        println!();
        println!("{} {}", platform.name().bold(), format!("({platform})").dimmed());
        let dependencies = state.dependencies(platform);
        if dependencies.is_empty() {
            println!("  {}", "no dependencies".dimmed());
        }
        for declaration in dependencies {
            println!("  {declaration}");
        }
    }

    println!();
    println!("{}", "Version properties".bold());
    for line in state.version_properties().render().lines() {
        println!("  {line}");
    }

    if !state.build_dependencies().is_empty() {
        println!();
        println!("{}", "Build dependencies".bold());
        for coordinate in state.build_dependencies() {
            println!("  classpath \"{}\"", coordinate.green());
        }
    }

    if !state.plugins().is_empty() {
        println!();
        println!("{}", "Plugins".bold());
        for plugin in state.plugins() {
            println!("  apply plugin: '{}'", plugin.green());
        }
    }

    if !state.web_inherits().is_empty() {
        println!();
        println!("{}", "Web inherits".bold());
        for directive in state.web_inherits() {
            println!("  <inherits name=\"{directive}\" />");
        }
    }

    if !state.files().is_empty() {
        println!();
        println!("{}", "Files".bold());
        for file in state.files() {
            println!("  {} -> {}/{}", file.original, file.module, file.destination.yellow());
        }
    }
}
