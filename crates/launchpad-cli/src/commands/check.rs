//! Catalog self-check command

use colored::Colorize;
use launchpad_core::RequiresGraph;

use crate::error::Result;

/// Run the catalog self-check and report the requires edges it verified.
pub fn run_check() -> Result<()> {
    let catalog = super::load_catalog()?;
    let graph = RequiresGraph::from_catalog(&catalog);

    println!(
        "{} Catalog OK: {} extensions, {} requires edges",
        "=>".blue().bold(),
        catalog.len().to_string().cyan(),
        graph.edge_count().to_string().cyan()
    );
    Ok(())
}
