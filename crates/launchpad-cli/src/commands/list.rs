//! Catalog listing command

use colored::Colorize;
use launchpad_core::{Extension, Repository};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    version: &'a str,
    official: bool,
    name: &'a str,
    group: &'a str,
    url: &'a str,
    repository: Repository,
    repository_url: &'static str,
    requires: &'a [String],
}

impl<'a> From<&'a Extension> for ListEntry<'a> {
    fn from(extension: &'a Extension) -> Self {
        Self {
            id: &extension.id,
            version: &extension.default_version,
            official: extension.official,
            name: &extension.metadata.name,
            group: &extension.metadata.group,
            url: &extension.metadata.url,
            repository: extension.metadata.repository,
            repository_url: extension.metadata.repository.url(),
            requires: &extension.requires,
        }
    }
}

/// Run the list command
pub fn run_list(json: bool) -> Result<()> {
    let catalog = super::load_catalog()?;

    if json {
        let entries: Vec<ListEntry<'_>> = catalog.iter().map(ListEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Available Extensions".bold());
    println!();
    for (label, official) in [("Official", true), ("Third-party", false)] {
        println!("{}:", label.cyan().bold());
        for extension in catalog.iter().filter(|e| e.official == official) {
            println!(
                "  {:<20} {:<12} {}",
                extension.id.green(),
                extension.default_version,
                extension.metadata.description.dimmed()
            );
            if !extension.requires.is_empty() {
                println!(
                    "  {:<20} {} {}",
                    "",
                    "requires".dimmed(),
                    extension.requires.join(", ").yellow()
                );
            }
            if extension.metadata.repository != Repository::MavenCentral {
                println!(
                    "  {:<20} {} {} ({})",
                    "",
                    "from".dimmed(),
                    extension.metadata.repository,
                    extension.metadata.repository.url()
                );
            }
        }
        println!();
    }
    Ok(())
}
