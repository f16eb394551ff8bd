//! Catalog of known extensions.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::graph::RequiresGraph;
use crate::platform::Platform;

/// Registry of every extension a user can select, keyed by id.
///
/// Built once at startup from explicit descriptors; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ExtensionCatalog {
    entries: HashMap<String, Extension>,
}

impl ExtensionCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an extension, replacing any entry with the same id.
    pub fn register(&mut self, extension: Extension) {
        self.entries.insert(extension.id.clone(), extension);
    }

    /// Register an extension, refusing to replace an existing id.
    pub fn try_register(&mut self, extension: Extension) -> Result<()> {
        if self.entries.contains_key(&extension.id) {
            return Err(Error::DuplicateExtension(extension.id));
        }
        self.register(extension);
        Ok(())
    }

    /// Look up an extension by id.
    pub fn get(&self, id: &str) -> Option<&Extension> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All extension ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Extensions sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.ids().into_iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the catalog for authoring defects.
    ///
    /// Every requirement must name a registered extension, every coordinate
    /// must template, no two entries may copy different files to the same
    /// destination, and the requires graph must be acyclic. Run this before
    /// resolving user selections.
    pub fn validate(&self) -> Result<()> {
        let mut destinations: BTreeMap<(Platform, &str), (&str, &str)> = BTreeMap::new();
        for extension in self.iter() {
            for file in extension.files() {
                let key = (file.module, file.destination.as_str());
                match destinations.get(&key) {
                    Some((owner, original)) if *original != file.original => {
                        return Err(Error::ConflictingFile {
                            module: file.module,
                            destination: file.destination.clone(),
                            first: owner.to_string(),
                            second: extension.id.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        destinations.insert(key, (extension.id.as_str(), file.original.as_str()));
                    }
                }
            }
            for required in &extension.requires {
                if !self.contains(required) {
                    return Err(Error::UnknownRequirement {
                        extension: extension.id.clone(),
                        requires: required.clone(),
                    });
                }
            }
            extension.declarations()?;
        }
        let order = RequiresGraph::from_catalog(self).topological_sort()?;
        debug!(extensions = order.len(), "catalog self-check passed");
        Ok(())
    }
}
