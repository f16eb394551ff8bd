//! Resolution engine.
//!
//! Walks the user's selection depth-first through the requires graph,
//! initiating each extension once its requirements are in place. A visited
//! set keeps each extension to a single initiation per run; an in-progress
//! stack turns a requires cycle into an error instead of unbounded recursion.
//! The final state does not depend on selection order because every write
//! an extension makes is a set insert, a keyed version write, or a file copy
//! whose winner is picked by content.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::catalog::ExtensionCatalog;
use crate::config::GenerationRequest;
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::state::{ProjectBuilder, ProjectState};

/// Drives extension initiation against a project builder.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a ExtensionCatalog,
}

/// Bookkeeping for one resolution walk.
#[derive(Debug, Default)]
struct Walk {
    resolved: HashSet<String>,
    stack: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a ExtensionCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve selected extensions, in selection order, into `project`.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownExtension` if a selected id is not in the catalog
    /// - `Error::UnknownRequirement` if an extension requires a missing id
    /// - `Error::RequiresCycle` if the walk re-enters an extension in progress
    /// - `Error::MalformedCoordinate` from a defective catalog entry
    pub fn resolve<S: AsRef<str>>(&self, selection: &[S], project: &mut ProjectBuilder) -> Result<()> {
        let mut walk = Walk::default();
        for id in selection {
            let id = id.as_ref();
            let extension = self
                .catalog
                .get(id)
                .ok_or_else(|| Error::UnknownExtension(id.to_string()))?;
            self.visit(extension, &mut walk, project)?;
        }
        debug!(
            selected = selection.len(),
            resolved = walk.resolved.len(),
            "resolution finished"
        );
        Ok(())
    }

    fn visit(&self, extension: &Extension, walk: &mut Walk, project: &mut ProjectBuilder) -> Result<()> {
        if walk.resolved.contains(&extension.id) {
            trace!(extension = %extension.id, "already resolved");
            return Ok(());
        }
        if let Some(start) = walk.stack.iter().position(|id| *id == extension.id) {
            let mut participants = walk.stack[start..].to_vec();
            participants.push(extension.id.clone());
            return Err(Error::RequiresCycle { participants });
        }

        walk.stack.push(extension.id.clone());
        for required in &extension.requires {
            let target = self
                .catalog
                .get(required)
                .ok_or_else(|| Error::UnknownRequirement {
                    extension: extension.id.clone(),
                    requires: required.clone(),
                })?;
            trace!(extension = %extension.id, requires = %required, "resolving requirement");
            self.visit(target, walk, project)?;
        }

        debug!(extension = %extension.id, version = %extension.default_version, "initiating extension");
        extension.initiate(project)?;
        walk.stack.pop();
        walk.resolved.insert(extension.id.clone());
        Ok(())
    }

    /// Run a whole generation request and freeze the result.
    ///
    /// Seeds the language plugins and the active platforms' build
    /// dependencies, resolves the selection, applies the user's version
    /// overrides and returns the read-only state.
    pub fn generate(&self, request: &GenerationRequest) -> Result<ProjectState> {
        request.validate()?;
        let platforms = request.platforms()?;
        let mut project = ProjectBuilder::new(platforms.clone());
        for plugin in request.project.language.plugins() {
            project.add_plugin(*plugin);
        }
        for platform in platforms.active() {
            for coordinate in platform.build_dependencies() {
                project.add_build_dependency(*coordinate);
            }
        }
        self.resolve(&request.extensions, &mut project)?;
        for (id, version) in &request.overrides {
            project.override_version(id.as_str(), version.as_str());
        }
        Ok(project.freeze())
    }
}
