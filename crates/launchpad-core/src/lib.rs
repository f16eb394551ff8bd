//! Extension resolution and build-state assembly for Launchpad.
//!
//! This crate turns a selection of extensions and target platforms into a
//! frozen [`ProjectState`]: per-platform dependency declarations, shared
//! version properties, plugins, web inherit directives and file copy
//! actions. Build-file renderers read that state; the root build file is
//! aggregated by [`RootBuild`].

pub mod catalog;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod extension;
pub mod graph;
pub mod platform;
pub mod resolver;
pub mod root;
pub mod state;

pub use catalog::ExtensionCatalog;
pub use config::{GenerationRequest, Language, ProjectMetadata};
pub use coordinate::{Coordinate, Declaration, VersionProperties, VersionSource};
pub use error::{Error, Result};
pub use extension::{Extension, Metadata, Repository, Step};
pub use graph::RequiresGraph;
pub use platform::{Platform, Platforms};
pub use resolver::Resolver;
pub use root::RootBuild;
pub use state::{CopiedFile, ProjectBuilder, ProjectState};
