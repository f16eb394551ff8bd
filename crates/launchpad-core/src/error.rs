use std::path::PathBuf;

use crate::platform::Platform;

/// Errors that can occur while building a catalog or resolving a project.
///
/// Catalog defects (malformed coordinates, unknown requirements, cycles,
/// duplicate ids) abort generation. Request problems (unknown platform or
/// extension ids, bad project version) are reported the same way but point at
/// the user's request file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A platform id that is not part of the fixed platform set.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// A selected extension id that is not in the catalog.
    #[error("unknown extension: {0}")]
    UnknownExtension(String),

    /// An extension requires another extension that is not in the catalog.
    #[error("extension '{extension}' requires unknown extension '{requires}'")]
    UnknownRequirement { extension: String, requires: String },

    /// Two catalog entries share the same id.
    #[error("duplicate extension id: {0}")]
    DuplicateExtension(String),

    /// A raw coordinate that cannot be templated.
    #[error("malformed coordinate '{coordinate}': {reason}")]
    MalformedCoordinate {
        coordinate: String,
        reason: &'static str,
    },

    /// Two catalog entries copy different files to the same destination.
    #[error(
        "extensions '{first}' and '{second}' both copy a file to '{destination}' in module '{module}'"
    )]
    ConflictingFile {
        module: Platform,
        destination: String,
        first: String,
        second: String,
    },

    /// The requires graph contains a cycle.
    #[error("requires cycle between extensions: {}", participants.join(" -> "))]
    RequiresCycle { participants: Vec<String> },

    /// Invalid semver version string.
    #[error("invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    /// Failed to parse a generation request.
    #[error("failed to parse generation request: {0}")]
    RequestParse(#[from] toml::de::Error),

    /// Generation request file not found at the expected path.
    #[error("generation request not found: {}", .0.display())]
    RequestNotFound(PathBuf),

    /// I/O error reading request files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
