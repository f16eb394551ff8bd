//! Dependency coordinates and the declarations built from them.
//!
//! Raw catalog coordinates are written without a version:
//! `group:artifact` or `group:artifact:classifier`. Third-party extensions
//! turn them into [`Coordinate::Versioned`], which references the
//! extension's version property (`$<id>Version`) instead of a literal
//! version, so editing one property updates every coordinate that uses it.
//! Official extensions pin their version into a [`Coordinate::Literal`].
//!
//! The version goes right before the final segment when a classifier is
//! present, and is appended otherwise:
//!
//! ```
//! use launchpad_core::coordinate::{Coordinate, VersionProperties, VersionSource};
//!
//! let source = VersionSource::Property("utils".to_string());
//! let sources = Coordinate::build("g:a:sources", &source).unwrap();
//! assert_eq!(sources.notation(), "g:a:$utilsVersion:sources");
//!
//! let mut versions = VersionProperties::new();
//! versions.insert("utils", "1.2.3");
//! assert_eq!(sources.resolve(&versions), "g:a:1.2.3:sources");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Architectures every native Android artifact is published for.
pub const ANDROID_ABIS: [&str; 4] = ["armeabi-v7a", "arm64-v8a", "x86", "x86_64"];

/// Matches `$<id>Version` references inside free-form lines.
static PROPERTY_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z][A-Za-z0-9_]*)Version").unwrap());

/// Name of the build property holding an extension's version.
pub fn property_name(id: &str) -> String {
    format!("{id}Version")
}

/// Version property values keyed by extension id.
///
/// Holds at most one version per id; a later write replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionProperties {
    values: BTreeMap<String, String>,
}

impl VersionProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version for `id`, returning the previous value if any.
    pub fn insert(&mut self, id: impl Into<String>, version: impl Into<String>) -> Option<String> {
        self.values.insert(id.into(), version.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// `(id, version)` pairs sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// One `<id>Version=<version>` line per property.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(id, version)| format!("{}={}\n", property_name(id), version))
            .collect()
    }
}

/// Where a coordinate takes its version from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Reference the version property of the given extension id.
    Property(String),
    /// Bake this version into the coordinate.
    Pinned(String),
}

/// A single dependency coordinate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coordinate {
    /// Emitted as written. Version overrides never touch it.
    Literal(String),
    /// `base:$<property>Version[:classifier]`.
    Versioned {
        base: String,
        classifier: Option<String>,
        property: String,
    },
}

impl Coordinate {
    /// Build a coordinate from a raw `group:artifact[:classifier]` string.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedCoordinate` when `raw` has no `:` separator
    /// or an empty segment.
    pub fn build(raw: &str, source: &VersionSource) -> Result<Self> {
        let (base, classifier) = split_raw(raw)?;
        Ok(Self::assemble(base, classifier, source))
    }

    /// Wrap an already complete coordinate.
    pub fn literal(coordinate: impl Into<String>) -> Self {
        Coordinate::Literal(coordinate.into())
    }

    fn assemble(base: &str, classifier: Option<&str>, source: &VersionSource) -> Self {
        match source {
            VersionSource::Property(id) => Coordinate::Versioned {
                base: base.to_string(),
                classifier: classifier.map(str::to_string),
                property: id.clone(),
            },
            VersionSource::Pinned(version) => Coordinate::Literal(match classifier {
                Some(classifier) => format!("{base}:{version}:{classifier}"),
                None => format!("{base}:{version}"),
            }),
        }
    }

    /// The coordinate as written into a build script.
    pub fn notation(&self) -> String {
        match self {
            Coordinate::Literal(coordinate) => coordinate.clone(),
            Coordinate::Versioned {
                base,
                classifier,
                property,
            } => join(base, &format!("${}", property_name(property)), classifier),
        }
    }

    /// The coordinate with its version property substituted.
    ///
    /// A missing property leaves the `$<id>Version` reference in place.
    pub fn resolve(&self, versions: &VersionProperties) -> String {
        match self {
            Coordinate::Literal(coordinate) => coordinate.clone(),
            Coordinate::Versioned {
                base,
                classifier,
                property,
            } => match versions.get(property) {
                Some(version) => join(base, version, classifier),
                None => self.notation(),
            },
        }
    }
}

fn join(base: &str, version: &str, classifier: &Option<String>) -> String {
    match classifier {
        Some(classifier) => format!("{base}:{version}:{classifier}"),
        None => format!("{base}:{version}"),
    }
}

/// Split a raw coordinate into its versionless base and optional classifier.
fn split_raw(raw: &str) -> Result<(&str, Option<&str>)> {
    let malformed = |reason| Error::MalformedCoordinate {
        coordinate: raw.to_string(),
        reason,
    };
    if raw.split(':').any(str::is_empty) {
        return Err(malformed("empty segment"));
    }
    match raw.matches(':').count() {
        0 => Err(malformed("expected group:artifact")),
        1 => Ok((raw, None)),
        _ => {
            let (base, classifier) = raw
                .rsplit_once(':')
                .ok_or_else(|| malformed("expected group:artifact"))?;
            Ok((base, Some(classifier)))
        }
    }
}

/// One line of a module's `dependencies { }` block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Declaration {
    /// `implementation "<coordinate>"`
    Implementation(Coordinate),
    /// `natives "<coordinate>"`, used for per-ABI Android artifacts.
    Natives(Coordinate),
    /// A free-form line such as an annotation processor declaration.
    Special(String),
}

impl Declaration {
    /// The build-script line for this declaration.
    pub fn render(&self) -> String {
        match self {
            Declaration::Implementation(coordinate) => {
                format!("implementation \"{}\"", coordinate.notation())
            }
            Declaration::Natives(coordinate) => format!("natives \"{}\"", coordinate.notation()),
            Declaration::Special(line) => line.clone(),
        }
    }

    /// The concrete dependency this declaration pulls in.
    ///
    /// Coordinates resolve to `group:artifact:version[:classifier]`; special
    /// lines are returned with every known `$<id>Version` reference replaced.
    pub fn resolve(&self, versions: &VersionProperties) -> String {
        match self {
            Declaration::Implementation(coordinate) | Declaration::Natives(coordinate) => {
                coordinate.resolve(versions)
            }
            Declaration::Special(line) => PROPERTY_REFERENCE
                .replace_all(line, |caps: &regex::Captures<'_>| {
                    versions
                        .get(&caps[1])
                        .map(str::to_string)
                        .unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Declaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Expand one native Android request into a `natives` declaration per ABI.
///
/// `raw` must be `group:artifact`; the classifier is supplied per ABI as
/// `natives-<abi>`.
pub fn native_android(raw: &str, source: &VersionSource) -> Result<Vec<Declaration>> {
    let (base, classifier) = split_raw(raw)?;
    if classifier.is_some() {
        return Err(Error::MalformedCoordinate {
            coordinate: raw.to_string(),
            reason: "native Android artifacts take their classifier from the ABI",
        });
    }
    Ok(ANDROID_ABIS
        .iter()
        .map(|abi| {
            let classifier = format!("natives-{abi}");
            Declaration::Natives(Coordinate::assemble(base, Some(&classifier), source))
        })
        .collect())
}
