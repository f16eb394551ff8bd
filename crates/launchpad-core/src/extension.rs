//! Extension descriptors.
//!
//! An [`Extension`] is a flat data record: identity, default version,
//! upstream metadata, the ids of the extensions it requires, and the steps
//! it applies to the project. The resolver walks `requires` first and then
//! calls [`Extension::initiate`].

use std::fmt;

use serde::Serialize;

use crate::coordinate::{Coordinate, Declaration, VersionSource, native_android};
use crate::error::Result;
use crate::platform::Platform;
use crate::state::{CopiedFile, ProjectBuilder};

/// Maven repository an extension is published to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Repository {
    #[default]
    MavenCentral,
    JitPack,
}

impl Repository {
    pub fn url(&self) -> &'static str {
        match self {
            Repository::MavenCentral => "https://repo.maven.apache.org/maven2/",
            Repository::JitPack => "https://jitpack.io",
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repository::MavenCentral => write!(f, "Maven Central"),
            Repository::JitPack => write!(f, "JitPack"),
        }
    }
}

/// Upstream metadata shown when browsing the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Artifact name of the main library.
    pub name: String,
    /// Maven group.
    pub group: String,
    /// Project homepage or source repository.
    pub url: String,
    pub repository: Repository,
    pub description: String,
}

/// One thing an extension does to the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `implementation` of a raw coordinate on one platform.
    Dependency { platform: Platform, coordinate: String },
    /// `implementation` of a raw coordinate on both desktop platforms.
    Desktop(String),
    /// `implementation` of a complete coordinate, used verbatim.
    External { platform: Platform, coordinate: String },
    /// One `natives` declaration per Android ABI.
    NativeAndroid(String),
    /// A free-form dependency line.
    Special { platform: Platform, line: String },
    /// Web module inherit directive.
    Inherit(String),
    /// Plugin applied to every non-root module.
    Plugin(String),
    CopyFile(CopiedFile),
}

/// A user-selectable library integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Unique id, also the version property prefix.
    pub id: String,
    pub default_version: String,
    /// Official extensions pin their version into every coordinate.
    pub official: bool,
    pub metadata: Metadata,
    /// Ids of extensions resolved before this one.
    pub requires: Vec<String>,
    pub steps: Vec<Step>,
}

impl Extension {
    /// Start a third-party extension whose coordinates reference `$<id>Version`.
    pub fn third_party(id: impl Into<String>, default_version: impl Into<String>) -> Self {
        Self::new(id.into(), default_version.into(), false)
    }

    /// Start an official extension whose coordinates carry a fixed version.
    pub fn official(id: impl Into<String>, default_version: impl Into<String>) -> Self {
        Self::new(id.into(), default_version.into(), true)
    }

    fn new(id: String, default_version: String, official: bool) -> Self {
        Self {
            id,
            default_version,
            official,
            metadata: Metadata::default(),
            requires: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn named(
        mut self,
        name: impl Into<String>,
        group: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.metadata.name = name.into();
        self.metadata.group = group.into();
        self.metadata.url = url.into();
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    pub fn repository(mut self, repository: Repository) -> Self {
        self.metadata.repository = repository;
        self
    }

    pub fn requires(mut self, id: impl Into<String>) -> Self {
        self.requires.push(id.into());
        self
    }

    pub fn dependency(self, platform: Platform, coordinate: impl Into<String>) -> Self {
        self.step(Step::Dependency {
            platform,
            coordinate: coordinate.into(),
        })
    }

    pub fn desktop(self, coordinate: impl Into<String>) -> Self {
        self.step(Step::Desktop(coordinate.into()))
    }

    pub fn external(self, platform: Platform, coordinate: impl Into<String>) -> Self {
        self.step(Step::External {
            platform,
            coordinate: coordinate.into(),
        })
    }

    pub fn native_android(self, coordinate: impl Into<String>) -> Self {
        self.step(Step::NativeAndroid(coordinate.into()))
    }

    pub fn special(self, platform: Platform, line: impl Into<String>) -> Self {
        self.step(Step::Special {
            platform,
            line: line.into(),
        })
    }

    pub fn inherit(self, directive: impl Into<String>) -> Self {
        self.step(Step::Inherit(directive.into()))
    }

    pub fn plugin(self, plugin: impl Into<String>) -> Self {
        self.step(Step::Plugin(plugin.into()))
    }

    pub fn copy_file(
        self,
        module: Platform,
        original: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.step(Step::CopyFile(CopiedFile::new(module, original, destination)))
    }

    fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Where this extension's coordinates take their version from.
    pub fn version_source(&self) -> VersionSource {
        if self.official {
            VersionSource::Pinned(self.default_version.clone())
        } else {
            VersionSource::Property(self.id.clone())
        }
    }

    /// File copy actions this extension performs.
    pub fn files(&self) -> impl Iterator<Item = &CopiedFile> {
        self.steps.iter().filter_map(|step| match step {
            Step::CopyFile(file) => Some(file),
            _ => None,
        })
    }

    /// Build every declaration this extension makes, per platform,
    /// regardless of which platforms are active.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedCoordinate` for the first raw coordinate that
    /// cannot be templated.
    pub fn declarations(&self) -> Result<Vec<(Platform, Declaration)>> {
        let source = self.version_source();
        let mut declarations = Vec::new();
        for step in &self.steps {
            match step {
                Step::Dependency {
                    platform,
                    coordinate,
                } => declarations.push((
                    *platform,
                    Declaration::Implementation(Coordinate::build(coordinate, &source)?),
                )),
                Step::Desktop(coordinate) => {
                    let coordinate = Coordinate::build(coordinate, &source)?;
                    for platform in Platform::DESKTOP {
                        declarations
                            .push((platform, Declaration::Implementation(coordinate.clone())));
                    }
                }
                Step::External {
                    platform,
                    coordinate,
                } => declarations.push((
                    *platform,
                    Declaration::Implementation(Coordinate::literal(coordinate.as_str())),
                )),
                Step::NativeAndroid(coordinate) => {
                    for declaration in native_android(coordinate, &source)? {
                        declarations.push((Platform::Android, declaration));
                    }
                }
                Step::Special { platform, line } => {
                    declarations.push((*platform, Declaration::Special(line.clone())))
                }
                Step::Inherit(_) | Step::Plugin(_) | Step::CopyFile(_) => {}
            }
        }
        Ok(declarations)
    }

    /// Apply this extension's own steps to the project.
    ///
    /// Records the default version, then inserts declarations, plugins,
    /// inherits and files. Every write is idempotent, so initiating twice
    /// leaves the project as initiating once. Requirements are not touched;
    /// the resolver walks them.
    ///
    /// Official extensions pin their version into each coordinate and get no
    /// version property.
    pub fn initiate(&self, project: &mut ProjectBuilder) -> Result<()> {
        project.record_extension(&self.id);
        if !self.official {
            project.record_version(&self.id, &self.default_version);
        }
        for (platform, declaration) in self.declarations()? {
            project.add_dependency(platform, declaration);
        }
        for step in &self.steps {
            match step {
                Step::Inherit(directive) => {
                    project.add_web_inherit(directive.as_str());
                }
                Step::Plugin(plugin) => {
                    project.add_plugin(plugin.as_str());
                }
                Step::CopyFile(file) => {
                    project.add_file(file.clone());
                }
                _ => {}
            }
        }
        Ok(())
    }
}
