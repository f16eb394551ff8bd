//! Project state assembled during resolution.
//!
//! [`ProjectBuilder`] is the single mutable aggregate extensions write into.
//! Every write is a set insert or a keyed map write, so replaying an
//! extension leaves the builder unchanged. [`ProjectBuilder::freeze`] turns it
//! into a read-only [`ProjectState`] for the build-file renderers.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::coordinate::{Declaration, VersionProperties};
use crate::platform::{Platform, Platforms};

static NO_DEPENDENCIES: BTreeSet<Declaration> = BTreeSet::new();

/// A template resource copied into a generated module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CopiedFile {
    /// Module the file lands in.
    pub module: Platform,
    /// Template resource path.
    pub original: String,
    /// Destination path inside the module.
    pub destination: String,
}

impl CopiedFile {
    pub fn new(module: Platform, original: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            module,
            original: original.into(),
            destination: destination.into(),
        }
    }
}

/// Mutable aggregate threaded through resolution.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    platforms: Platforms,
    extensions: BTreeSet<String>,
    dependencies: BTreeMap<Platform, BTreeSet<Declaration>>,
    versions: VersionProperties,
    overrides: BTreeMap<String, String>,
    build_dependencies: BTreeSet<String>,
    plugins: BTreeSet<String>,
    web_inherits: BTreeSet<String>,
    files: BTreeMap<(Platform, String), CopiedFile>,
}

impl ProjectBuilder {
    /// Create an empty builder for the given active platforms.
    pub fn new(platforms: Platforms) -> Self {
        Self {
            platforms,
            extensions: BTreeSet::new(),
            dependencies: BTreeMap::new(),
            versions: VersionProperties::new(),
            overrides: BTreeMap::new(),
            build_dependencies: BTreeSet::new(),
            plugins: BTreeSet::new(),
            web_inherits: BTreeSet::new(),
            files: BTreeMap::new(),
        }
    }

    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.is_active(platform)
    }

    /// Mark an extension as resolved.
    pub fn record_extension(&mut self, id: impl Into<String>) -> bool {
        self.extensions.insert(id.into())
    }

    /// Record the default version of an extension.
    ///
    /// Two different defaults for the same id keep the last one written.
    pub fn record_version(&mut self, id: &str, version: &str) {
        if let Some(previous) = self.versions.insert(id, version)
            && previous != version
        {
            warn!(
                extension = id,
                previous = %previous,
                version,
                "conflicting default versions, keeping the last one"
            );
        }
    }

    /// Set a user override. Overrides win over defaults at [`freeze`](Self::freeze).
    pub fn override_version(&mut self, id: impl Into<String>, version: impl Into<String>) {
        self.overrides.insert(id.into(), version.into());
    }

    /// Add a declaration to a module. Inactive platforms are skipped.
    ///
    /// Returns whether the declaration was newly inserted.
    pub fn add_dependency(&mut self, platform: Platform, declaration: Declaration) -> bool {
        if !self.platforms.is_active(platform) {
            trace!(%platform, %declaration, "skipping dependency for inactive platform");
            return false;
        }
        self.dependencies
            .entry(platform)
            .or_default()
            .insert(declaration)
    }

    /// Add a `classpath` coordinate to the root build script.
    pub fn add_build_dependency(&mut self, coordinate: impl Into<String>) -> bool {
        self.build_dependencies.insert(coordinate.into())
    }

    /// Add a plugin applied to every non-root module.
    pub fn add_plugin(&mut self, plugin: impl Into<String>) -> bool {
        self.plugins.insert(plugin.into())
    }

    /// Add a web module inherit directive. Skipped when web is inactive.
    pub fn add_web_inherit(&mut self, directive: impl Into<String>) -> bool {
        if !self.platforms.is_active(Platform::WEB) {
            return false;
        }
        self.web_inherits.insert(directive.into())
    }

    /// Add a file copy action, keyed by module and destination.
    ///
    /// Skipped when the target module is inactive. When two actions target
    /// the same destination, the lexicographically smallest original is kept
    /// whatever order they arrive in.
    ///
    /// Returns whether the stored action changed.
    pub fn add_file(&mut self, file: CopiedFile) -> bool {
        if !self.platforms.is_active(file.module) {
            return false;
        }
        let key = (file.module, file.destination.clone());
        match self.files.get(&key) {
            Some(existing) if existing.original == file.original => false,
            Some(existing) => {
                warn!(
                    module = %file.module,
                    destination = %file.destination,
                    kept = %existing.original.as_str().min(file.original.as_str()),
                    "conflicting file copies for one destination"
                );
                if file.original < existing.original {
                    self.files.insert(key, file);
                    true
                } else {
                    false
                }
            }
            None => {
                self.files.insert(key, file);
                true
            }
        }
    }

    /// Freeze the builder, layering overrides over recorded defaults.
    ///
    /// Overrides only apply to extensions that were resolved.
    pub fn freeze(self) -> ProjectState {
        let mut versions = self.versions;
        for (id, version) in self.overrides {
            if versions.contains(&id) {
                debug!(extension = %id, version = %version, "applying version override");
                versions.insert(id, version);
            } else if self.extensions.contains(&id) {
                debug!(extension = %id, "ignoring override for pinned extension");
            } else {
                debug!(extension = %id, "ignoring override for unresolved extension");
            }
        }
        ProjectState {
            platforms: self.platforms,
            extensions: self.extensions,
            dependencies: self.dependencies,
            versions,
            build_dependencies: self.build_dependencies,
            plugins: self.plugins,
            web_inherits: self.web_inherits,
            files: self.files.into_values().collect(),
        }
    }
}

/// Read-only result of a resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectState {
    platforms: Platforms,
    extensions: BTreeSet<String>,
    dependencies: BTreeMap<Platform, BTreeSet<Declaration>>,
    versions: VersionProperties,
    build_dependencies: BTreeSet<String>,
    plugins: BTreeSet<String>,
    web_inherits: BTreeSet<String>,
    files: Vec<CopiedFile>,
}

impl ProjectState {
    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.is_active(platform)
    }

    /// Ids of every resolved extension, requirements included.
    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Declarations for a module; empty for inactive platforms.
    pub fn dependencies(&self, platform: Platform) -> &BTreeSet<Declaration> {
        self.dependencies.get(&platform).unwrap_or(&NO_DEPENDENCIES)
    }

    /// Concrete coordinates for a module with version properties substituted.
    pub fn resolved_dependencies(&self, platform: Platform) -> BTreeSet<String> {
        self.dependencies(platform)
            .iter()
            .map(|declaration| declaration.resolve(&self.versions))
            .collect()
    }

    pub fn version_properties(&self) -> &VersionProperties {
        &self.versions
    }

    pub fn version(&self, id: &str) -> Option<&str> {
        self.versions.get(id)
    }

    /// `classpath` coordinates of the root build script.
    pub fn build_dependencies(&self) -> &BTreeSet<String> {
        &self.build_dependencies
    }

    /// Plugins applied to every non-root module.
    pub fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    pub fn web_inherits(&self) -> &BTreeSet<String> {
        &self.web_inherits
    }

    /// File copy actions ordered by module then destination.
    pub fn files(&self) -> &[CopiedFile] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use pretty_assertions::assert_eq;

    fn implementation(coordinate: &str) -> Declaration {
        Declaration::Implementation(Coordinate::literal(coordinate))
    }

    fn builder(platforms: &[Platform]) -> ProjectBuilder {
        ProjectBuilder::new(Platforms::new(platforms.iter().copied()))
    }

    #[test]
    fn test_inactive_platform_is_skipped() {
        let mut project = builder(&[Platform::Core]);
        assert!(!project.add_dependency(Platform::Android, implementation("g:a:1")));

        let state = project.freeze();
        assert!(state.dependencies(Platform::Android).is_empty());
    }

    #[test]
    fn test_duplicate_dependency_collapses() {
        let mut project = builder(&[Platform::Core]);
        assert!(project.add_dependency(Platform::Core, implementation("g:a:1")));
        assert!(!project.add_dependency(Platform::Core, implementation("g:a:1")));

        let state = project.freeze();
        assert_eq!(state.dependencies(Platform::Core).len(), 1);
    }

    #[test]
    fn test_override_wins_regardless_of_order() {
        let mut before = builder(&[Platform::Core]);
        before.override_version("x", "2.0");
        before.record_version("x", "1.0");

        let mut after = builder(&[Platform::Core]);
        after.record_version("x", "1.0");
        after.override_version("x", "2.0");

        assert_eq!(before.freeze().version("x"), Some("2.0"));
        assert_eq!(after.freeze().version("x"), Some("2.0"));
    }

    #[test]
    fn test_override_for_unresolved_extension_is_ignored() {
        let mut project = builder(&[Platform::Core]);
        project.override_version("missing", "2.0");

        let state = project.freeze();
        assert!(state.version_properties().is_empty());
    }

    #[test]
    fn test_conflicting_defaults_keep_last() {
        let mut project = builder(&[Platform::Core]);
        project.record_version("x", "1.0");
        project.record_version("x", "1.1");
        assert_eq!(project.freeze().version("x"), Some("1.1"));
    }

    #[test]
    fn test_web_inherit_requires_web_platform() {
        let mut without_web = builder(&[Platform::Core]);
        assert!(!without_web.add_web_inherit("pkg.X"));
        assert!(without_web.freeze().web_inherits().is_empty());

        let mut with_web = builder(&[Platform::Core, Platform::Html]);
        assert!(with_web.add_web_inherit("pkg.X"));
        assert!(!with_web.add_web_inherit("pkg.X"));
        assert_eq!(with_web.freeze().web_inherits().len(), 1);
    }

    #[test]
    fn test_files_deduplicated_by_destination() {
        let mut project = builder(&[Platform::Html]);
        assert!(project.add_file(CopiedFile::new(Platform::Html, "a.xml", "src/x.xml")));
        assert!(!project.add_file(CopiedFile::new(Platform::Html, "a.xml", "src/x.xml")));
        assert!(!project.add_file(CopiedFile::new(Platform::Android, "a.xml", "src/x.xml")));

        let state = project.freeze();
        assert_eq!(state.files(), &[CopiedFile::new(Platform::Html, "a.xml", "src/x.xml")]);
    }

    #[test]
    fn test_conflicting_files_keep_same_winner_in_any_order() {
        let a = CopiedFile::new(Platform::Html, "gen/a.xml", "src/x.xml");
        let b = CopiedFile::new(Platform::Html, "gen/b.xml", "src/x.xml");

        let mut forward = builder(&[Platform::Html]);
        assert!(forward.add_file(a.clone()));
        assert!(!forward.add_file(b.clone()));

        let mut backward = builder(&[Platform::Html]);
        assert!(backward.add_file(b));
        assert!(backward.add_file(a.clone()));

        let forward = forward.freeze();
        assert_eq!(forward.files(), &[a]);
        assert_eq!(forward, backward.freeze());
    }

    #[test]
    fn test_build_dependencies_are_a_set() {
        let mut project = builder(&[Platform::Core]);
        assert!(project.add_build_dependency("org.gretty:gretty:3.0.7"));
        assert!(!project.add_build_dependency("org.gretty:gretty:3.0.7"));
        assert_eq!(
            project.freeze().build_dependencies(),
            &BTreeSet::from(["org.gretty:gretty:3.0.7".to_string()])
        );
    }

    #[test]
    fn test_override_for_pinned_extension_is_ignored() {
        let mut project = builder(&[Platform::Core]);
        project.record_extension("box2d");
        project.override_version("box2d", "1.12.0");

        let state = project.freeze();
        assert!(state.extensions().contains("box2d"));
        assert_eq!(state.version("box2d"), None);
    }

    #[test]
    fn test_plugins_are_a_set() {
        let mut project = builder(&[Platform::Core]);
        assert!(project.add_plugin("java-library"));
        assert!(!project.add_plugin("java-library"));
        assert_eq!(project.freeze().plugins().len(), 1);
    }

    #[test]
    fn test_resolved_dependencies_substitute_versions() {
        let mut project = builder(&[Platform::Core]);
        project.record_version("x", "9.9");
        project.add_dependency(
            Platform::Core,
            Declaration::Implementation(Coordinate::Versioned {
                base: "g:a".to_string(),
                classifier: None,
                property: "x".to_string(),
            }),
        );

        let state = project.freeze();
        assert_eq!(
            state.resolved_dependencies(Platform::Core),
            BTreeSet::from(["g:a:9.9".to_string()])
        );
    }

    #[test]
    fn test_serialize_state() {
        let mut project = builder(&[Platform::Core]);
        project.record_version("x", "1.0");
        project.add_dependency(Platform::Core, implementation("g:a:1.0"));

        let json = serde_json::to_value(project.freeze()).unwrap();
        assert_eq!(json["platforms"], serde_json::json!(["core"]));
        assert_eq!(
            json["dependencies"]["core"],
            serde_json::json!([r#"implementation "g:a:1.0""#])
        );
        assert_eq!(json["versions"]["x"], "1.0");
    }
}
