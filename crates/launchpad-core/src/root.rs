//! Root build file aggregation.
//!
//! The root module owns the concerns no single extension does: plugins
//! applied to every non-root module, the build script's `classpath`
//! dependencies, the repositories builds fetch from, and global project
//! metadata.

use crate::config::ProjectMetadata;
use crate::platform::Platform;
use crate::state::ProjectState;

/// Repositories the build script itself resolves plugins from.
const BUILD_REPOSITORIES: [&str; 5] = [
    "mavenCentral()",
    "mavenLocal()",
    "google()",
    "gradlePluginPortal()",
    "maven { url 'https://oss.sonatype.org/content/repositories/snapshots/' }",
];

/// Repositories every module resolves dependencies from.
const PROJECT_REPOSITORIES: [&str; 6] = [
    "mavenCentral()",
    "mavenLocal()",
    "gradlePluginPortal()",
    "maven { url 'https://oss.sonatype.org/content/repositories/snapshots/' }",
    "maven { url 'https://jitpack.io' }",
    "maven { url 'https://s01.oss.sonatype.org' }",
];

/// View over a frozen project for rendering the root build file.
#[derive(Debug, Clone, Copy)]
pub struct RootBuild<'a> {
    state: &'a ProjectState,
    metadata: &'a ProjectMetadata,
}

impl<'a> RootBuild<'a> {
    pub fn new(state: &'a ProjectState, metadata: &'a ProjectMetadata) -> Self {
        Self { state, metadata }
    }

    /// Plugins for non-root modules, unique and sorted.
    pub fn plugins(&self) -> Vec<&'a str> {
        self.state.plugins().iter().map(String::as_str).collect()
    }

    /// `classpath` coordinates, sorted.
    pub fn build_dependencies(&self) -> Vec<&'a str> {
        self.state.build_dependencies().iter().map(String::as_str).collect()
    }

    pub fn build_repositories(&self) -> &'static [&'static str] {
        &BUILD_REPOSITORIES
    }

    pub fn project_repositories(&self) -> &'static [&'static str] {
        &PROJECT_REPOSITORIES
    }

    /// Module selector for the shared configuration block.
    ///
    /// Android applies its own plugin and is left out when present.
    fn configured_modules(&self) -> &'static str {
        if self.state.has_platform(Platform::Android) {
            "subprojects - project(':android')"
        } else {
            "subprojects"
        }
    }

    /// Render the root build script.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("buildscript {\n\trepositories {\n");
        for repository in self.build_repositories() {
            out.push_str(&format!("\t\t{repository}\n"));
        }
        out.push_str("\t}\n\tdependencies {\n");
        for coordinate in self.build_dependencies() {
            out.push_str(&format!("\t\tclasspath \"{coordinate}\"\n"));
        }
        out.push_str("\t}\n}\n\n");

        out.push_str("allprojects {\n\tapply plugin: 'eclipse'\n\tapply plugin: 'idea'\n}\n\n");

        out.push_str(&format!("configure({}) {{\n", self.configured_modules()));
        for plugin in self.plugins() {
            out.push_str(&format!("\tapply plugin: '{plugin}'\n"));
        }
        out.push_str(&format!("\tsourceCompatibility = {}\n", self.metadata.java_version));
        out.push_str("\tcompileJava {\n\t\toptions.incremental = true\n\t}\n}\n\n");

        out.push_str("subprojects {\n");
        out.push_str(&format!("\tversion = '{}'\n", self.metadata.version));
        out.push_str(&format!("\text.appName = '{}'\n", self.metadata.name));
        out.push_str("\trepositories {\n");
        for repository in self.project_repositories() {
            out.push_str(&format!("\t\t{repository}\n"));
        }
        out.push_str("\t}\n}\n\n");

        out.push_str(&format!("eclipse.project.name = '{}' + '-parent'\n", self.metadata.name));
        out
    }
}
