//! End-to-end resolution tests against small hand-built catalogs.

use std::collections::BTreeSet;

use launchpad_core::{
    Extension, ExtensionCatalog, Platform, Platforms, ProjectBuilder, ProjectState, Resolver,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resolve(catalog: &ExtensionCatalog, platforms: &[Platform], selection: &[&str]) -> ProjectState {
    let mut project = ProjectBuilder::new(Platforms::new(platforms.iter().copied()));
    Resolver::new(catalog).resolve(selection, &mut project).unwrap();
    project.freeze()
}

/// A catalog shaped like the built-in one: shared prerequisites, classifier
/// coordinates, desktop, native and web-only entries.
fn sample_catalog() -> ExtensionCatalog {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(
        Extension::third_party("utils", "0.13.7")
            .dependency(Platform::Core, "com.github.tommyettinger:libgdx-utils")
            .dependency(Platform::Html, "com.github.tommyettinger:libgdx-utils:sources")
            .inherit("libgdx-utils"),
    );
    catalog.register(
        Extension::third_party("utilsBox2d", "0.13.7")
            .requires("utils")
            .dependency(Platform::Core, "com.github.tommyettinger:libgdx-utils-box2d")
            .dependency(Platform::Html, "com.github.tommyettinger:libgdx-utils-box2d:sources")
            .inherit("libgdx-utils-box2d"),
    );
    catalog.register(
        Extension::third_party("shapeDrawer", "2.4.0")
            .dependency(Platform::Core, "space.earlygrey:shapedrawer")
            .dependency(Platform::Html, "space.earlygrey:shapedrawer:sources")
            .inherit("space.earlygrey.shapedrawer"),
    );
    catalog.register(
        Extension::third_party("pieMenu", "5.0.0")
            .requires("shapeDrawer")
            .dependency(Platform::Core, "com.github.payne911:PieMenu")
            .dependency(Platform::Html, "com.github.payne911:PieMenu:sources")
            .inherit("PieMenu"),
    );
    catalog.register(
        Extension::third_party("basis", "0.1.0")
            .dependency(Platform::Core, "com.crashinvaders.basisu:basisu-wrapper")
            .desktop("com.crashinvaders.basisu:basisu-wrapper:natives-desktop")
            .native_android("com.crashinvaders.basisu:basisu-wrapper"),
    );
    catalog.register(
        Extension::third_party("lombok", "1.18.20")
            .dependency(Platform::Core, "org.projectlombok:lombok")
            .special(
                Platform::Core,
                r#"annotationProcessor "org.projectlombok:lombok:$lombokVersion""#,
            )
            .plugin("io.freefair.lombok"),
    );
    catalog
}

#[test]
fn test_end_to_end_scenario() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(
        Extension::third_party("X", "9.9")
            .dependency(Platform::Core, "g:a")
            .dependency(Platform::Html, "g:a:sources")
            .inherit("pkg.X"),
    );

    let state = resolve(&catalog, &[Platform::Core, Platform::Html], &["X"]);

    assert_eq!(state.resolved_dependencies(Platform::Core), set(&["g:a:9.9"]));
    assert_eq!(state.resolved_dependencies(Platform::Html), set(&["g:a:9.9:sources"]));
    assert_eq!(state.version("X"), Some("9.9"));
    assert_eq!(state.web_inherits(), &set(&["pkg.X"]));
    assert!(state.dependencies(Platform::Android).is_empty());
    assert!(state.dependencies(Platform::Ios).is_empty());
}

#[test]
fn test_transitive_pull_in() {
    let catalog = sample_catalog();
    let state = resolve(&catalog, &[Platform::Core, Platform::Html], &["utilsBox2d"]);

    assert_eq!(state.version("utils"), Some("0.13.7"));
    assert!(
        state
            .resolved_dependencies(Platform::Core)
            .contains("com.github.tommyettinger:libgdx-utils:0.13.7")
    );
    assert!(state.web_inherits().contains("libgdx-utils"));
}

#[test]
fn test_shared_prerequisite_resolved_once() {
    let mut catalog = sample_catalog();
    catalog.register(
        Extension::third_party("other", "1.0")
            .requires("utils")
            .dependency(Platform::Core, "g:other"),
    );
    let state = resolve(&catalog, &[Platform::Core], &["utilsBox2d", "other"]);

    let utils: Vec<_> = state
        .resolved_dependencies(Platform::Core)
        .into_iter()
        .filter(|c| c.starts_with("com.github.tommyettinger:libgdx-utils:"))
        .collect();
    assert_eq!(utils, vec!["com.github.tommyettinger:libgdx-utils:0.13.7"]);
}

#[test]
fn test_native_expansion() {
    let catalog = sample_catalog();
    let state = resolve(&catalog, &[Platform::Core, Platform::Android], &["basis"]);

    let android = state.resolved_dependencies(Platform::Android);
    assert_eq!(
        android,
        set(&[
            "com.crashinvaders.basisu:basisu-wrapper:0.1.0:natives-armeabi-v7a",
            "com.crashinvaders.basisu:basisu-wrapper:0.1.0:natives-arm64-v8a",
            "com.crashinvaders.basisu:basisu-wrapper:0.1.0:natives-x86",
            "com.crashinvaders.basisu:basisu-wrapper:0.1.0:natives-x86_64",
        ])
    );
}

#[test]
fn test_special_line_and_plugin() {
    let catalog = sample_catalog();
    let state = resolve(&catalog, &[Platform::Core], &["lombok"]);

    let rendered: Vec<String> = state
        .dependencies(Platform::Core)
        .iter()
        .map(|d| d.render())
        .collect();
    assert!(rendered.contains(&r#"annotationProcessor "org.projectlombok:lombok:$lombokVersion""#.to_string()));
    assert!(rendered.contains(&r#"implementation "org.projectlombok:lombok:$lombokVersion""#.to_string()));
    assert!(state.plugins().contains("io.freefair.lombok"));
}

#[test]
fn test_inactive_platforms_stay_empty() {
    let catalog = sample_catalog();
    let selection: Vec<&str> = catalog.ids();
    let state = resolve(&catalog, &[Platform::Core], &selection);

    for platform in Platform::ALL {
        if platform != Platform::Core {
            assert!(state.dependencies(platform).is_empty(), "{platform} should be empty");
        }
    }
    assert!(state.web_inherits().is_empty());
}

proptest! {
    #[test]
    fn test_resolution_order_does_not_matter(
        selection in Just(vec!["utils", "utilsBox2d", "shapeDrawer", "pieMenu", "basis", "lombok"])
            .prop_shuffle()
            .prop_flat_map(|ids| {
                let len = ids.len();
                (Just(ids), 0..=len)
            })
    ) {
        let (ids, len) = selection;
        let catalog = sample_catalog();
        let platforms = Platform::ALL;

        let chosen = &ids[..len];
        let mut sorted = chosen.to_vec();
        sorted.sort_unstable();

        let shuffled_state = resolve(&catalog, &platforms, chosen);
        let sorted_state = resolve(&catalog, &platforms, &sorted);
        prop_assert_eq!(shuffled_state, sorted_state);
    }
}
