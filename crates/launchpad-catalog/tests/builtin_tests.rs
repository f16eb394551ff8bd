//! Tests for the built-in catalog resolved through the core engine.

use launchpad_catalog::{GDX_VERSION, builtin};
use launchpad_core::{
    CopiedFile, ExtensionCatalog, GenerationRequest, Platform, Platforms, ProjectBuilder,
    ProjectMetadata, ProjectState, RequiresGraph, Resolver,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn catalog() -> ExtensionCatalog {
    builtin().unwrap()
}

fn resolve(platforms: &[Platform], selection: &[&str]) -> ProjectState {
    let catalog = catalog();
    let mut project = ProjectBuilder::new(Platforms::new(platforms.iter().copied()));
    Resolver::new(&catalog).resolve(selection, &mut project).unwrap();
    project.freeze()
}

#[test]
fn test_builtin_passes_self_check() {
    let catalog = catalog();
    catalog.validate().unwrap();
    assert!(catalog.len() >= 39);
}

#[test]
fn test_every_entry_has_metadata() {
    for extension in catalog().iter() {
        assert!(!extension.metadata.name.is_empty(), "{} has no name", extension.id);
        assert!(!extension.metadata.group.is_empty(), "{} has no group", extension.id);
        assert!(extension.metadata.url.starts_with("https://"), "{} has no url", extension.id);
        assert!(!extension.default_version.is_empty());
    }
}

#[test]
fn test_requires_edges() {
    let graph = RequiresGraph::from_catalog(&catalog());
    assert_eq!(graph.requirements_of("utilsBox2d"), vec!["utils"]);
    assert_eq!(graph.requirements_of("typingLabel"), vec!["regExodus"]);
    assert_eq!(graph.requirements_of("controllerMapping"), vec!["controllers"]);
    assert_eq!(graph.requirements_of("gdxVfxEffects"), vec!["gdxVfxCore"]);
    assert_eq!(graph.requirements_of("pieMenu"), vec!["shapeDrawer"]);
    assert_eq!(graph.edge_count(), 5);
}

#[rstest]
#[case("utilsBox2d", "utils")]
#[case("typingLabel", "regExodus")]
#[case("controllerMapping", "controllers")]
#[case("gdxVfxEffects", "gdxVfxCore")]
#[case("pieMenu", "shapeDrawer")]
fn test_requirement_pulled_in(#[case] selected: &str, #[case] required: &str) {
    let state = resolve(&[Platform::Core, Platform::Html], &[selected]);
    assert!(state.extensions().contains(required), "{required} missing");
    assert!(state.extensions().contains(selected));
}

#[test]
fn test_typing_label_web_setup() {
    let state = resolve(&[Platform::Core, Platform::Html], &["typingLabel"]);

    let html = state.resolved_dependencies(Platform::Html);
    assert!(html.contains("com.rafaskoberg.gdx:typing-label:1.2.0:sources"));
    assert!(html.contains("com.github.tommyettinger:regexodus:0.1.13:sources"));
    assert!(state.web_inherits().contains("regexodus"));
    assert!(state.web_inherits().contains("com.rafaskoberg.gdx.typinglabel.typinglabel"));
}

#[test]
fn test_basis_universal_native_expansion() {
    let state = resolve(&[Platform::Core, Platform::Android], &["gdxBasisUniversal"]);

    let natives: Vec<String> = state
        .dependencies(Platform::Android)
        .iter()
        .map(|d| d.render())
        .filter(|line| line.starts_with("natives "))
        .collect();
    assert_eq!(natives.len(), 4);
    for abi in ["armeabi-v7a", "arm64-v8a", "x86", "x86_64"] {
        let expected =
            format!(r#"natives "com.crashinvaders.basisu:basisu-wrapper:$gdxBasisUniversalVersion:natives-{abi}""#);
        assert!(natives.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_official_box2d_is_pinned() {
    let state = resolve(&[Platform::Core, Platform::Android], &["box2d"]);

    let core = state.resolved_dependencies(Platform::Core);
    assert!(core.contains(&format!("com.badlogicgames.gdx:gdx-box2d:{GDX_VERSION}")));
    let android = state.resolved_dependencies(Platform::Android);
    assert!(android.contains(&format!(
        "com.badlogicgames.gdx:gdx-box2d-platform:{GDX_VERSION}:natives-arm64-v8a"
    )));
    assert_eq!(android.len(), 5);
    assert_eq!(state.version("box2d"), None);
}

#[test]
fn test_artemis_copies_file_only_for_web() {
    let with_web = resolve(&[Platform::Core, Platform::Html], &["artemisOdb"]);
    assert_eq!(
        with_web.files(),
        &[CopiedFile::new(
            Platform::Html,
            "generator/html/jsr305.gwt.xml",
            "src/main/java/jsr305.gwt.xml"
        )]
    );
    assert!(with_web.web_inherits().contains("jsr305"));

    let without_web = resolve(&[Platform::Core], &["artemisOdb"]);
    assert!(without_web.files().is_empty());
    assert!(without_web.web_inherits().is_empty());
}

#[test]
fn test_lombok_annotation_processor() {
    let state = resolve(&[Platform::Core], &["lombok"]);
    let core = state.resolved_dependencies(Platform::Core);
    assert!(core.contains(r#"annotationProcessor "org.projectlombok:lombok:1.18.20""#));
    assert!(core.contains("org.projectlombok:lombok:1.18.20"));
}

#[test]
fn test_kotlinx_coroutines_adds_no_plugins() {
    let state = resolve(&[Platform::Core], &["kotlinxCoroutines"]);
    assert!(state.plugins().is_empty());
    assert_eq!(state.version("kotlinxCoroutines"), Some("1.6.0-RC"));
}

#[test]
fn test_platform_exclusive_selection_is_permissive() {
    // FreeType has no web backend; selecting it for a web-only project is not an error.
    let state = resolve(&[Platform::Html], &["freetype"]);
    assert!(state.dependencies(Platform::Html).is_empty());
    assert!(state.extensions().contains("freetype"));
}

#[test]
fn test_override_reaches_every_coordinate() {
    let request = GenerationRequest::new(ProjectMetadata::new("demo"))
        .with_platforms(["core", "html"])
        .select("pieMenu")
        .with_override("shapeDrawer", "2.5.0");
    let catalog = catalog();
    let state = Resolver::new(&catalog).generate(&request).unwrap();

    assert!(
        state
            .resolved_dependencies(Platform::Core)
            .contains("space.earlygrey:shapedrawer:2.5.0")
    );
    assert!(
        state
            .resolved_dependencies(Platform::Html)
            .contains("space.earlygrey:shapedrawer:2.5.0:sources")
    );
}

fn selection_strategy() -> impl Strategy<Value = Vec<String>> {
    let ids: Vec<String> = catalog().ids().into_iter().map(str::to_string).collect();
    proptest::sample::subsequence(ids.clone(), 0..=ids.len()).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_builtin_order_independence(selection in selection_strategy()) {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);

        let mut forward = ProjectBuilder::new(Platforms::new(Platform::ALL));
        resolver.resolve(&selection, &mut forward).unwrap();

        let mut reversed_selection = selection.clone();
        reversed_selection.reverse();
        let mut backward = ProjectBuilder::new(Platforms::new(Platform::ALL));
        resolver.resolve(&reversed_selection, &mut backward).unwrap();

        prop_assert_eq!(forward.freeze(), backward.freeze());
    }

    #[test]
    fn test_inactive_platforms_empty_for_any_selection(selection in selection_strategy()) {
        let state = resolve(&[Platform::Core, Platform::Lwjgl3], &selection.iter().map(String::as_str).collect::<Vec<_>>());
        for platform in [Platform::Lwjgl2, Platform::Android, Platform::Ios, Platform::Html, Platform::Headless] {
            prop_assert!(state.dependencies(platform).is_empty());
        }
    }
}
