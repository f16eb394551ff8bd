//! Community extensions. Coordinates reference `$<id>Version`.

use launchpad_core::{Extension, Platform, Repository};

const CORE: Platform = Platform::Core;
const HTML: Platform = Platform::Html;
const ANDROID: Platform = Platform::Android;
const IOS: Platform = Platform::Ios;

pub(crate) fn extensions() -> Vec<Extension> {
    vec![
        artemis_odb(),
        simple_web("utils", "0.13.7", "com.github.tommyettinger", "libgdx-utils", "libgdx-utils")
            .named("libgdx-utils", "com.github.tommyettinger", "https://github.com/tommyettinger/gdx-utils")
            .describe("General libGDX utilities."),
        simple_web("utilsBox2d", "0.13.7", "com.github.tommyettinger", "libgdx-utils-box2d", "libgdx-utils-box2d")
            .named("libgdx-utils-box2d", "com.github.tommyettinger", "https://github.com/tommyettinger/gdx-utils")
            .describe("Box2D libGDX utilities.")
            .requires("utils"),
        facebook(),
        dialogs(),
        core_only("inGameConsole", "1.0.0", "com.strongjoshua:libgdx-inGameConsole")
            .named("libgdx-inGameConsole", "com.strongjoshua", "https://github.com/StrongJoshua/libgdx-inGameConsole")
            .describe("In-game console; not compatible with the web backend."),
        core_only("jaci", "0.4.0", "com.github.ykrasik:jaci-libgdx-cli-java")
            .named("jaci-libgdx-cli-java", "com.github.ykrasik", "https://github.com/ykrasik/jaci")
            .describe("Annotation-driven in-game console for non-web backends."),
        simple_web("jaciGwt", "0.4.0", "com.github.ykrasik", "jaci-libgdx-cli-gwt", "com.github.ykrasik.jaci")
            .named("jaci-libgdx-cli-gwt", "com.github.ykrasik", "https://github.com/ykrasik/jaci")
            .describe("Web-compatible annotation-driven in-game console."),
        core_only("kotlinxCoroutines", "1.6.0-RC", "org.jetbrains.kotlinx:kotlinx-coroutines-core")
            .named("kotlinx-coroutines-core", "org.jetbrains.kotlinx", "https://kotlinlang.org/docs/coroutines-overview.html")
            .describe("Kotlin coroutines."),
        simple_web("noise4j", "0.1.0", "com.github.czyzby", "noise4j", "com.github.czyzby.noise4j.Noise4J")
            .named("noise4j", "com.github.czyzby", "https://github.com/czyzby/noise4j")
            .describe("Simple map generators."),
        core_only("bladeInk", "0.7.4", "com.bladecoder.ink:blade-ink")
            .named("blade-ink", "com.bladecoder.ink", "https://github.com/bladecoder/blade-ink")
            .describe("Runtime for the Ink interactive narrative language."),
        simple_web("joise", "1.1.0", "com.sudoplay.joise", "joise", "joise")
            .named("joise", "com.sudoplay.joise", "https://github.com/SudoPlayGames/Joise")
            .describe("Modular 2D to 6D noise library."),
        simple_web("makeSomeNoise", "0.3", "com.github.tommyettinger", "make_some_noise", "make.some.noise")
            .named("make_some_noise", "com.github.tommyettinger", "https://github.com/tommyettinger/make-some-noise")
            .describe("Low-level noise building blocks."),
        simple_web("typingLabel", "1.2.0", "com.rafaskoberg.gdx", "typing-label", "com.rafaskoberg.gdx.typinglabel.typinglabel")
            .named("typing-label", "com.rafaskoberg.gdx", "https://github.com/rafaskb/typing-label")
            .describe("Label that appears to be typed in real time, with text effects.")
            .requires("regExodus"),
        simple_web("shapeDrawer", "2.4.0", "space.earlygrey", "shapedrawer", "space.earlygrey.shapedrawer")
            .named("shapedrawer", "space.earlygrey", "https://github.com/earlygrey/shapedrawer")
            .describe("Smoothed shape drawing, a replacement for ShapeRenderer.")
            .repository(Repository::JitPack),
        simple_web("simpleGraphs", "3.0.0", "space.earlygrey", "simple-graphs", "simple_graphs")
            .named("simple-graphs", "space.earlygrey", "https://github.com/earlygrey/simple-graphs")
            .describe("Lightweight graph and pathfinding algorithms.")
            .repository(Repository::JitPack),
        simple_web("formic", "0.1.4", "com.github.tommyettinger", "formic", "formic")
            .named("formic", "com.github.tommyettinger", "https://github.com/tommyettinger/formic")
            .describe("String formatting that also works on the web backend."),
        simple_web("colorful", "0.6.1", "com.github.tommyettinger", "colorful", "com.github.tommyettinger.colorful.colorful")
            .named("colorful", "com.github.tommyettinger", "https://github.com/tommyettinger/colorful-gdx")
            .describe("Alternative color models for sprites and scenes."),
        simple_web("anim8", "0.2.11", "com.github.tommyettinger", "anim8-gdx", "anim8")
            .named("anim8-gdx", "com.github.tommyettinger", "https://github.com/tommyettinger/anim8-gdx")
            .describe("Animated GIF and PNG writing."),
        simple_web("tenPatch", "5.2.2", "com.github.raeleus.TenPatch", "tenpatch", "com.ray3k.tenpatch.tenpatch")
            .named("TenPatch", "com.github.raeleus", "https://github.com/raeleus/TenPatch")
            .describe("Extended 9-patch images."),
        simple_web("gdxGltf", "358227c533", "com.github.mgsx-dev.gdx-gltf", "gltf", "GLTF")
            .named("gdx-gltf", "com.github.mgsx-dev", "https://github.com/mgsx-dev/gdx-gltf")
            .describe("GLTF models and physically based rendering.")
            .repository(Repository::JitPack),
        simple_web("spineRuntime", "4.0.18.1", "com.esotericsoftware.spine", "spine-libgdx", "com.esotericsoftware.spine")
            .named("spine-libgdx", "com.esotericsoftware.spine", "https://github.com/EsotericSoftware/spine-runtimes/tree/4.0/spine-libgdx")
            .describe("Runtime for the Spine skeletal animation editor; requires a Spine license."),
        controller_utils(),
        simple_web("controllerScene2D", "2.3.0", "de.golfgl.gdxcontrollerutils", "gdx-controllerutils-scene2d", "de.golfgl.gdx.controllers.controller_scene2d")
            .named("gdx-controllerutils-scene2d", "de.golfgl.gdxcontrollerutils", "https://github.com/MrStahlfelge/gdx-controllerutils/wiki/Button-operable-Scene2d")
            .describe("Controller-operable Scene2D widgets."),
        controller_mapping(),
        gdx_vfx_core(),
        gdx_vfx_effects(),
        simple_web("regExodus", "0.1.13", "com.github.tommyettinger", "regexodus", "regexodus")
            .named("regexodus", "com.github.tommyettinger", "https://github.com/tommyettinger/RegExodus")
            .describe("Regular expressions that behave the same on every backend."),
        simple_web("visUi", "1.5.0", "com.kotcrab.vis", "vis-ui", "com.kotcrab.vis.vis-ui")
            .named("vis-ui", "com.kotcrab.vis", "https://github.com/kotcrab/vis-ui")
            .describe("UI toolkit with extra widgets and its own theme."),
        simple_web("pieMenu", "5.0.0", "com.github.payne911", "PieMenu", "PieMenu")
            .named("PieMenu", "com.github.payne911", "https://github.com/payne911/PieMenu")
            .describe("Circular widget groups and context menus for scene2d.ui.")
            .repository(Repository::JitPack)
            .requires("shapeDrawer"),
        simple_web("jbump", "v1.0.1", "com.github.tommyettinger", "jbump", "com.dongbat.jbump")
            .named("jbump", "com.github.tommyettinger", "https://github.com/tommyettinger/jbump")
            .describe("AABB collision detection and response.")
            .repository(Repository::JitPack),
        core_only("kryo", "5.2.0", "com.esotericsoftware:kryo")
            .named("kryo", "com.esotericsoftware", "https://github.com/EsotericSoftware/kryo")
            .describe("Binary object graph serialization."),
        core_only("kryoNet", "2.22.7", "com.github.crykn:kryonet")
            .named("kryonet", "com.github.crykn", "https://github.com/crykn/kryonet")
            .describe("Networking on top of Kryo.")
            .repository(Repository::JitPack),
        guacamole(),
        gdx_basis_universal(),
        lombok(),
    ]
}

/// Core dependency only.
fn core_only(id: &str, version: &str, coordinate: &str) -> Extension {
    Extension::third_party(id, version).dependency(CORE, coordinate)
}

/// Core dependency, its web sources and one inherit directive.
fn simple_web(id: &str, version: &str, group: &str, artifact: &str, inherit: &str) -> Extension {
    Extension::third_party(id, version)
        .dependency(CORE, format!("{group}:{artifact}"))
        .dependency(HTML, format!("{group}:{artifact}:sources"))
        .inherit(inherit)
}

fn artemis_odb() -> Extension {
    Extension::third_party("artemisOdb", "2.3.0")
        .named("artemis-odb", "net.onedaybeard.artemis", "https://github.com/junkdog/artemis-odb")
        .describe("High performance Entity-Component-System framework.")
        .dependency(CORE, "net.onedaybeard.artemis:artemis-odb")
        .dependency(HTML, "net.onedaybeard.artemis:artemis-odb-gwt")
        .dependency(HTML, "net.onedaybeard.artemis:artemis-odb-gwt:sources")
        .dependency(HTML, "net.onedaybeard.artemis:artemis-odb:sources")
        .inherit("com.artemis.backends.artemis_backends_gwt")
        .copy_file(HTML, "generator/html/jsr305.gwt.xml", "src/main/java/jsr305.gwt.xml")
        .inherit("jsr305")
}

fn facebook() -> Extension {
    Extension::third_party("facebook", "1.5.0")
        .named("gdx-facebook-core", "de.tomgrill.gdxfacebook", "https://github.com/TomGrill/gdx-facebook")
        .describe("Facebook graph API wrapper; not available on iOS.")
        .dependency(CORE, "de.tomgrill.gdxfacebook:gdx-facebook-core")
        .dependency(ANDROID, "de.tomgrill.gdxfacebook:gdx-facebook-android")
        .desktop("de.tomgrill.gdxfacebook:gdx-facebook-desktop")
        .dependency(HTML, "de.tomgrill.gdxfacebook:gdx-facebook-core:sources")
        .dependency(HTML, "de.tomgrill.gdxfacebook:gdx-facebook-html")
        .dependency(HTML, "de.tomgrill.gdxfacebook:gdx-facebook-html:sources")
        .inherit("de.tomgrill.gdxfacebook.html.gdx_facebook_gwt")
}

fn dialogs() -> Extension {
    Extension::third_party("dialogs", "1.3.0")
        .named("gdx-dialogs-core", "de.tomgrill.gdxdialogs", "https://github.com/TomGrill/gdx-dialogs")
        .describe("Native dialogs.")
        .dependency(CORE, "de.tomgrill.gdxdialogs:gdx-dialogs-core")
        .dependency(ANDROID, "de.tomgrill.gdxdialogs:gdx-dialogs-android")
        .desktop("de.tomgrill.gdxdialogs:gdx-dialogs-desktop")
        .dependency(IOS, "de.tomgrill.gdxdialogs:gdx-dialogs-ios")
        .dependency(HTML, "de.tomgrill.gdxfacebook:gdx-dialogs-core:sources")
        .dependency(HTML, "de.tomgrill.gdxfacebook:gdx-dialogs-html")
        .dependency(HTML, "de.tomgrill.gdxfacebook:gdx-dialogs-html:sources")
        .inherit("de.tomgrill.gdxfacebook.html.gdx_dialogs_html")
}

fn controller_utils() -> Extension {
    Extension::third_party("controllerUtils", "2.2.1")
        .named(
            "gdx-controllers-advanced",
            "de.golfgl.gdxcontrollerutils",
            "https://github.com/MrStahlfelge/gdx-controllerutils",
        )
        .describe("Legacy controller support; now part of the official controllers extension.")
        .dependency(CORE, "de.golfgl.gdxcontrollerutils:gdx-controllers-advanced")
        .desktop("de.golfgl.gdxcontrollerutils:gdx-controllers-jamepad")
        .dependency(ANDROID, "de.golfgl.gdxcontrollerutils:gdx-controllers-android")
        .dependency(IOS, "de.golfgl.gdxcontrollerutils:gdx-controllers-iosrvm")
        .dependency(HTML, "de.golfgl.gdxcontrollerutils:gdx-controllers-gwt")
        .dependency(HTML, "de.golfgl.gdxcontrollerutils:gdx-controllers-gwt:sources")
        .dependency(HTML, "de.golfgl.gdxcontrollerutils:gdx-controllers-advanced:sources")
        .inherit("com.badlogic.gdx.controllers.controllers-gwt")
}

fn controller_mapping() -> Extension {
    Extension::third_party("controllerMapping", "2.3.0")
        .named(
            "gdx-controllerutils-mapping",
            "de.golfgl.gdxcontrollerutils",
            "https://github.com/MrStahlfelge/gdx-controllerutils/wiki/Configurable-Game-Controller-Mappings",
        )
        .describe("Configurable game controller mappings.")
        .requires("controllers")
        .dependency(CORE, "de.golfgl.gdxcontrollerutils:gdx-controllerutils-mapping")
        .dependency(HTML, "de.golfgl.gdxcontrollerutils:gdx-controllerutils-mapping:sources")
}

fn gdx_vfx_core() -> Extension {
    Extension::third_party("gdxVfxCore", "0.5.0")
        .named("gdx-vfx-core", "com.crashinvaders.vfx", "https://github.com/crashinvaders/gdx-vfx")
        .describe("Post-processing effect framework.")
        .dependency(CORE, "com.crashinvaders.vfx:gdx-vfx-core")
        .dependency(HTML, "com.crashinvaders.vfx:gdx-vfx-core:sources")
        .dependency(HTML, "com.crashinvaders.vfx:gdx-vfx-gwt")
        .dependency(HTML, "com.crashinvaders.vfx:gdx-vfx-gwt:sources")
        .inherit("com.crashinvaders.vfx.GdxVfxCore")
        .inherit("com.crashinvaders.vfx.GdxVfxGwt")
}

fn gdx_vfx_effects() -> Extension {
    Extension::third_party("gdxVfxEffects", "0.5.0")
        .named("gdx-vfx-effects", "com.crashinvaders.vfx", "https://github.com/crashinvaders/gdx-vfx")
        .describe("Predefined post-processing effects for gdx-vfx.")
        .requires("gdxVfxCore")
        .dependency(CORE, "com.crashinvaders.vfx:gdx-vfx-effects")
        .dependency(HTML, "com.crashinvaders.vfx:gdx-vfx-effects:sources")
        .inherit("com.crashinvaders.vfx.GdxVfxEffects")
}

fn guacamole() -> Extension {
    Extension::third_party("guacamole", "0.3.1")
        .named("guacamole", "com.github.crykn", "https://github.com/crykn/guacamole")
        .describe("Small collection of basic game utilities.")
        .repository(Repository::JitPack)
        .dependency(CORE, "com.github.crykn.guacamole:core")
        .dependency(CORE, "com.github.crykn.guacamole:gdx")
        .desktop("com.github.crykn.guacamole:gdx-desktop")
        .dependency(HTML, "com.github.crykn.guacamole:core:sources")
        .dependency(HTML, "com.github.crykn.guacamole:gdx:sources")
        .dependency(HTML, "com.github.crykn.guacamole:gdx-gwt")
        .dependency(HTML, "com.github.crykn.guacamole:gdx-gwt:sources")
        .inherit("guacamole_gdx_gwt")
}

fn gdx_basis_universal() -> Extension {
    Extension::third_party("gdxBasisUniversal", "0.1.0")
        .named(
            "basisu-wrapper",
            "com.crashinvaders.basisu",
            "https://github.com/crashinvaders/gdx-basis-universal",
        )
        .describe("Basis Universal supercompressed textures.")
        .dependency(CORE, "com.crashinvaders.basisu:basisu-wrapper")
        .dependency(CORE, "com.crashinvaders.basisu:basisu-gdx")
        .desktop("com.crashinvaders.basisu:basisu-wrapper:natives-desktop")
        .dependency(Platform::Headless, "com.crashinvaders.basisu:basisu-wrapper:natives-desktop")
        .dependency(IOS, "com.crashinvaders.basisu:basisu-wrapper:natives-ios")
        .native_android("com.crashinvaders.basisu:basisu-wrapper")
        .dependency(HTML, "com.crashinvaders.basisu:basisu-gdx-gwt")
        .dependency(HTML, "com.crashinvaders.basisu:basisu-gdx-gwt:sources")
        .dependency(HTML, "com.crashinvaders.basisu:basisu-gdx:sources")
        .dependency(HTML, "com.crashinvaders.basisu:basisu-wrapper:sources")
        .dependency(HTML, "com.crashinvaders.basisu:basisu-wrapper:natives-web")
        .inherit("com.crashinvaders.basisu.BasisuGdxGwt")
}

fn lombok() -> Extension {
    Extension::third_party("lombok", "1.18.20")
        .named("lombok", "org.projectlombok", "https://projectlombok.org/")
        .describe("Annotations that generate boilerplate code in the core module.")
        .dependency(CORE, "org.projectlombok:lombok")
        .special(CORE, r#"annotationProcessor "org.projectlombok:lombok:$lombokVersion""#)
}
