//! Official libGDX extensions. Coordinates are pinned to the release they
//! ship with.

use launchpad_core::{Extension, Platform};

/// libGDX release the official extensions are pinned to.
pub const GDX_VERSION: &str = "1.10.0";

/// gdx-controllers release.
pub const CONTROLLERS_VERSION: &str = "2.2.1";

pub(crate) fn extensions() -> Vec<Extension> {
    vec![box2d(), freetype(), controllers()]
}

fn box2d() -> Extension {
    Extension::official("box2d", GDX_VERSION)
        .named("gdx-box2d", "com.badlogicgames.gdx", "https://libgdx.com/wiki/extensions/physics/box2d")
        .describe("2D physics engine bindings.")
        .dependency(Platform::Core, "com.badlogicgames.gdx:gdx-box2d")
        .desktop("com.badlogicgames.gdx:gdx-box2d-platform:natives-desktop")
        .dependency(Platform::Headless, "com.badlogicgames.gdx:gdx-box2d-platform:natives-desktop")
        .dependency(Platform::Android, "com.badlogicgames.gdx:gdx-box2d")
        .native_android("com.badlogicgames.gdx:gdx-box2d-platform")
        .dependency(Platform::Ios, "com.badlogicgames.gdx:gdx-box2d-platform:natives-ios")
        .dependency(Platform::Html, "com.badlogicgames.gdx:gdx-box2d-gwt")
        .dependency(Platform::Html, "com.badlogicgames.gdx:gdx-box2d-gwt:sources")
        .dependency(Platform::Html, "com.badlogicgames.gdx:gdx-box2d:sources")
        .inherit("com.badlogic.gdx.physics.box2d.box2d-gwt")
}

// No web backend: FreeType is native-only.
fn freetype() -> Extension {
    Extension::official("freetype", GDX_VERSION)
        .named("gdx-freetype", "com.badlogicgames.gdx", "https://libgdx.com/wiki/extensions/gdx-freetype")
        .describe("Generates bitmap fonts from TTF and OTF files at runtime.")
        .dependency(Platform::Core, "com.badlogicgames.gdx:gdx-freetype")
        .desktop("com.badlogicgames.gdx:gdx-freetype-platform:natives-desktop")
        .dependency(Platform::Headless, "com.badlogicgames.gdx:gdx-freetype-platform:natives-desktop")
        .dependency(Platform::Android, "com.badlogicgames.gdx:gdx-freetype")
        .native_android("com.badlogicgames.gdx:gdx-freetype-platform")
        .dependency(Platform::Ios, "com.badlogicgames.gdx:gdx-freetype-platform:natives-ios")
}

fn controllers() -> Extension {
    Extension::official("controllers", CONTROLLERS_VERSION)
        .named(
            "gdx-controllers-core",
            "com.badlogicgames.gdx-controllers",
            "https://github.com/libgdx/gdx-controllers",
        )
        .describe("Game controller support.")
        .dependency(Platform::Core, "com.badlogicgames.gdx-controllers:gdx-controllers-core")
        .desktop("com.badlogicgames.gdx-controllers:gdx-controllers-desktop")
        .dependency(Platform::Android, "com.badlogicgames.gdx-controllers:gdx-controllers-android")
        .dependency(Platform::Ios, "com.badlogicgames.gdx-controllers:gdx-controllers-ios")
        .dependency(Platform::Html, "com.badlogicgames.gdx-controllers:gdx-controllers-core:sources")
        .dependency(Platform::Html, "com.badlogicgames.gdx-controllers:gdx-controllers-gwt")
        .dependency(Platform::Html, "com.badlogicgames.gdx-controllers:gdx-controllers-gwt:sources")
        .inherit("com.badlogic.gdx.controllers")
        .inherit("com.badlogic.gdx.controllers.controllers-gwt")
}
