//! Target platforms and the set of platforms active for a generation run.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A target build module of the generated project.
///
/// The set is fixed. Catalog entries name platforms through this enum, so an
/// unknown platform can only come from a request file, where it is rejected
/// by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Shared game logic; every other module depends on it.
    Core,
    /// Legacy LWJGL2 desktop backend.
    Lwjgl2,
    /// LWJGL3 desktop backend.
    Lwjgl3,
    Android,
    Ios,
    /// Web backend compiled through GWT.
    Html,
    /// Backend without graphics, for servers and tooling.
    Headless,
}

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 7] = [
        Platform::Core,
        Platform::Lwjgl2,
        Platform::Lwjgl3,
        Platform::Android,
        Platform::Ios,
        Platform::Html,
        Platform::Headless,
    ];

    /// Both desktop variants.
    pub const DESKTOP: [Platform; 2] = [Platform::Lwjgl2, Platform::Lwjgl3];

    /// The platform that receives inherit directives.
    pub const WEB: Platform = Platform::Html;

    /// Identifier used in request files and as the module directory name.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Core => "core",
            Platform::Lwjgl2 => "lwjgl2",
            Platform::Lwjgl3 => "lwjgl3",
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Html => "html",
            Platform::Headless => "headless",
        }
    }

    /// `classpath` coordinates the root build script needs for this module's
    /// Gradle plugins.
    pub fn build_dependencies(&self) -> &'static [&'static str] {
        match self {
            Platform::Android => &["com.android.tools.build:gradle:7.0.4"],
            Platform::Ios => &["com.mobidevelop.robovm:robovm-gradle-plugin:2.3.16"],
            Platform::Html => &[
                "org.wisepersist:gwt-gradle-plugin:1.1.16",
                "org.gretty:gretty:3.0.7",
            ],
            Platform::Core | Platform::Lwjgl2 | Platform::Lwjgl3 | Platform::Headless => &[],
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Core => "Core",
            Platform::Lwjgl2 => "Desktop (legacy)",
            Platform::Lwjgl3 => "Desktop",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Html => "HTML",
            Platform::Headless => "Headless",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.id() == s)
            .ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The platforms participating in one generation run.
///
/// Built once from the request and never changed while extensions resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Platforms {
    active: BTreeSet<Platform>,
}

impl Platforms {
    /// Create a registry with the given platforms active.
    pub fn new(active: impl IntoIterator<Item = Platform>) -> Self {
        Self {
            active: active.into_iter().collect(),
        }
    }

    /// Parse platform ids, failing on the first unknown one.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> crate::Result<Self> {
        let active = ids
            .iter()
            .map(|id| id.as_ref().parse())
            .collect::<crate::Result<BTreeSet<Platform>>>()?;
        Ok(Self { active })
    }

    pub fn is_active(&self, platform: Platform) -> bool {
        self.active.contains(&platform)
    }

    /// Active platforms in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Platform> + '_ {
        self.active.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
