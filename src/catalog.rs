//! Fixed lookup tables
//!
//! Tasks, image projects and supported Android versions are closed sets.
//! Every value that comes from the command line or a prompt is checked
//! against these tables through the [`Choice`] trait.

use crate::error::{BuildError, Result};
use std::fmt;

/// A value drawn from a fixed, ordered enumeration.
pub trait Choice: Copy + Sized + 'static {
    /// Human-readable name of the enumeration, used in messages.
    const KIND: &'static str;

    fn all() -> &'static [Self];

    fn name(&self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::all().iter().map(Choice::name).collect()
    }

    fn parse(value: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.name() == value)
            .ok_or_else(|| BuildError::InvalidChoice {
                kind: Self::KIND,
                value: value.to_string(),
                allowed: Self::names().into_iter().map(String::from).collect(),
            })
    }
}

/// Top-level action requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Test,
    Build,
    Push,
}

impl Choice for Task {
    const KIND: &'static str = "task";

    fn all() -> &'static [Self] {
        &[Task::Test, Task::Build, Task::Push]
    }

    fn name(&self) -> &'static str {
        match self {
            Task::Test => "test",
            Task::Build => "build",
            Task::Push => "push",
        }
    }
}

/// Image variant, one Dockerfile per project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
    Base,
    Emulator,
    Genymotion,
    ProEmulator,
    ProEmulatorHeadless,
}

impl Choice for Project {
    const KIND: &'static str = "project";

    fn all() -> &'static [Self] {
        &[
            Project::Base,
            Project::Emulator,
            Project::Genymotion,
            Project::ProEmulator,
            Project::ProEmulatorHeadless,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Project::Base => "base",
            Project::Emulator => "emulator",
            Project::Genymotion => "genymotion",
            Project::ProEmulator => "pro-emulator",
            Project::ProEmulatorHeadless => "pro-emulator_headless",
        }
    }
}

impl Project {
    /// Emulator images are built per Android version.
    pub fn requires_android_version(&self) -> bool {
        self.name().contains("emulator")
    }

    /// `pro-emulator_headless` -> `("pro", "emulator_headless")`; `None` for
    /// projects outside a family.
    pub fn split_family(&self) -> Option<(&'static str, &'static str)> {
        let name = self.name();
        if name.starts_with("pro-") {
            name.split_once('-')
        } else {
            None
        }
    }
}

/// Supported Android platform and its API level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidVersion {
    pub name: &'static str,
    pub api_level: u32,
}

const ANDROID_VERSIONS: &[AndroidVersion] = &[
    AndroidVersion { name: "9.0", api_level: 28 },
    AndroidVersion { name: "10.0", api_level: 29 },
    AndroidVersion { name: "11.0", api_level: 30 },
    AndroidVersion { name: "12.0", api_level: 32 },
    AndroidVersion { name: "13.0", api_level: 33 },
    AndroidVersion { name: "14.0", api_level: 34 },
    AndroidVersion { name: "15.0", api_level: 35 },
    AndroidVersion { name: "16.0", api_level: 36 },
];

impl Choice for AndroidVersion {
    const KIND: &'static str = "Android version";

    fn all() -> &'static [Self] {
        ANDROID_VERSIONS
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl AndroidVersion {
    /// The version that also receives the bare `latest` tag.
    ///
    /// This is the second-to-last entry in numeric order, not the newest.
    /// Existing published images depend on it, so it stays until the
    /// release process says otherwise.
    pub fn default_latest() -> AndroidVersion {
        select_default_latest(Self::all())
    }

    fn sort_key(&self) -> (u32, u32) {
        let (major, minor) = self.name.split_once('.').unwrap_or((self.name, "0"));
        (major.parse().unwrap_or(0), minor.parse().unwrap_or(0))
    }
}

fn select_default_latest(versions: &[AndroidVersion]) -> AndroidVersion {
    let mut sorted = versions.to_vec();
    sorted.sort_by_key(AndroidVersion::sort_key);
    if sorted.len() > 1 {
        sorted[sorted.len() - 2]
    } else {
        sorted[0]
    }
}

macro_rules! display_choice {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_choice!(Task, Project, AndroidVersion);
