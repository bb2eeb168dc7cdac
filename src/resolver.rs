//! Image naming and tagging
//!
//! Turns the validated user inputs into the image names, tags and
//! Dockerfile path used by every task. Resolution is pure: the same
//! [`Selection`] and namespace always yield the same [`BuildConfig`].

use crate::catalog::{AndroidVersion, Choice, Project, Task};
use crate::error::{BuildError, Result};
use tracing::debug;

/// Validated inputs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    task: Task,
    project: Project,
    release_version: String,
    android_version: Option<AndroidVersion>,
}

impl Selection {
    /// An Android version is required for emulator projects and dropped for
    /// all others.
    pub fn new(
        task: Task,
        project: Project,
        release_version: impl Into<String>,
        android_version: Option<AndroidVersion>,
    ) -> Result<Self> {
        let release_version = release_version.into();
        if release_version.trim().is_empty() {
            return Err(BuildError::MissingArgument {
                field: "release_version",
            });
        }

        let android_version = if project.requires_android_version() {
            Some(android_version.ok_or(BuildError::MissingArgument {
                field: "android_version",
            })?)
        } else {
            None
        };

        Ok(Self {
            task,
            project,
            release_version,
            android_version,
        })
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn project(&self) -> Project {
        self.project
    }
}

/// Everything a task needs to know about the image it builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    task: Task,
    project: Project,
    release_version: String,
    android_version: Option<AndroidVersion>,
    folder_path: String,
    image_name: String,
    tag_name: String,
    image_name_latest: String,
    image_name_specific_release: String,
}

impl BuildConfig {
    /// Resolve names under the registry `namespace` (e.g. `rcswain`).
    pub fn resolve(selection: &Selection, namespace: &str) -> Self {
        let project = selection.project;

        let (folder_path, image_name, mut tag_name) = match project.split_family() {
            Some((family, variant)) => (
                format!("docker/{}/{}", family, variant),
                format!("{}/docker-android-{}", namespace, family),
                variant.to_string(),
            ),
            None => (
                format!("docker/{}", project.name()),
                format!("{}/docker-android", namespace),
                project.name().to_string(),
            ),
        };

        if let Some(android) = selection.android_version {
            tag_name.push('_');
            tag_name.push_str(android.name);
        }

        let image_name_latest = format!("{}:{}", image_name, tag_name);
        let image_name_specific_release =
            format!("{}:{}_{}", image_name, tag_name, selection.release_version);

        debug!(
            project = project.name(),
            folder = %folder_path,
            image = %image_name,
            tag = %tag_name,
            "Resolved build configuration"
        );

        Self {
            task: selection.task,
            project,
            release_version: selection.release_version.clone(),
            android_version: selection.android_version,
            folder_path,
            image_name,
            tag_name,
            image_name_latest,
            image_name_specific_release,
        }
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn project(&self) -> Project {
        self.project
    }

    pub fn release_version(&self) -> &str {
        &self.release_version
    }

    pub fn android_version(&self) -> Option<AndroidVersion> {
        self.android_version
    }

    pub fn api_level(&self) -> Option<u32> {
        self.android_version.map(|v| v.api_level)
    }

    /// Dockerfile passed to `docker build -f`
    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Tag without the release suffix
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn image_name_latest(&self) -> &str {
        &self.image_name_latest
    }

    pub fn image_name_specific_release(&self) -> &str {
        &self.image_name_specific_release
    }

    /// Build arguments in the order they are passed to `docker build`.
    pub fn build_args(&self) -> Vec<(&'static str, String)> {
        let mut args = vec![("DOCKER_ANDROID_VERSION", self.release_version.clone())];
        if let Some(android) = self.android_version {
            args.push(("EMULATOR_ANDROID_VERSION", android.name.to_string()));
            args.push(("EMULATOR_API_LEVEL", android.api_level.to_string()));
        }
        args
    }

    /// Whether this image also gets the bare `latest` tag.
    pub fn is_default_latest(&self) -> bool {
        self.android_version
            .is_some_and(|v| v == AndroidVersion::default_latest())
    }

    pub fn default_latest_image(&self) -> String {
        format!("{}:latest", self.image_name)
    }
}
