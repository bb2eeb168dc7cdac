use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = ".docker-android.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub docker: DockerConfig,
    pub test: TestConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Docker Hub user or organisation owning the images
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    pub binary: String,
    /// Build context passed as the last `docker build` argument
    pub context: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    pub container_name: String,
    /// Location of the CLI sources inside the image
    pub cli_path: String,
    pub results_path: String,
    /// Host directory (relative to the working directory) mounted into the container
    pub tmp_dir: String,
    pub command: String,
    /// `uid:gid` that owns the copied results
    pub owner: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            namespace: "rcswain".to_string(),
        }
    }
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            context: PathBuf::from("."),
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            container_name: "test".to_string(),
            cli_path: "/home/androidusr/docker-android/cli".to_string(),
            results_path: "test-results".to_string(),
            tmp_dir: "tmp".to_string(),
            command: "nosetests -v".to_string(),
            owner: "1300:1301".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the first config file found by [`locate`].
    /// No file at all means built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => locate(),
        };

        if !config_path.exists() {
            if path.is_some() {
                eprintln!("WARNING: Config file not found: {}", config_path.display());
                eprintln!("   Using default configuration.");
            }
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))
    }

    /// Apply command-line overrides on top of the loaded file.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        if let Some(ns) = namespace.filter(|ns| !ns.trim().is_empty()) {
            self.registry.namespace = ns;
        }
        self
    }
}

/// `.docker-android.toml` in the working directory wins over
/// `<config_dir>/docker-android/config.toml`.
fn locate() -> PathBuf {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|d| d.join("docker-android").join("config.toml"))
        .unwrap_or(local)
}
