//! Docker CLI invocations
//!
//! Builds the exact `docker build`, `docker tag`, `docker push` and
//! `docker run` argument lists for a resolved [`BuildConfig`]. Nothing here
//! executes anything; see [`crate::runner`].

use crate::config::{DockerConfig, TestConfig};
use crate::resolver::BuildConfig;
use crate::runner::Invocation;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
    context: PathBuf,
}

impl DockerCli {
    pub fn new(config: &DockerConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            context: config.context.clone(),
        }
    }

    /// `docker build -t <release> --build-arg K=V ... -f <dockerfile> <context>`
    pub fn build(&self, config: &BuildConfig) -> Invocation {
        let mut inv = Invocation::new("Building Docker image", &self.binary)
            .args(["build", "-t", config.image_name_specific_release()]);

        for (key, value) in config.build_args() {
            inv = inv.arg("--build-arg").arg(format!("{}={}", key, value));
        }

        inv.args(["-f", config.folder_path()])
            .arg(self.context.to_string_lossy())
    }

    pub fn tag(&self, description: &'static str, source: &str, target: &str) -> Invocation {
        Invocation::new(description, &self.binary).args(["tag", source, target])
    }

    pub fn push(&self, description: &'static str, image: &str) -> Invocation {
        Invocation::new(description, &self.binary).args(["push", image])
    }

    /// Run the test suite inside the freshly built image.
    ///
    /// `host_tmp` is mounted at `<cli_path>/<tmp_dir>`; coverage and results
    /// are copied there and handed to `owner`.
    pub fn run_tests(&self, config: &BuildConfig, test: &TestConfig, host_tmp: &Path) -> Invocation {
        let mount = format!(
            "{}:{}/{}",
            host_tmp.display(),
            test.cli_path,
            test.tmp_dir
        );

        Invocation::new("Running tests in container", &self.binary)
            .args(["run", "-it", "--rm", "--name", test.container_name.as_str()])
            .args(["--entrypoint", "/bin/bash"])
            .args(["-v".to_string(), mount])
            .arg(config.image_name_specific_release())
            .args(["-c".to_string(), test_script(test)])
    }
}

fn test_script(test: &TestConfig) -> String {
    let tmp = &test.tmp_dir;
    [
        format!("cd {}", test.cli_path),
        format!("sudo rm -rf {}/*", tmp),
        test.command.clone(),
        format!("sudo mv .coverage {}", tmp),
        format!("sudo cp -r {}/* {}", test.results_path, tmp),
        format!("sudo chown -R {} {}", test.owner, tmp),
        format!("sudo chmod a+x -R {}", tmp),
    ]
    .join(" && ")
}
