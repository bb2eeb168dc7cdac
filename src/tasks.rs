//! Task dispatch: build, then test or push
//!
//! All three tasks start with the same build step (build, tag as latest,
//! optionally tag as bare `latest`). Any failing command ends the task;
//! nothing after it runs.

use crate::catalog::Task;
use crate::config::TestConfig;
use crate::docker::DockerCli;
use crate::error::Result;
use crate::resolver::BuildConfig;
use crate::runner::CommandRunner;
use std::path::PathBuf;
use tracing::info;

const RULE_WIDTH: usize = 50;

pub struct Dispatcher<'a, R: CommandRunner + ?Sized> {
    config: &'a BuildConfig,
    docker: &'a DockerCli,
    test_config: &'a TestConfig,
    runner: &'a R,
    workdir: PathBuf,
}

impl<'a, R: CommandRunner + ?Sized> Dispatcher<'a, R> {
    /// `workdir` is where the test results directory is created.
    pub fn new(
        config: &'a BuildConfig,
        docker: &'a DockerCli,
        test_config: &'a TestConfig,
        runner: &'a R,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            docker,
            test_config,
            runner,
            workdir: workdir.into(),
        }
    }

    pub async fn execute(&self) -> Result<()> {
        println!(
            "Building: {} or {}",
            self.config.image_name_specific_release(),
            self.config.image_name_latest()
        );
        info!(task = %self.config.task(), "Executing task");

        match self.config.task() {
            Task::Build => self.build().await,
            Task::Test => self.test().await,
            Task::Push => self.push().await,
        }
    }

    async fn build(&self) -> Result<()> {
        banner("Building Docker Image");
        let config = self.config;
        let release = config.image_name_specific_release();

        self.runner.run(&self.docker.build(config)).await?;
        self.runner
            .run(&self.docker.tag("Tagging as latest", release, config.image_name_latest()))
            .await?;

        if config.is_default_latest() {
            if let Some(android) = config.android_version() {
                println!(
                    "{} is the last version, tagging as default latest",
                    android
                );
            }
            self.runner
                .run(&self.docker.tag(
                    "Tagging as default latest",
                    release,
                    &config.default_latest_image(),
                ))
                .await?;
        }

        Ok(())
    }

    async fn test(&self) -> Result<()> {
        banner("Running Tests");
        self.build().await?;

        let host_tmp = self.workdir.join(&self.test_config.tmp_dir);
        tokio::fs::create_dir_all(&host_tmp).await?;
        info!("Mounting {} into the test container", host_tmp.display());

        self.runner
            .run(&self.docker.run_tests(self.config, self.test_config, &host_tmp))
            .await
    }

    async fn push(&self) -> Result<()> {
        banner("Pushing Images to Docker Hub");
        self.build().await?;

        let config = self.config;
        self.runner
            .run(&self.docker.push(
                "Pushing specific release",
                config.image_name_specific_release(),
            ))
            .await?;
        self.runner
            .run(&self.docker.push("Pushing latest tag", config.image_name_latest()))
            .await?;

        if config.is_default_latest() {
            self.runner
                .run(&self
                    .docker
                    .push("Pushing default latest", &config.default_latest_image()))
                .await?;
        }

        Ok(())
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("{}", title);
    println!("{}", rule);
}
