use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use docker_android_build::config::Config;
use docker_android_build::docker::DockerCli;
use docker_android_build::error::BuildError;
use docker_android_build::exit_codes::{codes, exit_code_for_error, failure_message};
use docker_android_build::input::{self, RawArgs};
use docker_android_build::prompt::Prompter;
use docker_android_build::resolver::BuildConfig;
use docker_android_build::runner::ProcessRunner;
use docker_android_build::tasks::Dispatcher;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docker-android-build")]
#[command(
    about = "Build, test and push docker-android images",
    long_about = "Builds one docker-android image variant and tags it for a release.\n\nTasks:\n  build  - docker build, then tag as <variant> and <variant>_<release>\n  test   - build, then run the test suite inside the image\n  push   - build, then push every tag\n\nAny argument left out is asked for interactively."
)]
#[command(version)]
struct Cli {
    /// Task to perform (test, build, push)
    task: Option<String>,

    /// Image variant (base, emulator, genymotion, pro-emulator, pro-emulator_headless)
    project: Option<String>,

    /// Release version (e.g., v2.0.0-p0)
    release_version: Option<String>,

    /// Android version (emulator projects only)
    android_version: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Registry namespace owning the images
    #[arg(long, env = "DOCKER_ANDROID_NAMESPACE")]
    namespace: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(codes::FAILURE);
        }
        Err(e) => e.exit(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("Docker Android Builder");
    println!("{}", "=".repeat(50));

    let outcome = tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => Err(BuildError::UserCancelled.into()),
    };

    // Exit directly: a pending stdin read would otherwise hold up runtime shutdown.
    match outcome {
        Ok(()) => {
            println!("\n{}", "=".repeat(50));
            println!("{}", style("✅ Task completed successfully!").green());
            std::process::exit(codes::SUCCESS);
        }
        Err(err) => {
            eprintln!("\n{}", failure_message(&err));
            println!("\n{}", "=".repeat(50));
            println!("{}", style("❌ Task failed!").red());
            std::process::exit(exit_code_for_error(&err));
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_namespace(cli.namespace);

    let raw = RawArgs {
        task: cli.task,
        project: cli.project,
        release_version: cli.release_version,
        android_version: cli.android_version,
    };
    let mut prompter = Prompter::stdio();
    let selection = input::gather(raw, &mut prompter).await?;

    let build = BuildConfig::resolve(&selection, &config.registry.namespace);
    let docker = DockerCli::new(&config.docker);
    let workdir = std::env::current_dir().context("Failed to get current directory")?;

    Dispatcher::new(&build, &docker, &config.test, &ProcessRunner, workdir)
        .execute()
        .await?;

    Ok(())
}
