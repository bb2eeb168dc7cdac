//! Tests for error message quality
//!
//! Every failure ends up as a single console line, so the message alone has
//! to say what went wrong and what was allowed.

use docker_android_build::catalog::{Choice, Project, Task};
use docker_android_build::error::BuildError;
use docker_android_build::exit_codes::{exit_code_for_error, failure_message};

#[test]
fn test_invalid_project_lists_every_project() {
    let err = Project::parse("pro-genymotion").unwrap_err();

    let msg = failure_message(&err.into());
    assert!(msg.starts_with("Error: 'pro-genymotion' is not a supported project!"));
    for name in Project::names() {
        assert!(msg.contains(name), "missing {} in {}", name, msg);
    }
}

#[test]
fn test_invalid_task_message() {
    let err = Task::parse("").unwrap_err();
    assert_eq!(
        err.to_string(),
        "'' is not a supported task! Supported tasks: test, build, push"
    );
}

#[test]
fn test_command_failed_includes_command_line_and_code() {
    let err = BuildError::CommandFailed {
        command: "docker build -t a:b -f docker/base .".to_string(),
        code: Some(1),
    };

    let msg = format!("{}", err);
    assert!(msg.contains("exit code 1"));
    assert!(msg.contains("docker build -t a:b"));
}

#[test]
fn test_missing_argument_names_field() {
    let err = BuildError::MissingArgument {
        field: "android_version",
    };
    assert!(err.to_string().contains("android_version"));
}

#[test]
fn test_io_error_chain_preserved() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "tmp is read-only");
    let err = BuildError::Io(io_err);

    let msg = format!("{}", err);
    assert!(msg.contains("I/O error"));
    assert!(msg.contains("tmp is read-only"));
}

#[test]
fn test_every_error_exits_1() {
    let errors = vec![
        BuildError::UserCancelled,
        BuildError::CommandNotFound {
            program: "docker".to_string(),
        },
        BuildError::MissingArgument {
            field: "release_version",
        },
    ];
    for err in errors {
        assert_eq!(exit_code_for_error(&err.into()), 1);
    }
    assert_eq!(exit_code_for_error(&anyhow::anyhow!("boom")), 1);
}
