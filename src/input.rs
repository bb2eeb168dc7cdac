//! Command-line positionals, with prompting for anything left out

use crate::catalog::{AndroidVersion, Choice, Project, Task};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::resolver::Selection;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Positionals exactly as typed. Empty strings count as omitted.
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    pub task: Option<String>,
    pub project: Option<String>,
    pub release_version: Option<String>,
    pub android_version: Option<String>,
}

/// Validate what was given and prompt for the rest.
///
/// A supplied value that is not in its table fails straight away with
/// `InvalidChoice`; only omitted values are prompted for.
pub async fn gather<R, W>(raw: RawArgs, prompter: &mut Prompter<R, W>) -> Result<Selection>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Reject a bad Android version before asking anything.
    let given_android = present(raw.android_version)
        .map(|v| AndroidVersion::parse(&v))
        .transpose()?;

    let task = match present(raw.task) {
        Some(value) => Task::parse(&value)?,
        None => prompter.choose("Task").await?,
    };

    let project = match present(raw.project) {
        Some(value) => Project::parse(&value)?,
        None => prompter.choose("Project").await?,
    };

    let release_version = match present(raw.release_version) {
        Some(value) => value,
        None => {
            prompter
                .text("Release Version", "v2.0.0-p0|v2.0.0-p1|etc")
                .await?
        }
    };

    let android_version = if project.requires_android_version() {
        match given_android {
            Some(version) => Some(version),
            None => Some(prompter.choose("Android Version").await?),
        }
    } else {
        None
    };

    Selection::new(task, project, release_version, android_version)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use crate::resolver::BuildConfig;

    fn raw(args: &[&str]) -> RawArgs {
        let mut it = args.iter().map(|s| s.to_string());
        RawArgs {
            task: it.next(),
            project: it.next(),
            release_version: it.next(),
            android_version: it.next(),
        }
    }

    #[tokio::test]
    async fn test_all_positionals_no_prompt() {
        let input: &[u8] = b"";
        let mut prompter = Prompter::new(input, Vec::new());

        let selection = gather(raw(&["build", "emulator", "v2.0.0-p0", "13.0"]), &mut prompter)
            .await
            .unwrap();
        let config = BuildConfig::resolve(&selection, "rcswain");
        assert_eq!(config.task(), Task::Build);
        assert_eq!(config.api_level(), Some(33));

        let (_, output) = prompter.into_inner();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_prompts_for_missing_values_in_order() {
        let input: &[u8] = b"push\npro-emulator\nv1.0.0\n16.0\n";
        let mut prompter = Prompter::new(input, Vec::new());

        let selection = gather(RawArgs::default(), &mut prompter).await.unwrap();
        assert_eq!(selection.task(), Task::Push);
        assert_eq!(selection.project(), Project::ProEmulator);

        let (_, output) = prompter.into_inner();
        let output = String::from_utf8(output).unwrap();
        let task_at = output.find("Task (").unwrap();
        let project_at = output.find("Project (").unwrap();
        let release_at = output.find("Release Version (").unwrap();
        let android_at = output.find("Android Version (").unwrap();
        assert!(task_at < project_at && project_at < release_at && release_at < android_at);
    }

    #[tokio::test]
    async fn test_no_android_prompt_for_base() {
        let input: &[u8] = b"";
        let mut prompter = Prompter::new(input, Vec::new());

        let selection = gather(raw(&["test", "base", "v1"]), &mut prompter).await.unwrap();
        assert_eq!(selection.project(), Project::Base);
    }

    #[tokio::test]
    async fn test_empty_positional_is_prompted() {
        let input: &[u8] = b"v3\n";
        let mut prompter = Prompter::new(input, Vec::new());

        let selection = gather(raw(&["build", "genymotion", ""]), &mut prompter)
            .await
            .unwrap();
        let config = BuildConfig::resolve(&selection, "rcswain");
        assert_eq!(config.release_version(), "v3");
    }

    #[tokio::test]
    async fn test_invalid_positional_fails_without_prompt() {
        let input: &[u8] = b"build\n";
        let mut prompter = Prompter::new(input, Vec::new());

        let err = gather(raw(&["deploy", "base", "v1"]), &mut prompter)
            .await
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidChoice { kind: "task", .. }));
    }

    #[tokio::test]
    async fn test_unsupported_android_version() {
        let input: &[u8] = b"";
        let mut prompter = Prompter::new(input, Vec::new());

        let err = gather(raw(&["build", "emulator", "v2.0.0-p0", "8.0"]), &mut prompter)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Supported Android versions: 9.0, 10.0"));
    }
}
