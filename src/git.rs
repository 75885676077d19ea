//! Tag queries and deletion through the git CLI.
use log::*;

use crate::{
    exec::{CommandOutput, CommandRequest, CommandRunner},
    result::Result,
};

/// Most recent tag reachable from HEAD, or `None` when the repository has no
/// tags yet. `git describe` exits nonzero in that case, which is not an
/// error here.
pub fn latest_tag(runner: &dyn CommandRunner) -> Result<Option<String>> {
    let output = runner.run(CommandRequest::new(
        "git",
        &["describe", "--tags", "--abbrev=0"],
    ))?;

    if !output.success {
        debug!("git describe found no tags: {}", output.stderr.trim());
        return Ok(None);
    }

    Ok(Some(output.stdout.trim().to_string()))
}

/// Delete a tag from the local repository.
pub fn delete_local_tag(
    runner: &dyn CommandRunner,
    tag: &str,
) -> Result<CommandOutput> {
    runner.run(CommandRequest::new("git", &["tag", "-d", tag]))
}

/// Delete a tag from the origin remote.
pub fn delete_remote_tag(
    runner: &dyn CommandRunner,
    tag: &str,
) -> Result<CommandOutput> {
    runner.run(CommandRequest::new(
        "git",
        &["push", "origin", "--delete", tag],
    ))
}

#[cfg(test)]
mod tests {
    //! Unit tests for git CLI wrappers.
    use super::*;
    use crate::exec::MockCommandRunner;
    use mockall::predicate::eq;

    /// Test that the latest tag is trimmed of trailing whitespace.
    #[test]
    fn latest_tag_trims_describe_output() {
        let mut runner = MockCommandRunner::new();

        runner
            .expect_run()
            .with(eq(CommandRequest::new(
                "git",
                &["describe", "--tags", "--abbrev=0"],
            )))
            .times(1)
            .returning(|_| {
                Ok(CommandOutput {
                    success: true,
                    stdout: "v1.2.3\n".to_string(),
                    ..Default::default()
                })
            });

        let tag = latest_tag(&runner).unwrap();

        assert_eq!(tag, Some("v1.2.3".to_string()));
    }

    /// Test that a failed describe means no tags rather than an error.
    #[test]
    fn latest_tag_is_none_when_describe_fails() {
        let mut runner = MockCommandRunner::new();

        runner.expect_run().times(1).returning(|_| {
            Ok(CommandOutput {
                success: false,
                stderr: "fatal: No names found".to_string(),
                ..Default::default()
            })
        });

        assert!(latest_tag(&runner).unwrap().is_none());
    }

    /// Test the local and remote tag deletion invocations.
    #[test]
    fn deletion_helpers_pass_tag_through() {
        let mut runner = MockCommandRunner::new();

        runner
            .expect_run()
            .with(eq(CommandRequest::new("git", &["tag", "-d", "v1.0.0"])))
            .times(1)
            .returning(|_| Ok(CommandOutput::default()));

        runner
            .expect_run()
            .with(eq(CommandRequest::new(
                "git",
                &["push", "origin", "--delete", "v1.0.0"],
            )))
            .times(1)
            .returning(|_| Ok(CommandOutput::default()));

        delete_local_tag(&runner, "v1.0.0").unwrap();
        delete_remote_tag(&runner, "v1.0.0").unwrap();
    }
}
