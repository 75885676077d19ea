//! GitHub credential discovery via the gh CLI.
use log::*;
use regex::Regex;
use secrecy::SecretString;

use crate::{
    exec::{CommandRequest, CommandRunner},
    result::Result,
};

/// Matches the classic GitHub token families (ghp_, gho_, ghu_, ghs_).
const TOKEN_PATTERN: &str = r"(gh[pous]_[A-Za-z0-9_]+)";

/// Query `gh auth status` and extract the first embedded token from its
/// combined output. gh prints status text on stdout or stderr depending on
/// version, so both streams are searched.
///
/// Returns `Ok(None)` when no token is present; callers decide whether that
/// halts the workflow.
pub fn discover(runner: &dyn CommandRunner) -> Result<Option<SecretString>> {
    let output =
        runner.run(CommandRequest::new("gh", &["auth", "status", "-t"]))?;

    let pattern = Regex::new(TOKEN_PATTERN)?;
    let combined = output.combined();

    match pattern.find(&combined) {
        Some(matched) => {
            debug!("found github token in gh auth status output");
            Ok(Some(SecretString::from(matched.as_str().to_string())))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for token extraction.
    use super::*;
    use crate::exec::{CommandOutput, MockCommandRunner};
    use mockall::predicate::eq;
    use secrecy::ExposeSecret;

    fn runner_with_output(stdout: &str, stderr: &str) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        let output = CommandOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        };

        runner
            .expect_run()
            .with(eq(CommandRequest::new("gh", &["auth", "status", "-t"])))
            .times(1)
            .returning(move |_| Ok(output.clone()));

        runner
    }

    /// Test extraction for each recognized token prefix family.
    #[test]
    fn extracts_each_token_prefix_family() {
        for prefix in ["ghp", "gho", "ghu", "ghs"] {
            let token = format!("{prefix}_Abc123_xyz9");
            let status = format!(
                "github.com\n  ✓ Logged in to github.com as someone\n  ✓ Token: {token}\n"
            );

            let runner = runner_with_output(&status, "");
            let result = discover(&runner).unwrap();

            assert_eq!(result.unwrap().expose_secret(), token);
        }
    }

    /// Test that tokens printed on stderr are still found.
    #[test]
    fn finds_token_on_stderr() {
        let runner =
            runner_with_output("", "  ✓ Token: ghp_stderrToken42\n");

        let result = discover(&runner).unwrap();

        assert_eq!(result.unwrap().expose_secret(), "ghp_stderrToken42");
    }

    /// Test that status output without a token yields None.
    #[test]
    fn returns_none_without_token() {
        let runner = runner_with_output(
            "github.com\n  ✗ You are not logged into any GitHub hosts\n",
            "",
        );

        let result = discover(&runner).unwrap();

        assert!(result.is_none());
    }
}
