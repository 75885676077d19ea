//! Subprocess execution seam for external release tooling.
//!
//! Every external tool (git, gh, semantic-release, the package builder) is
//! invoked through the [`CommandRunner`] trait so orchestration logic can be
//! tested against mocks instead of real processes.
use color_eyre::eyre::WrapErr;
use log::*;
use std::process::Command;

use crate::result::Result;

/// A single external tool invocation: program, argument list, and any extra
/// environment variables layered on top of the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl CommandRequest {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            envs: vec![],
        }
    }

    /// Add an environment variable for this invocation only.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }
}

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout and stderr concatenated, for tools that report on either
    /// stream depending on version.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs external commands, blocking until completion.
///
/// A nonzero exit is a normal [`CommandOutput`] with `success == false`;
/// only a failure to spawn the process at all is an `Err`.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    fn run(&self, req: CommandRequest) -> Result<CommandOutput>;
}

/// Production runner backed by `std::process::Command`.
///
/// Extra environment pairs are applied to a copy of the parent environment;
/// the current process's environment is never mutated.
pub struct ProcessRunner {}

impl ProcessRunner {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, req: CommandRequest) -> Result<CommandOutput> {
        debug!("running: {} {}", req.program, req.args.join(" "));

        let output = Command::new(&req.program)
            .args(&req.args)
            .envs(req.envs.clone())
            .output()
            .wrap_err_with(|| format!("failed to execute {}", req.program))?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
