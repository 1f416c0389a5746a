//! External process execution
//!
//! Every git helper in this crate goes through the [CommandRunner] trait. The
//! concrete implementations are:
//!
//! - [system::SystemRunner]: spawns real processes with `std::process`
//! - [mock::MockRunner]: scripted responses for tests, records every invocation
//!
//! Failures are reported according to the [ErrorMode] of each [Invocation]:
//! fatal invocations turn a non-zero exit into an error value that the caller
//! propagates up to the driver, soft invocations hand the raw result back.

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::{MakeUtilsError, Result};
use std::collections::BTreeMap;

/// Exit code reported for a soft-mode invocation whose program could not be started.
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// How a non-zero exit status is reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Non-zero exit becomes [MakeUtilsError::ProcessFailed].
    #[default]
    Fatal,
    /// Non-zero exit is returned as-is (`call`) or as an empty string (`check_output`).
    Soft,
}

/// A single command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Variables overlaid on the inherited environment for this call only
    pub env: BTreeMap<String, String>,
    pub mode: ErrorMode,
    /// Discard child output and skip echoing the command line
    pub silent: bool,
    /// Leave stderr on the caller's terminal instead of capturing it (`check_output` only)
    pub inherit_stderr: bool,
}

impl Invocation {
    /// Create a fatal, non-silent invocation with no extra environment
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: BTreeMap::new(),
            mode: ErrorMode::Fatal,
            silent: false,
            inherit_stderr: false,
        }
    }

    pub fn soft(mut self) -> Self {
        self.mode = ErrorMode::Soft;
        self
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn inherit_stderr(mut self) -> Self {
        self.inherit_stderr = true;
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Program and arguments joined by spaces, without the environment prefix
    pub fn command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full command line as echoed before execution, e.g. `GIT_LFS_SKIP_SMUDGE=1 git submodule update`
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        for (key, value) in &self.env {
            line.push_str(&format!("{}={} ", key, value));
        }
        line.push_str(&self.command());
        line
    }

    /// Apply the error mode to the exit code of a `call`
    pub(crate) fn finish_call(&self, code: i32) -> Result<i32> {
        if code != 0 && self.mode == ErrorMode::Fatal {
            return Err(MakeUtilsError::ProcessFailed {
                command: self.command(),
                code,
                output: None,
            });
        }
        Ok(code)
    }

    /// Apply the error mode to the exit code and captured text of a `check_output`
    pub(crate) fn finish_output(&self, code: i32, output: &str) -> Result<String> {
        if code == 0 {
            return Ok(output.trim().to_string());
        }
        match self.mode {
            ErrorMode::Fatal => Err(MakeUtilsError::ProcessFailed {
                command: self.command(),
                code,
                output: Some(output.to_string()),
            }),
            ErrorMode::Soft => Ok(String::new()),
        }
    }
}

/// Process execution abstraction
///
/// Implementors must be `Send + Sync`. Both methods block until the child exits.
pub trait CommandRunner: Send + Sync {
    /// Run the invocation with inherited (or, when silent, discarded) output.
    ///
    /// # Returns
    /// * `Ok(code)` - The child's exit code; always 0 for fatal invocations
    /// * `Err` - Fatal invocation exited non-zero or could not be started
    fn call(&self, invocation: &Invocation) -> Result<i32>;

    /// Run the invocation capturing stdout and stderr.
    ///
    /// The captured text is all of stdout followed by all of stderr; the two
    /// streams are not interleaved. With [Invocation::inherit_stderr] only
    /// stdout is captured.
    ///
    /// # Returns
    /// * `Ok(text)` - Trimmed output on success, empty string on soft failure
    /// * `Err` - Fatal invocation exited non-zero or could not be started
    fn check_output(&self, invocation: &Invocation) -> Result<String>;
}
