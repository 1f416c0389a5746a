//! Git helpers built on the process runner
//!
//! [Git] wraps a [CommandRunner] together with the git executable to invoke.
//! The executable is never hard-coded so environment-provided git binaries work.
//!
//! - [query]: read-only introspection (branches, remotes, config, submodule state)
//! - [mutate]: configuration writes, remotes, submodule enable/update
//!
//! ```rust
//! # use make_utils::git::Git;
//! # use make_utils::process::MockRunner;
//! let git = Git::new(MockRunner::new(), "git");
//! assert!(git.local_branch_exists("main"));
//! ```

pub mod mutate;
pub mod query;

use crate::process::{CommandRunner, Invocation, SystemRunner};

/// Environment variable that stops git-lfs from downloading content during checkout
pub const LFS_SKIP_SMUDGE_ENV: &str = "GIT_LFS_SKIP_SMUDGE";

/// Remotes checked, in order, after the local branch when checking branch existence
pub const FALLBACK_REMOTES: [&str; 2] = ["upstream", "origin"];

/// Git command facade
pub struct Git<R: CommandRunner> {
    runner: R,
    command: String,
}

impl Git<SystemRunner> {
    /// Git helpers that spawn `command` in the current directory
    pub fn system(command: impl Into<String>) -> Self {
        Git::new(SystemRunner::new(), command)
    }
}

impl<R: CommandRunner> Git<R> {
    pub fn new(runner: R, command: impl Into<String>) -> Self {
        Git {
            runner,
            command: command.into(),
        }
    }

    /// The git executable this facade invokes
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(self.command.as_str(), args)
    }
}
