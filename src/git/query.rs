//! Read-only git introspection

use super::{Git, FALLBACK_REMOTES};
use crate::domain::Submodule;
use crate::error::{MakeUtilsError, Result};
use crate::process::{CommandRunner, Invocation};
use std::path::{Path, PathBuf};

const GITMODULES: &str = ".gitmodules";

fn config_get_args(key: &str, file: Option<&Path>) -> Vec<String> {
    let mut args = vec!["config".to_string()];
    if let Some(file) = file {
        args.push("--file".to_string());
        args.push(file.to_string_lossy().into_owned());
    }
    args.push("--get".to_string());
    args.push(key.to_string());
    args
}

impl<R: CommandRunner> Git<R> {
    fn succeeds(&self, invocation: Invocation) -> bool {
        matches!(self.runner.call(&invocation.soft().silent()), Ok(0))
    }

    /// True if `branch` resolves in the local repository
    pub fn local_branch_exists(&self, branch: &str) -> bool {
        self.succeeds(self.invocation(["rev-parse", "--verify", branch]))
    }

    /// True if `remotes/<remote>/<branch>` resolves
    pub fn remote_branch_exists(&self, remote: &str, branch: &str) -> bool {
        let reference = format!("remotes/{}/{}", remote, branch);
        self.succeeds(self.invocation(["rev-parse", "--verify", reference.as_str()]))
    }

    /// True if the branch exists locally, on `upstream` or on `origin`.
    ///
    /// Checks run in that order and stop at the first hit.
    pub fn branch_exists(&self, branch: &str) -> bool {
        self.local_branch_exists(branch)
            || FALLBACK_REMOTES
                .iter()
                .any(|remote| self.remote_branch_exists(remote, branch))
    }

    /// URL configured for `remote_name`, or the name itself when no such remote exists
    pub fn remote_url(&self, remote_name: &str) -> Result<String> {
        self.runner
            .check_output(&self.invocation(["ls-remote", "--get-url", remote_name]))
    }

    /// Check whether there is a remote with the given name.
    ///
    /// `git ls-remote --get-url <name>` prints the URL of a configured remote and
    /// echoes the name back otherwise.
    pub fn remote_exists(&self, remote_name: &str) -> Result<bool> {
        Ok(self.remote_url(remote_name)? != remote_name)
    }

    /// True if `repo` (URL or path) is a valid, clonable git repository
    pub fn is_remote_repository(&self, repo: &str) -> bool {
        self.succeeds(self.invocation(["ls-remote", repo, "HEAD"]))
    }

    /// Configured remote names.
    ///
    /// Each listed name is confirmed with [Git::remote_exists] in case the
    /// output of `git remote` changes format.
    pub fn remotes(&self) -> Result<Vec<String>> {
        let listing = self.runner.check_output(&self.invocation(["remote"]))?;
        let mut remotes = Vec::new();
        for remote in listing.split_whitespace() {
            if self.remote_exists(remote)? {
                remotes.push(remote.to_string());
            }
        }
        Ok(remotes)
    }

    /// Value of `key`, read from `file` instead of the repository config chain when given
    pub fn get_config(&self, key: &str, file: Option<&Path>) -> Result<String> {
        self.runner
            .check_output(&self.invocation(config_get_args(key, file)))
    }

    /// Name of the currently checked out branch.
    ///
    /// Only stdout is read; git's warnings and errors go straight to the terminal.
    pub fn branch(&self) -> Result<String> {
        self.runner
            .check_output(
                &self
                    .invocation(["rev-parse", "--abbrev-ref", "HEAD"])
                    .inherit_stderr(),
            )
            .map_err(|_| MakeUtilsError::BranchLookup)
    }

    /// Top-level directory of the working tree
    pub fn toplevel(&self) -> Result<PathBuf> {
        let root = self
            .runner
            .check_output(&self.invocation(["rev-parse", "--show-toplevel"]))?;
        Ok(PathBuf::from(root))
    }

    /// Check whether the submodule is known and its update strategy is not `none`.
    ///
    /// The strategy comes from the local configuration when set there, from
    /// `.gitmodules` otherwise. No strategy at all means git's default
    /// `checkout`, which counts as enabled.
    pub fn is_submodule_enabled(&self, submodule: &Submodule) -> Result<bool> {
        let gitmodules = self.toplevel()?.join(GITMODULES);

        // Unknown submodules make `git config --get` exit non-zero.
        let path_key = submodule.config_key("path");
        let path = self.runner.check_output(
            &self
                .invocation(config_get_args(&path_key, Some(&gitmodules)))
                .soft(),
        )?;
        if path.is_empty() {
            return Ok(false);
        }

        let update_key = submodule.config_key("update");
        let mut update = self.runner.check_output(
            &self
                .invocation(["config", "--local", update_key.as_str()])
                .soft(),
        )?;
        if update.is_empty() {
            let gitmodules = gitmodules.to_string_lossy().into_owned();
            update = self.runner.check_output(
                &self
                    .invocation(["config", "--file", gitmodules.as_str(), update_key.as_str()])
                    .soft(),
            )?;
        }

        Ok(!update.eq_ignore_ascii_case("none"))
    }
}
