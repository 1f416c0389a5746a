//! Git configuration, remote and submodule writes

use super::{Git, LFS_SKIP_SMUDGE_ENV};
use crate::domain::Submodule;
use crate::error::Result;
use crate::process::CommandRunner;
use std::path::Path;

impl<R: CommandRunner> Git<R> {
    /// Set `key` to `value`, in `file` instead of the repository config when given
    pub fn set_config(&self, key: &str, value: &str, file: Option<&Path>) -> Result<String> {
        let mut args = vec!["config".to_string()];
        if let Some(file) = file {
            args.push("--file".to_string());
            args.push(file.to_string_lossy().into_owned());
        }
        args.push(key.to_string());
        args.push(value.to_string());
        self.runner.check_output(&self.invocation(args))
    }

    /// Add a remote with distinct fetch and push URLs.
    ///
    /// `git remote add` takes a single URL, so the push URL is set afterwards.
    pub fn add_remote(&self, name: &str, url: &str, push_url: &str) -> Result<()> {
        self.runner
            .call(&self.invocation(["remote", "add", name, url]).silent())?;
        self.runner.call(
            &self
                .invocation(["remote", "set-url", "--push", name, push_url])
                .silent(),
        )?;
        Ok(())
    }

    /// Enable the submodule by setting its local update strategy to `checkout`
    pub fn enable_submodule(&self, submodule: &Submodule) -> Result<()> {
        let key = submodule.config_key("update");
        self.runner.call(
            &self
                .invocation(["config", "--local", key.as_str(), "checkout"])
                .silent(),
        )?;
        Ok(())
    }

    /// Update the given submodule, initializing it if needed.
    ///
    /// Runs in two stages: checkout to the hash recorded by the parent
    /// repository with LFS smudging disabled, then `git lfs pull` inside the
    /// submodule. The second stage shows download progress and can resume or
    /// repair a partial LFS checkout.
    ///
    /// Returns true if both stages succeeded. The LFS stage is skipped when the
    /// checkout fails.
    pub fn update_submodule(&self, submodule: &Submodule) -> bool {
        let dir = submodule.dir().to_string_lossy().into_owned();

        let checkout = self
            .invocation(["submodule", "update", "--init", "--progress", dir.as_str()])
            .env(LFS_SKIP_SMUDGE_ENV, "1")
            .soft();
        if !matches!(self.runner.call(&checkout), Ok(0)) {
            return false;
        }

        let lfs_pull = self
            .invocation(["-C", dir.as_str(), "lfs", "pull"])
            .soft();
        matches!(self.runner.call(&lfs_pull), Ok(0))
    }
}
