//! Command line driver.
//!
//! `main` parses [Args], hands them to [orchestration::run] and is the only
//! place that terminates the process.

pub mod orchestration;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "make-utils",
    about = "Git, submodule and version helpers for the build scripts"
)]
pub struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Git executable to run (overrides the configuration)")]
    pub git_command: Option<String>,

    #[arg(long, default_value = ".", help = "Root of the source tree")]
    pub source_root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the version declared in the version header
    Version {
        #[arg(long, help = "Print as a semantic version")]
        semver: bool,
    },
    /// Print the current branch name
    Branch,
    /// Check whether a branch exists locally, on upstream or on origin
    BranchExists { branch: String },
    /// List configured remotes
    Remotes,
    /// Print the URL of a remote
    RemoteUrl { name: String },
    /// Add a remote with separate fetch and push URLs
    AddRemote {
        name: String,
        url: String,
        push_url: String,
    },
    /// Read a git config value
    ConfigGet {
        key: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write a git config value
    ConfigSet {
        key: String,
        value: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Inspect, enable or update submodules
    Submodule {
        #[command(subcommand)]
        action: SubmoduleAction,
    },
    /// Recursively remove a directory, including read-only files
    RemoveDir {
        dir: PathBuf,
        #[arg(short, long, help = "Skip confirmation prompt")]
        yes: bool,
    },
    /// Fail if any of the given tools is not on the search path
    CheckTools {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SubmoduleAction {
    /// Report whether submodules are enabled
    Status(SubmoduleTargets),
    /// Set the update strategy of submodules to checkout
    Enable(SubmoduleTargets),
    /// Checkout submodules and pull their LFS content
    Update(SubmoduleTargets),
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct SubmoduleTargets {
    /// Repository-relative submodule directories
    pub dirs: Vec<PathBuf>,

    #[arg(long, help = "Use every submodule listed in the configuration")]
    pub all: bool,
}
