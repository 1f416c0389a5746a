pub mod cleanup;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod process;
pub mod tools;
pub mod ui;
pub mod version;

pub use cleanup::remove_directory;
pub use domain::{BlenderVersion, Submodule};
pub use error::{MakeUtilsError, Result};
pub use git::Git;
pub use process::{CommandRunner, ErrorMode, Invocation, MockRunner, SystemRunner};
pub use tools::command_missing;
pub use version::parse_version;
