//! Command dispatch
//!
//! Keeps the library calls separate from argument parsing so the driver can be
//! exercised with any [CommandRunner].

use anyhow::{bail, Result};
use std::path::Path;

use crate::cleanup::remove_directory;
use crate::cli::{Args, Command, SubmoduleAction, SubmoduleTargets};
use crate::config::{load_config, Config};
use crate::domain::Submodule;
use crate::error::MakeUtilsError;
use crate::git::Git;
use crate::process::CommandRunner;
use crate::tools::first_missing;
use crate::ui;
use crate::version::parse_version;

/// Load configuration, build the system git facade and execute the command
pub fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(git_command) = args.git_command {
        config.git.command = git_command;
    }

    let git = Git::system(config.git.command.clone());
    execute(&args.command, &args.source_root, &config, &git)
}

/// Execute one driver command against the given git facade
pub fn execute<R: CommandRunner>(
    command: &Command,
    source_root: &Path,
    config: &Config,
    git: &Git<R>,
) -> Result<()> {
    match command {
        Command::Version { semver } => {
            let header = config.paths.version_header_in(source_root);
            let version = parse_version(&header)?;
            if *semver {
                println!("{}", version.to_semver()?);
            } else {
                ui::display_version(&version);
            }
        }
        Command::Branch => println!("{}", git.branch()?),
        Command::BranchExists { branch } => {
            if !git.branch_exists(branch) {
                bail!("Branch '{}' does not exist", branch);
            }
            ui::display_success(&format!("Branch '{}' exists", branch));
        }
        Command::Remotes => ui::display_list("Remotes:", &git.remotes()?),
        Command::RemoteUrl { name } => {
            if !git.remote_exists(name)? {
                bail!("No remote named '{}'", name);
            }
            println!("{}", git.remote_url(name)?);
        }
        Command::AddRemote {
            name,
            url,
            push_url,
        } => {
            if git.remote_exists(name)? {
                bail!("Remote '{}' already exists", name);
            }
            git.add_remote(name, url, push_url)?;
            ui::display_success(&format!("Added remote '{}'", name));
        }
        Command::ConfigGet { key, file } => println!("{}", git.get_config(key, file.as_deref())?),
        Command::ConfigSet { key, value, file } => {
            git.set_config(key, value, file.as_deref())?;
        }
        Command::Submodule { action } => run_submodule_action(action, config, git)?,
        Command::RemoveDir { dir, yes } => {
            if !dir.exists() {
                ui::display_status(&format!("Nothing to remove at {}", dir.display()));
                return Ok(());
            }
            let prompt = format!("Remove {} and everything in it?", dir.display());
            if !*yes && !ui::confirm_action(&prompt)? {
                println!("Operation cancelled by user.");
                return Ok(());
            }
            remove_directory(dir)?;
            ui::display_success(&format!("Removed {}", dir.display()));
        }
        Command::CheckTools { names } => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            if let Some(missing) = first_missing(&names) {
                bail!("{} not found, can't continue", missing);
            }
            ui::display_success(&format!("Found {}", names.join(", ")));
        }
    }
    Ok(())
}

/// Submodules named on the command line, plus the configured ones with `--all`
pub fn resolve_submodules(targets: &SubmoduleTargets, config: &Config) -> Result<Vec<Submodule>> {
    let mut submodules: Vec<Submodule> = targets.dirs.iter().cloned().map(Submodule::from).collect();
    if targets.all {
        for dir in &config.submodules {
            let submodule = Submodule::new(dir.clone());
            if !submodules.contains(&submodule) {
                submodules.push(submodule);
            }
        }
    }
    if submodules.is_empty() {
        bail!("No submodules given (pass directories or --all)");
    }
    Ok(submodules)
}

fn run_submodule_action<R: CommandRunner>(
    action: &SubmoduleAction,
    config: &Config,
    git: &Git<R>,
) -> Result<()> {
    match action {
        SubmoduleAction::Status(targets) => {
            for submodule in resolve_submodules(targets, config)? {
                let state = if git.is_submodule_enabled(&submodule)? {
                    "enabled"
                } else {
                    "disabled"
                };
                println!("{}: {}", submodule.posix_path(), state);
            }
        }
        SubmoduleAction::Enable(targets) => {
            for submodule in resolve_submodules(targets, config)? {
                git.enable_submodule(&submodule)?;
                ui::display_success(&format!("Enabled {}", submodule.posix_path()));
            }
        }
        SubmoduleAction::Update(targets) => {
            let mut failed = Vec::new();
            for submodule in resolve_submodules(targets, config)? {
                if !git.is_submodule_enabled(&submodule)? {
                    ui::display_status(&format!(
                        "Skipping disabled submodule {}",
                        submodule.posix_path()
                    ));
                    continue;
                }
                ui::display_status(&format!("Updating {}", submodule.posix_path()));
                if !git.update_submodule(&submodule) {
                    ui::display_warning(&format!(
                        "Failed to update submodule {}",
                        submodule.posix_path()
                    ));
                    failed.push(submodule.posix_path());
                }
            }
            if !failed.is_empty() {
                bail!("Failed to update submodules: {}", failed.join(", "));
            }
        }
    }
    Ok(())
}

/// Print `err` the way the build scripts expect and return the exit code to use.
///
/// Failed output-capturing commands dump the command line and the captured
/// output. Failed inherited-output commands already showed their output, so
/// only the exit code is propagated.
pub fn report(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MakeUtilsError>() {
        Some(MakeUtilsError::ProcessFailed {
            command,
            code,
            output,
        }) => {
            if let Some(output) = output {
                ui::display_failed_command(command, output);
            }
            *code
        }
        Some(other) => {
            ui::display_error(&other.to_string());
            other.exit_code()
        }
        None => {
            ui::display_error(&format!("{:#}", err));
            1
        }
    }
}
