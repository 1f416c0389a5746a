use crate::error::{MakeUtilsError, Result};
use crate::process::{CommandRunner, ErrorMode, Invocation, SPAWN_FAILURE_CODE};
use crate::ui;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Runs invocations as real child processes
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    current_dir: Option<PathBuf>,
}

impl SystemRunner {
    /// Runner that spawns children in the caller's current directory
    pub fn new() -> Self {
        SystemRunner { current_dir: None }
    }

    /// Runner that spawns every child in `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        SystemRunner {
            current_dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).envs(&invocation.env);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_failed(invocation: &Invocation, source: io::Error) -> MakeUtilsError {
        MakeUtilsError::Spawn {
            command: invocation.command(),
            source,
        }
    }
}

// Keeps our own prints and the child's inherited output in order.
fn flush_std_streams() {
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

impl CommandRunner for SystemRunner {
    fn call(&self, invocation: &Invocation) -> Result<i32> {
        if !invocation.silent {
            ui::display_command(&invocation.command_line());
        }
        flush_std_streams();

        let mut cmd = self.command(invocation);
        if invocation.silent {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = match cmd.status() {
            Ok(status) => status,
            Err(_) if invocation.mode == ErrorMode::Soft => return Ok(SPAWN_FAILURE_CODE),
            Err(e) => return Err(Self::spawn_failed(invocation, e)),
        };

        invocation.finish_call(exit_code(status))
    }

    fn check_output(&self, invocation: &Invocation) -> Result<String> {
        flush_std_streams();

        let mut cmd = self.command(invocation);
        cmd.stdin(Stdio::null());
        if invocation.inherit_stderr {
            cmd.stderr(Stdio::inherit());
        }

        let output = match cmd.output() {
            Ok(output) => output,
            Err(_) if invocation.mode == ErrorMode::Soft => return Ok(String::new()),
            Err(e) => return Err(Self::spawn_failed(invocation, e)),
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        invocation.finish_output(exit_code(output.status), &text)
    }
}
