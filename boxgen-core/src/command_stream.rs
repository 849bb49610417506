// Standard library
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::Path;

// External crates
use crate::error::{BoxError, Result};
use duct::cmd;
use tracing::{debug, info};
use which::which;

fn display_command<A: AsRef<OsStr>>(command: &str, args: &[A]) -> String {
    let mut full_command = command.to_string();
    for arg in args {
        full_command.push(' ');
        full_command.push_str(&arg.as_ref().to_string_lossy());
    }
    full_command
}

/// Run a command to completion inside `dir`, blocking the calling thread.
///
/// The child inherits this process's stdout and stderr, so its output lands
/// wherever ours goes and is never captured. A missing binary maps to
/// `BoxError::Dependency`; a failed spawn or a non-zero exit maps to
/// `BoxError::Command`.
pub fn run_command_inherited<A: AsRef<OsStr>>(command: &str, args: &[A], dir: &Path) -> Result<()> {
    let full_command = display_command(command, args);
    info!(command = %full_command, dir = %dir.display(), "running command");

    let output = cmd(command, args)
        .dir(dir)
        .unchecked()
        .run()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => BoxError::Dependency(command.to_string()),
            _ => BoxError::Command(format!("failed to start '{}': {}", full_command, e)),
        })?;

    if !output.status.success() {
        return Err(BoxError::Command(format!(
            "'{}' exited with code {:?}",
            full_command,
            output.status.code()
        )));
    }

    debug!(command = %full_command, "command finished");
    Ok(())
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}
