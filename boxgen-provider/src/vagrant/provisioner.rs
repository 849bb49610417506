use std::path::Path;

use boxgen_core::command_stream::{is_tool_installed, run_command_inherited};
use boxgen_core::error::Result;
use tracing::info;

use crate::Provisioner;

const VAGRANT_BINARY: &str = "vagrant";
const UP_ARGS: &[&str] = &["up"];

/// Runs `vagrant up` against the Vagrantfile in the working directory.
///
/// Vagrant's own output goes straight to this process's stdout/stderr.
#[derive(Debug, Clone)]
pub struct VagrantProvisioner {
    program: String,
    args: Vec<String>,
}

impl Default for VagrantProvisioner {
    fn default() -> Self {
        Self::with_command(VAGRANT_BINARY, UP_ARGS)
    }
}

impl VagrantProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different binary in place of `vagrant up`.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Provisioner for VagrantProvisioner {
    fn name(&self) -> &'static str {
        "vagrant"
    }

    fn provision(&self, work_dir: &Path) -> Result<()> {
        info!(program = %self.program, "bringing box up");
        run_command_inherited(&self.program, &self.args, work_dir)
    }

    fn is_available(&self) -> bool {
        is_tool_installed(&self.program)
    }
}
