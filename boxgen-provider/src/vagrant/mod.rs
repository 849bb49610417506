mod provisioner;
mod render;

pub use provisioner::VagrantProvisioner;
pub use render::render_vagrantfile;

/// File name Vagrant looks for in its working directory.
pub const VAGRANTFILE_NAME: &str = "Vagrantfile";
