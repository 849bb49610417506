//! Vagrant box generation.
//!
//! Turns a [`BoxDescriptor`] into a `Vagrantfile` and hands the working
//! directory to a [`Provisioner`] that brings the machine up.

// Standard library
use std::path::Path;

// External crates
use boxgen_core::error::Result;

pub mod descriptor;
pub mod error;
pub mod generator;
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;
pub mod vagrant;

pub use boxgen_core::error::BoxError;
pub use descriptor::BoxDescriptor;
pub use error::ProviderError;
pub use generator::Generator;
pub use vagrant::{VagrantProvisioner, VAGRANTFILE_NAME};

/// Brings up a machine from the configuration already written to `work_dir`.
pub trait Provisioner: Send + Sync {
    /// Get the name of the provisioner (e.g., "vagrant").
    fn name(&self) -> &'static str;

    /// Run the provisioning step to completion, blocking the caller.
    fn provision(&self, work_dir: &Path) -> Result<()>;

    /// Whether the underlying tool can be found. Providers that have nothing
    /// to look up report `true`.
    fn is_available(&self) -> bool {
        true
    }
}
