use std::path::PathBuf;
use std::sync::Arc;

use boxgen_core::file_system::write_file;
use tracing::{error, info};

use crate::error::ProviderError;
use crate::vagrant::{render_vagrantfile, VAGRANTFILE_NAME};
use crate::{BoxDescriptor, Provisioner};

/// Render, write, provision: one pass per descriptor.
///
/// Every call writes the same `Vagrantfile` path with no locking, so
/// concurrent calls race and the last writer wins. A failed stage does not
/// undo the ones before it.
#[derive(Clone)]
pub struct Generator {
    work_dir: PathBuf,
    provisioner: Arc<dyn Provisioner>,
}

impl Generator {
    pub fn new(work_dir: impl Into<PathBuf>, provisioner: Arc<dyn Provisioner>) -> Self {
        Self {
            work_dir: work_dir.into(),
            provisioner,
        }
    }

    pub fn vagrantfile_path(&self) -> PathBuf {
        self.work_dir.join(VAGRANTFILE_NAME)
    }

    pub fn provisioner(&self) -> &dyn Provisioner {
        self.provisioner.as_ref()
    }

    /// Blocks until the provisioner returns. Returns the path written.
    pub fn generate(&self, descriptor: &BoxDescriptor) -> Result<PathBuf, ProviderError> {
        let content = render_vagrantfile(descriptor).map_err(|e| {
            error!(error = %e, "rendering Vagrantfile failed");
            ProviderError::Render(e)
        })?;

        let path = self.vagrantfile_path();
        write_file(&path, &content).map_err(|e| {
            error!(error = %e, path = %path.display(), "writing Vagrantfile failed");
            ProviderError::Write(e)
        })?;
        info!(path = %path.display(), "Vagrantfile written");

        self.provisioner.provision(&self.work_dir).map_err(|e| {
            error!(
                error = %e,
                provisioner = self.provisioner.name(),
                "provisioning failed"
            );
            ProviderError::Provision(e)
        })?;
        info!(provisioner = self.provisioner.name(), "provisioning finished");

        Ok(path)
    }
}
