use std::path::PathBuf;
use std::sync::Arc;

use boxgen_provider::{Generator, Provisioner, VagrantProvisioner};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub generator: Generator,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_provisioner(config.work_dir.clone(), Arc::new(VagrantProvisioner::new()))
    }

    pub fn with_provisioner(work_dir: PathBuf, provisioner: Arc<dyn Provisioner>) -> Self {
        Self {
            generator: Generator::new(work_dir, provisioner),
        }
    }
}
