use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use boxgen_core::error::{BoxError, Result};

use crate::Provisioner;

/// Provisioner that records calls instead of running anything.
#[derive(Debug, Default)]
pub struct MockProvisioner {
    invocations: AtomicUsize,
    fail: bool,
}

impl MockProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose every call fails as if the tool exited non-zero.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl Provisioner for MockProvisioner {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn provision(&self, _work_dir: &Path) -> Result<()> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BoxError::Command("mock provisioner failure".to_string()));
        }
        Ok(())
    }
}
