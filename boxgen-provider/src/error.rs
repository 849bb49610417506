//! Error types for the generate pipeline.
//!
//! Each variant names the stage that failed and keeps the underlying cause,
//! so callers can report the stage without leaking the cause.

use boxgen_core::error::BoxError;
use thiserror::Error;

/// Errors that can occur while generating and provisioning a box.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to generate Vagrantfile: {0}")]
    Render(#[source] BoxError),

    #[error("Failed to write Vagrantfile: {0}")]
    Write(#[source] BoxError),

    #[error("Failed to start provisioning: {0}")]
    Provision(#[source] BoxError),
}

impl ProviderError {
    /// The message shown to API callers: the stage only, never the cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Render(_) => "Failed to generate Vagrantfile",
            Self::Write(_) => "Failed to write Vagrantfile",
            Self::Provision(_) => "Failed to start provisioning",
        }
    }
}
