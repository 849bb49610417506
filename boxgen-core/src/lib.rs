pub mod command_stream;
pub mod error;
pub mod file_system;

pub use error::{BoxError, Result};
