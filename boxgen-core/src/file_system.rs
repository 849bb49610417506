//! File helpers for generated provider configuration.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Create or truncate `path` and write `content` to it.
///
/// The handle is dropped on every return path, including a failed write.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
