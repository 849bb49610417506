use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxError {
    Render(String),
    Io(#[from] std::io::Error),
    Command(String),
    Dependency(String),
}

impl Display for BoxError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BoxError::Render(s) => write!(f, "Template error: {}", s),
            BoxError::Io(e) => write!(f, "I/O error: {}", e),
            BoxError::Command(s) => write!(f, "Command failed: {}", s),
            BoxError::Dependency(s) => {
                write!(f, "Dependency not found: {}\n\n", s)?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Install it and make sure it is on PATH\n")?;
                write!(f, "  • Verify: which {}", s)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;
