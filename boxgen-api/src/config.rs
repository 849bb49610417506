use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory holding the generated Vagrantfile; `vagrant up` runs here too.
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
}

fn default_bind_addr() -> String {
    std::env::var("BOXGEN_BIND").unwrap_or_else(|_| "0.0.0.0:8090".to_string())
}

fn default_work_dir() -> PathBuf {
    std::env::var("BOXGEN_WORK_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            work_dir: default_work_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
