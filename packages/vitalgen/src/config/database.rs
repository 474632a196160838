use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite file, created on first use
    #[serde(default = "DatabaseConfig::default_path")]
    pub path: PathBuf,
}

impl DatabaseConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from("patients.db")
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        DatabaseConfig { path: path.into() }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: DatabaseConfig::default_path(),
        }
    }
}
