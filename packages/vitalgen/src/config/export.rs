use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_patients_file")]
    pub patients_file: PathBuf,

    #[serde(default = "ExportConfig::default_observations_file")]
    pub observations_file: PathBuf,
}

impl ExportConfig {
    pub fn default_patients_file() -> PathBuf {
        PathBuf::from("patients.json")
    }

    pub fn default_observations_file() -> PathBuf {
        PathBuf::from("observations.json")
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            patients_file: ExportConfig::default_patients_file(),
            observations_file: ExportConfig::default_observations_file(),
        }
    }
}
