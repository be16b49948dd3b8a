//! JSON configuration for the demo tooling.
use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    /// Input image path.
    pub input: PathBuf,
    /// Detector parameters; omitted fields fall back to defaults.
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: DetectOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    /// Where the full detection report is written as pretty JSON.
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
