//! Runtime configuration for the roster app
//!
//! Chooses which repository backend the service is wired with. The file is
//! optional: without one the app runs on the seeded in-memory backend.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Which concrete repository to wire in at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Reference in-memory collection, seeded with the demo roster.
    #[default]
    Memory,
    /// External database adapter (placeholder).
    Database,
}

/// Application configuration (JSON file).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Repository backend to use.
    #[serde(default)]
    pub backend: Backend,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
