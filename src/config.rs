use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Render settings, optionally loaded from a TOML file. Missing keys fall
/// back to their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub samples: usize,
    pub max_bounces: u32,
    pub gamma: f32,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            samples: 128,
            max_bounces: 64,
            gamma: 2.2,
            output: PathBuf::from("output.png"),
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
