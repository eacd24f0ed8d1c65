//! Project settings (<config dir>/sweepmesh/settings.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sweepmesh::ColorSpace;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Vertex color space used by recipes that don't set one
    #[serde(default)]
    pub default_color_space: ColorSpace,
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "sweepmesh", "sweepmesh")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Load settings, falling back to defaults when missing or unreadable
pub fn load() -> Settings {
    settings_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

pub fn load_from(path: &Path) -> Settings {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    match toml::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring invalid settings file {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Save settings to the user config dir, returning the path written
pub fn save(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path().context("No config directory available")?;
    save_to(settings, &path)?;
    Ok(path)
}

pub fn save_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {:?}", dir))?;
    }
    let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}
