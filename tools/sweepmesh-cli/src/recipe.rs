//! Recipe files (recipe.toml)
//!
//! ```toml
//! generator = "disc"
//! name = "halo"
//! color_space = "gamma"   # optional, falls back to project settings
//!
//! [disc]
//! inner_radius = 0.5
//! segments_u = 64
//! uv_channels = ["radial", "top_projected"]
//! gradient = [
//!     { position = 0.0, color = [1.0, 0.4, 0.0] },
//!     { position = 1.0, color = [0.2, 0.0, 0.6, 0.0] },
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use sweepmesh::{ColorSpace, DiscParams};

use crate::settings::Settings;

/// Mesh generator a recipe asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Disc,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub generator: GeneratorKind,
    /// Object name written into exports (defaults to the file stem)
    #[serde(default)]
    pub name: Option<String>,
    /// Overrides the project default vertex color space
    #[serde(default)]
    pub color_space: Option<ColorSpace>,
    #[serde(default)]
    pub disc: DiscParams,
}

impl Recipe {
    /// Disc parameters with the color space resolved against project settings
    pub fn disc_params(&self, settings: &Settings) -> DiscParams {
        DiscParams {
            color_space: self.color_space.unwrap_or(settings.default_color_space),
            ..self.disc.clone()
        }
    }
}

/// Parse a recipe from TOML text
pub fn parse_recipe(text: &str) -> Result<Recipe> {
    toml::from_str(text).context("Invalid recipe")
}

/// Load and parse a recipe file
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read recipe: {:?}", path))?;
    let mut recipe = parse_recipe(&text).with_context(|| format!("In {:?}", path))?;

    if recipe.name.is_none() {
        recipe.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    }

    Ok(recipe)
}
