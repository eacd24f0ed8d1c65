//! Recipe -> mesh -> file

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use sweepmesh::{MeshData, MeshStats, PackedMesh, generate, write_obj, write_packed};

use crate::recipe::{GeneratorKind, Recipe};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Wavefront OBJ with vertex colors
    #[default]
    Obj,
    /// Quantized binary (.swmesh)
    Packed,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Obj => "obj",
            OutputFormat::Packed => "swmesh",
        }
    }
}

/// Run the recipe's generator into a fresh [`MeshData`]
///
/// Returns `Ok(None)` when the parameters describe an empty surface.
pub fn build_mesh(recipe: &Recipe, settings: &Settings) -> Result<Option<(MeshData, MeshStats)>> {
    match recipe.generator {
        GeneratorKind::Disc => {
            let params = recipe.disc_params(settings);
            let mut mesh = MeshData::default();
            let stats = generate(&params, &mut mesh).context("Invalid disc parameters")?;
            Ok(stats.map(|stats| (mesh, stats)))
        }
    }
}

/// Default output path: the recipe path with the format's extension
pub fn default_output(recipe_path: &Path, format: OutputFormat) -> PathBuf {
    recipe_path.with_extension(format.extension())
}

/// Generate a recipe and write it to `output`
///
/// A degenerate recipe logs a warning and writes nothing.
pub fn generate_to_file(
    recipe: &Recipe,
    settings: &Settings,
    output: &Path,
    format: OutputFormat,
) -> Result<Option<MeshStats>> {
    let Some((mesh, stats)) = build_mesh(recipe, settings)? else {
        tracing::warn!(
            "Recipe {:?} produces no geometry, nothing written",
            recipe.name.as_deref().unwrap_or("mesh")
        );
        return Ok(None);
    };

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    match format {
        OutputFormat::Obj => {
            let name = recipe.name.as_deref().unwrap_or("mesh");
            write_obj(&mesh, output, name)
                .with_context(|| format!("Failed to write OBJ: {:?}", output))?;
        }
        OutputFormat::Packed => {
            let packed = PackedMesh::from_mesh(&mesh);
            let file = File::create(output)
                .with_context(|| format!("Failed to create {:?}", output))?;
            let mut w = BufWriter::new(file);
            write_packed(&packed, &mut w)
                .and_then(|_| w.flush())
                .with_context(|| format!("Failed to write packed mesh: {:?}", output))?;
        }
    }

    tracing::info!(
        "Wrote {:?}: {} vertices, {} triangles, {:?} indices",
        output,
        stats.vertex_count,
        stats.triangle_count,
        stats.index_format
    );

    Ok(Some(stats))
}
