//! sweepmesh - procedural swept disc generator
//!
//! Turns a recipe (recipe.toml) into an OBJ or packed binary mesh.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sweepmesh::ColorSpace;
use sweepmesh_cli::pipeline::{self, OutputFormat};
use sweepmesh_cli::{load_recipe, settings};

#[derive(Parser)]
#[command(name = "sweepmesh")]
#[command(about = "Procedural swept disc mesh generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mesh from a recipe
    Generate {
        /// Path to recipe.toml
        recipe: PathBuf,

        /// Output file (defaults to the recipe path with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Obj)]
        format: OutputFormat,
    },

    /// Validate a recipe and report mesh statistics without writing
    Check {
        /// Path to recipe.toml
        recipe: PathBuf,
    },

    /// Show or change project settings
    Settings {
        /// Default vertex color space for recipes that don't set one
        #[arg(long, value_enum)]
        color_space: Option<ColorSpaceArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorSpaceArg {
    Linear,
    Gamma,
}

impl From<ColorSpaceArg> for ColorSpace {
    fn from(arg: ColorSpaceArg) -> Self {
        match arg {
            ColorSpaceArg::Linear => ColorSpace::Linear,
            ColorSpaceArg::Gamma => ColorSpace::Gamma,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            recipe: recipe_path,
            output,
            format,
        } => {
            let recipe = load_recipe(&recipe_path)?;
            let settings = settings::load();
            let output = output.unwrap_or_else(|| pipeline::default_output(&recipe_path, format));
            pipeline::generate_to_file(&recipe, &settings, &output, format)?;
        }

        Commands::Check {
            recipe: recipe_path,
        } => {
            tracing::info!("Checking recipe {:?}", recipe_path);
            let recipe = load_recipe(&recipe_path)?;
            let settings = settings::load();
            match pipeline::build_mesh(&recipe, &settings)? {
                Some((_, stats)) => tracing::info!(
                    "Recipe is valid: {} vertices, {} triangles, {:?} indices, {} UV channel(s)",
                    stats.vertex_count,
                    stats.triangle_count,
                    stats.index_format,
                    stats.uv_channels
                ),
                None => tracing::warn!("Recipe {:?} produces no geometry", recipe_path),
            }
        }

        Commands::Settings { color_space } => {
            let mut current = settings::load();
            if let Some(color_space) = color_space {
                current.default_color_space = color_space.into();
                let path = settings::save(&current)?;
                tracing::info!("Saved settings to {:?}", path);
            }
            println!("default_color_space = {:?}", current.default_color_space);
        }
    }

    Ok(())
}
