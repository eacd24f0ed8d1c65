//! sweepmesh-cli library
//!
//! Recipe loading, project settings, and the generate/export pipeline used by
//! the `sweepmesh` binary.

pub mod pipeline;
pub mod recipe;
pub mod settings;

pub use pipeline::{OutputFormat, generate_to_file};
pub use recipe::{GeneratorKind, Recipe, load_recipe};
pub use settings::Settings;
