//! Procedural swept disc/grid mesh generation
//!
//! Builds an annulus (or fan, when the inner radius is zero) swept through an
//! angular range around one of the world axes, optionally extruded along that
//! axis and mirrored into a double-sided shell. Every vertex gets an analytic
//! normal, a radial UV, a top-projected UV and a vertex color sampled from a
//! baked gradient lookup table.
//!
//! # Example
//! ```no_run
//! use sweepmesh::*;
//!
//! let params = DiscParams {
//!     inner_radius: 0.5,
//!     outer_radius: 1.0,
//!     segments_u: 48,
//!     segments_v: 4,
//!     gradient: Gradient::new(vec![
//!         GradientKey::new(0.0, Color::rgb(1.0, 0.2, 0.0)),
//!         GradientKey::new(1.0, Color::rgb(0.0, 0.2, 1.0)),
//!     ]),
//!     uv_channels: vec![UvType::Radial, UvType::TopProjected],
//!     ..Default::default()
//! };
//!
//! let mut mesh = MeshData::default();
//! if let Some(stats) = generate(&params, &mut mesh)? {
//!     println!("{} vertices, {} triangles", stats.vertex_count, stats.triangle_count);
//!     write_obj(&mesh, "disc.obj".as_ref(), "disc")?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod buffers;
pub mod color;
pub mod disc;
pub mod error;
pub mod export;
pub mod gradient;
pub mod lut;
#[cfg(feature = "packed")]
pub mod packing;
pub mod params;
pub mod sink;

pub use assembler::{MeshStats, generate};
pub use buffers::GeometryBuffers;
pub use color::{Color, ColorSpace, Rgba8};
pub use error::GenerateError;
pub use export::write_obj;
pub use gradient::{Gradient, GradientKey};
pub use lut::{GradientLut, LUT_SIZE};
#[cfg(feature = "packed")]
pub use packing::{PackedMesh, write_packed};
pub use params::{Axis, Basis, DiscParams, MAX_UV_CHANNELS, UvAxis, UvType};
pub use sink::{IndexBuffer, IndexFormat, MeshData, MeshSink, Topology};
