//! Swept disc geometry kernel
//!
//! The surface is a `(segments_u + 1) x (segments_v + 1)` vertex grid. U walks
//! the sweep angle, V walks from the inner radius to the outer radius while
//! the extrusion falls off to zero. Each U column is a "ring"; rings are
//! independent of each other, but a ring's normals need its own positions.
//!
//! Vertex layout: `index = i * (segments_v + 1) + j`, front shell first, then
//! (double-sided only) the back shell at `index + side_vertex_count`.

mod ring;
mod triangles;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::buffers::GeometryBuffers;
use crate::lut::GradientLut;
use crate::params::DiscParams;

pub use triangles::populate_quad;

use ring::Ring;

/// Run the kernel into freshly allocated buffers
///
/// Returns `None` when the segment counts are degenerate.
pub fn generate_buffers(params: &DiscParams, lut: &GradientLut) -> Option<GeometryBuffers> {
    if params.is_degenerate() {
        debug!(
            segments_u = params.segments_u,
            segments_v = params.segments_v,
            "disc segments below minimum, nothing to build"
        );
        return None;
    }

    let basis = params.axis.basis();
    let mut buffers = GeometryBuffers::allocate(params);
    let ring_len = params.ring_len();

    for i in 0..=params.segments_u {
        let ring = Ring::new(params, &basis, i);
        let offset = i as usize * ring_len;

        ring.fill_vertices(params, &basis, lut, &mut buffers, offset);
        ring.fill_normals(params, &mut buffers, offset);
    }

    if params.double_sided {
        mirror_back_shell(&mut buffers);
    }

    triangles::triangulate(params, &mut buffers);

    Some(buffers)
}

/// Copy the front shell's attributes into the back half
///
/// Normals are excluded: the ring pass already wrote their negation.
fn mirror_back_shell(buffers: &mut GeometryBuffers) {
    let side = buffers.side_vertex_count();

    buffers.positions.copy_within(0..side, side);
    buffers.radial_uvs.copy_within(0..side, side);
    buffers.projected_uvs.copy_within(0..side, side);
    buffers.colors.copy_within(0..side, side);
}
