//! Index buffer construction

use crate::buffers::GeometryBuffers;
use crate::params::DiscParams;

/// Write the two triangles of one grid cell into `out` (6 slots)
///
/// `a`/`b` are consecutive vertices of ring `i`, `c`/`d` the same radial steps
/// of ring `i + 1`. This table is the mesh's front-face convention.
#[inline]
pub fn populate_quad(out: &mut [u32], [a, b, c, d]: [u32; 4], flip: bool) {
    let quad = if flip {
        [a, b, c, c, b, d]
    } else {
        [a, c, b, c, d, b]
    };
    out.copy_from_slice(&quad);
}

/// Fill the front shell's cells, then the back shell's with opposite winding
pub(super) fn triangulate(params: &DiscParams, buffers: &mut GeometryBuffers) {
    let segments_v = params.segments_v as usize;
    let ring_len = params.ring_len() as u32;
    let back_offset = buffers.side_vertex_count() as u32;
    let side_index_count = buffers.side_index_count();
    let (front, back) = buffers.indices.split_at_mut(side_index_count);

    for i in 0..params.segments_u as usize {
        let ring_origin = (i * (segments_v + 1)) as u32;

        for j in 0..segments_v {
            let slot = (segments_v * i + j) * 6;
            let a = ring_origin + j as u32;
            let b = a + 1;
            let c = a + ring_len;
            let d = c + 1;

            populate_quad(&mut front[slot..slot + 6], [a, b, c, d], !params.flipped);

            if params.double_sided {
                let cell = [a, b, c, d].map(|v| v + back_offset);
                populate_quad(&mut back[slot..slot + 6], cell, params.flipped);
            }
        }
    }
}
