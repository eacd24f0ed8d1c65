//! Generation entry point: LUT, kernel, and hand-off to a mesh sink

use tracing::debug;

use crate::buffers::GeometryBuffers;
use crate::disc;
use crate::error::GenerateError;
use crate::lut::GradientLut;
use crate::params::{DiscParams, MAX_UV_CHANNELS};
use crate::sink::{IndexBuffer, IndexFormat, MeshSink, Topology};

/// Summary of what was handed to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub index_format: IndexFormat,
    pub uv_channels: usize,
}

/// Generate a disc into `sink`
///
/// Returns `Ok(None)` without touching the sink when the segment counts are
/// below the minimum (3 around, 1 across).
///
/// # Errors
///
/// Returns [`GenerateError::UvChannelCount`] if `params.uv_channels` is empty
/// or longer than [`MAX_UV_CHANNELS`]. The sink is left untouched.
pub fn generate<S: MeshSink + ?Sized>(
    params: &DiscParams,
    sink: &mut S,
) -> Result<Option<MeshStats>, GenerateError> {
    let uv_channels = params.uv_channels.len();
    if uv_channels == 0 || uv_channels > MAX_UV_CHANNELS {
        return Err(GenerateError::UvChannelCount(uv_channels));
    }

    let lut = GradientLut::build(&params.gradient, params.color_space);
    let Some(buffers) = disc::generate_buffers(params, &lut) else {
        return Ok(None);
    };

    let stats = submit(params, buffers, sink);
    debug!(
        vertices = stats.vertex_count,
        triangles = stats.triangle_count,
        index_format = ?stats.index_format,
        uv_channels = stats.uv_channels,
        "disc generated"
    );

    Ok(Some(stats))
}

/// Hand finished buffers to the sink; consumes them
fn submit<S: MeshSink + ?Sized>(params: &DiscParams, buffers: GeometryBuffers, sink: &mut S) -> MeshStats {
    let index_format = IndexFormat::for_vertex_count(buffers.vertex_count());
    let stats = MeshStats {
        vertex_count: buffers.vertex_count(),
        triangle_count: buffers.triangle_count(),
        index_format,
        uv_channels: params.uv_channels.len(),
    };

    sink.clear();
    sink.set_index_format(index_format);
    sink.set_positions(&buffers.positions);
    sink.set_normals(&buffers.normals);
    for (channel, uv_type) in params.uv_channels.iter().enumerate() {
        sink.set_uvs(channel, buffers.uvs(*uv_type));
    }
    sink.set_colors(&buffers.colors);
    sink.set_indices(
        IndexBuffer::from_u32(buffers.indices, index_format),
        Topology::Triangles,
    );

    stats
}
