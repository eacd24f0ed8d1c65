//! Per-call geometry buffers
//!
//! Allocated at their final size before the kernel runs and dropped when the
//! generation call returns, whichever path it returns through.

use glam::{Vec2, Vec3};

use crate::color::Rgba8;
use crate::params::{DiscParams, UvType};

/// Parallel vertex attribute arrays plus a triangle index list
///
/// The first `side_vertex_count` vertices are the front shell; a double-sided
/// mesh stores its mirrored back shell directly after.
#[derive(Debug, Clone)]
pub struct GeometryBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub radial_uvs: Vec<Vec2>,
    pub projected_uvs: Vec<Vec2>,
    pub colors: Vec<Rgba8>,
    /// Three entries per triangle, always 32-bit here; narrowed on hand-off
    pub indices: Vec<u32>,
    side_vertex_count: usize,
    side_index_count: usize,
}

impl GeometryBuffers {
    /// Zero-filled buffers sized for `params`
    pub fn allocate(params: &DiscParams) -> Self {
        let vertex_count = params.vertex_count();

        Self {
            positions: vec![Vec3::ZERO; vertex_count],
            normals: vec![Vec3::ZERO; vertex_count],
            radial_uvs: vec![Vec2::ZERO; vertex_count],
            projected_uvs: vec![Vec2::ZERO; vertex_count],
            colors: vec![[0; 4]; vertex_count],
            indices: vec![0; params.index_count()],
            side_vertex_count: params.side_vertex_count(),
            side_index_count: params.side_index_count(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn side_vertex_count(&self) -> usize {
        self.side_vertex_count
    }

    pub fn side_index_count(&self) -> usize {
        self.side_index_count
    }

    /// UV buffer for a family
    pub fn uvs(&self, uv_type: UvType) -> &[Vec2] {
        match uv_type {
            UvType::Radial => &self.radial_uvs,
            UvType::TopProjected => &self.projected_uvs,
        }
    }
}
