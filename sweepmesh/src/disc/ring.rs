//! Per-ring vertex and normal passes

use glam::{Vec2, Vec3};

use crate::buffers::GeometryBuffers;
use crate::lut::GradientLut;
use crate::params::{Basis, DiscParams, UvAxis, UvType};

/// One U column of the grid
pub(super) struct Ring {
    /// i / segments_u
    u: f32,
    /// Direction from the sweep axis towards the outer edge
    radial_dir: Vec3,
    /// 90 degree rotation of `radial_dir` within the radial plane
    tangent: Vec3,
}

impl Ring {
    pub(super) fn new(params: &DiscParams, basis: &Basis, i: u32) -> Self {
        let u = i as f32 / params.segments_u as f32;
        let phi = 2.0 * std::f32::consts::PI * params.angle * u;
        let (sin_phi, cos_phi) = phi.sin_cos();

        Self {
            u,
            radial_dir: cos_phi * basis.x_axis + sin_phi * basis.y_axis,
            tangent: sin_phi * basis.x_axis - cos_phi * basis.y_axis,
        }
    }

    /// Positions, both UV families and vertex colors for every vertex of the ring
    pub(super) fn fill_vertices(
        &self,
        params: &DiscParams,
        basis: &Basis,
        lut: &GradientLut,
        buffers: &mut GeometryBuffers,
        offset: usize,
    ) {
        let extent = params.projection_extent();

        for j in 0..=params.segments_v {
            let idx = offset + j as usize;
            let v = j as f32 / params.segments_v as f32;

            let radius = params.radius_at(j);
            let extrusion = params.extrusion * (1.0 - v);
            let position = self.radial_dir * radius + basis.sweep_axis * extrusion;

            let projected = Vec2::new(position.dot(basis.x_axis), position.dot(basis.y_axis));
            let projected = projected / extent / 2.0 + 0.5;
            let radial = Vec2::new(self.u, v);

            buffers.positions[idx] = position;
            buffers.projected_uvs[idx] = projected;
            buffers.radial_uvs[idx] = radial;
            buffers.colors[idx] = lut.sample(color_source(
                params.vertex_color_uv,
                params.vertex_color_axis,
                radial,
                projected,
            ));
        }
    }

    /// Normals for the ring; requires `fill_vertices` to have run first
    ///
    /// Where the radius has crossed below zero the cross-section folds over
    /// itself (an X shape), so the normal is flipped there. Vertices right at
    /// the crossing get whichever side they land on; that artifact is accepted.
    pub(super) fn fill_normals(&self, params: &DiscParams, buffers: &mut GeometryBuffers, offset: usize) {
        let binormal = (buffers.positions[offset + 1] - buffers.positions[offset]).normalize_or_zero();
        let base = self.tangent.cross(binormal).normalize_or_zero();
        let side = buffers.side_vertex_count();

        for j in 0..=params.segments_v {
            let idx = offset + j as usize;

            let mut normal = base;
            if params.flipped {
                normal = -normal;
            }
            if params.radius_at(j) < 0.0 {
                normal = -normal;
            }

            buffers.normals[idx] = normal;
            if params.double_sided {
                buffers.normals[idx + side] = -normal;
            }
        }
    }
}

/// Scalar fed into the gradient lookup
#[inline]
pub(super) fn color_source(uv_type: UvType, axis: UvAxis, radial: Vec2, projected: Vec2) -> f32 {
    let uv = match uv_type {
        UvType::Radial => radial,
        UvType::TopProjected => projected,
    };
    match axis {
        UvAxis::U => uv.x,
        UvAxis::V => uv.y,
    }
}
