//! Generation parameters for the swept disc

use glam::Vec3;
use serde::Deserialize;

use crate::color::ColorSpace;
use crate::error::GenerateError;
use crate::gradient::Gradient;

/// Maximum number of output UV channels a sink accepts
pub const MAX_UV_CHANNELS: usize = 8;

/// World axis the cross-section is swept around and extruded along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

/// Orthonormal frame derived from an [`Axis`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Radial direction at phi = 0
    pub x_axis: Vec3,
    /// Radial direction at phi = 90 degrees
    pub y_axis: Vec3,
    /// Sweep and extrusion axis
    pub sweep_axis: Vec3,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Cyclic frame: the two axes following the sweep axis become the radial basis
    pub fn basis(self) -> Basis {
        let a = self.index();
        Basis {
            x_axis: Vec3::AXES[(a + 1) % 3],
            y_axis: Vec3::AXES[(a + 2) % 3],
            sweep_axis: Vec3::AXES[a],
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = GenerateError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(GenerateError::UnknownAxis(other)),
        }
    }
}

/// UV family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvType {
    /// (i / segments_u, j / segments_v)
    #[default]
    Radial,
    /// Position projected onto the radial plane, mapped into the unit square
    TopProjected,
}

impl TryFrom<u8> for UvType {
    type Error = GenerateError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(UvType::Radial),
            1 => Ok(UvType::TopProjected),
            other => Err(GenerateError::UnknownUvType(other)),
        }
    }
}

/// UV component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvAxis {
    #[default]
    U,
    V,
}

impl TryFrom<u8> for UvAxis {
    type Error = GenerateError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(UvAxis::U),
            1 => Ok(UvAxis::V),
            other => Err(GenerateError::UnknownUvAxis(other)),
        }
    }
}

/// Parameters for one disc generation
///
/// Values are used as given: ranges are expected to be validated by whoever
/// authors them. The only guard is [`DiscParams::is_degenerate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscParams {
    /// Radius at V = 0
    pub inner_radius: f32,
    /// Radius at V = 1 (may be smaller than `inner_radius`)
    pub outer_radius: f32,
    /// Offset along the sweep axis at V = 0, falling linearly to 0 at V = 1
    pub extrusion: f32,
    /// Fraction of a full turn swept by U (1.0 = 360 degrees)
    pub angle: f32,
    /// Angular segments (at least 3)
    pub segments_u: u32,
    /// Radial segments (at least 1)
    pub segments_v: u32,
    pub axis: Axis,
    /// Reverse winding and normals
    pub flipped: bool,
    /// Append a mirrored back face
    pub double_sided: bool,
    /// UV family driving the vertex color lookup
    pub vertex_color_uv: UvType,
    /// UV component driving the vertex color lookup
    pub vertex_color_axis: UvAxis,
    pub gradient: Gradient,
    /// Chosen by the caller (recipe or project settings), never read from the disc table
    #[serde(skip)]
    pub color_space: ColorSpace,
    /// UV family for each output channel, 1 to [`MAX_UV_CHANNELS`] entries
    pub uv_channels: Vec<UvType>,
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            inner_radius: 0.0,
            outer_radius: 1.0,
            extrusion: 0.0,
            angle: 1.0,
            segments_u: 32,
            segments_v: 32,
            axis: Axis::Z,
            flipped: false,
            double_sided: false,
            vertex_color_uv: UvType::Radial,
            vertex_color_axis: UvAxis::U,
            gradient: Gradient::default(),
            color_space: ColorSpace::Linear,
            uv_channels: vec![UvType::Radial],
        }
    }
}

impl DiscParams {
    /// Segment counts too small to form a surface; generation is skipped
    pub fn is_degenerate(&self) -> bool {
        self.segments_u < 3 || self.segments_v < 1
    }

    /// Vertices in one ring (same U index)
    pub fn ring_len(&self) -> usize {
        self.segments_v as usize + 1
    }

    pub fn side_vertex_count(&self) -> usize {
        (self.segments_u as usize + 1) * self.ring_len()
    }

    pub fn side_triangle_count(&self) -> usize {
        self.segments_u as usize * self.segments_v as usize * 2
    }

    pub fn side_index_count(&self) -> usize {
        self.side_triangle_count() * 3
    }

    fn sides(&self) -> usize {
        if self.double_sided { 2 } else { 1 }
    }

    pub fn vertex_count(&self) -> usize {
        self.side_vertex_count() * self.sides()
    }

    pub fn triangle_count(&self) -> usize {
        self.side_triangle_count() * self.sides()
    }

    pub fn index_count(&self) -> usize {
        self.side_index_count() * self.sides()
    }

    /// Radius at radial step `j`; goes negative when the interpolation crosses zero
    #[inline]
    pub fn radius_at(&self, j: u32) -> f32 {
        (self.outer_radius - self.inner_radius) * (j as f32 / self.segments_v as f32)
            + self.inner_radius
    }

    /// Scale mapping projected positions into [-1, 1]
    #[inline]
    pub fn projection_extent(&self) -> f32 {
        self.inner_radius.abs().max(self.outer_radius.abs())
    }
}
