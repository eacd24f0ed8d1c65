//! GPU vertex packing
//!
//! Interleaved layout, 20 bytes per vertex:
//! - Position: Float16x4 (w = 1.0), 8 bytes
//! - UV channel 0: Unorm16x2, 4 bytes
//! - Color: Unorm8x4, 4 bytes
//! - Normal: octahedral snorm16x2 in a u32, 4 bytes
//!
//! Only built with the `packed` feature.

use bytemuck::cast_slice;
use glam::Vec3;
use half::f16;
use std::io::{self, Write};

use crate::sink::{IndexBuffer, MeshData};

/// Bytes per packed vertex
pub const PACKED_STRIDE: usize = 20;

/// Packed mesh file magic
pub const PACKED_MAGIC: [u8; 4] = *b"SWMH";
/// Packed mesh file version
pub const PACKED_VERSION: u16 = 1;
/// Packed header size in bytes
pub const PACKED_HEADER_SIZE: usize = 20;

/// Pack a position to Float16x4 with w = 1.0
#[inline]
pub fn pack_position_f16(p: [f32; 3]) -> [f16; 4] {
    [
        f16::from_f32(p[0]),
        f16::from_f32(p[1]),
        f16::from_f32(p[2]),
        f16::from_f32(1.0),
    ]
}

/// Pack a UV in [0, 1] to Unorm16x2 (clamped)
#[inline]
pub fn pack_uv_unorm16(uv: [f32; 2]) -> [u16; 2] {
    [
        (uv[0].clamp(0.0, 1.0) * 65535.0).round() as u16,
        (uv[1].clamp(0.0, 1.0) * 65535.0).round() as u16,
    ]
}

#[inline]
fn f32_to_snorm16(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// Direction to octahedral coordinates in [-1, 1]^2; zero maps to (0, 0)
#[inline]
pub fn encode_octahedral(dir: Vec3) -> (f32, f32) {
    let dir = dir.normalize_or_zero();
    let l1_norm = dir.x.abs() + dir.y.abs() + dir.z.abs();
    if l1_norm == 0.0 {
        return (0.0, 0.0);
    }

    let u = dir.x / l1_norm;
    let v = dir.y / l1_norm;
    if dir.z >= 0.0 {
        return (u, v);
    }

    // Lower hemisphere folds over the diagonals
    (
        (1.0 - v.abs()) * u.signum(),
        (1.0 - u.abs()) * v.signum(),
    )
}

/// Inverse of [`encode_octahedral`]
#[inline]
pub fn decode_octahedral(u: f32, v: f32) -> Vec3 {
    let z = 1.0 - u.abs() - v.abs();
    let dir = if z >= 0.0 {
        Vec3::new(u, v, z)
    } else {
        Vec3::new((1.0 - v.abs()) * u.signum(), (1.0 - u.abs()) * v.signum(), z)
    };
    dir.normalize_or_zero()
}

/// Pack a normal as two snorm16 octahedral coordinates (u in the low half)
#[inline]
pub fn pack_normal_octahedral(n: [f32; 3]) -> u32 {
    let (u, v) = encode_octahedral(Vec3::from_array(n));
    (f32_to_snorm16(u) as u16 as u32) | ((f32_to_snorm16(v) as u16 as u32) << 16)
}

#[inline]
pub fn unpack_normal_octahedral(packed: u32) -> Vec3 {
    let u = (packed & 0xFFFF) as u16 as i16 as f32 / 32767.0;
    let v = (packed >> 16) as u16 as i16 as f32 / 32767.0;
    decode_octahedral(u, v)
}

/// Mesh in GPU upload layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedMesh {
    pub vertex_count: u32,
    /// Interleaved vertices, [`PACKED_STRIDE`] bytes each
    pub vertex_data: Vec<u8>,
    pub indices: IndexBuffer,
}

impl PackedMesh {
    /// Pack an unpacked mesh
    ///
    /// Only UV channel 0 is kept; a mesh without UVs packs zeros. Missing
    /// colors pack as opaque white.
    pub fn from_mesh(mesh: &MeshData) -> Self {
        let uvs = mesh.uv_channel(0).unwrap_or(&[]);
        let mut vertex_data = Vec::with_capacity(mesh.vertex_count() * PACKED_STRIDE);

        for (i, &position) in mesh.positions.iter().enumerate() {
            vertex_data.extend_from_slice(cast_slice(&pack_position_f16(position)));

            let uv = uvs.get(i).copied().unwrap_or([0.0, 0.0]);
            vertex_data.extend_from_slice(cast_slice(&pack_uv_unorm16(uv)));

            let color = mesh.colors.get(i).copied().unwrap_or([255; 4]);
            vertex_data.extend_from_slice(&color);

            let normal = mesh.normals.get(i).copied().unwrap_or([0.0, 0.0, 0.0]);
            vertex_data.extend_from_slice(&pack_normal_octahedral(normal).to_le_bytes());
        }

        Self {
            vertex_count: mesh.vertex_count() as u32,
            vertex_data,
            indices: mesh.indices.clone(),
        }
    }
}

/// Write a packed mesh
///
/// Header (little-endian, 20 bytes): magic, version u16, stride u16,
/// vertex count u32, index count u32, index width in bytes u8, 3 bytes padding.
/// Vertex data and index data follow.
pub fn write_packed<W: Write>(mesh: &PackedMesh, w: &mut W) -> io::Result<()> {
    w.write_all(&PACKED_MAGIC)?;
    w.write_all(&PACKED_VERSION.to_le_bytes())?;
    w.write_all(&(PACKED_STRIDE as u16).to_le_bytes())?;
    w.write_all(&mesh.vertex_count.to_le_bytes())?;
    w.write_all(&(mesh.indices.len() as u32).to_le_bytes())?;
    w.write_all(&[mesh.indices.format().byte_width() as u8, 0, 0, 0])?;
    w.write_all(&mesh.vertex_data)?;
    w.write_all(&mesh.indices.to_le_bytes())?;
    Ok(())
}
