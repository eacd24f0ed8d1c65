//! Mesh sink interface and the unpacked in-memory sink
//!
//! A sink is whatever ends up owning the generated mesh: a host engine's mesh
//! object, an exporter, or [`MeshData`]. The assembler calls it in a fixed
//! order: `clear`, `set_index_format`, `set_positions`, `set_normals`,
//! `set_uvs` once per channel, `set_colors`, `set_indices`.

use glam::{Vec2, Vec3};

use crate::color::Rgba8;

/// Width of the index buffer handed to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexFormat {
    #[default]
    U16,
    U32,
}

impl IndexFormat {
    /// 16-bit while every vertex index fits, 32-bit beyond that
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= u16::MAX as usize {
            IndexFormat::U16
        } else {
            IndexFormat::U32
        }
    }

    pub fn byte_width(self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }
}

/// Primitive topology of the index list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    #[default]
    Triangles,
}

/// Index list in its final width
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Default for IndexBuffer {
    fn default() -> Self {
        IndexBuffer::U16(Vec::new())
    }
}

impl IndexBuffer {
    /// Narrow 32-bit indices to `format`
    ///
    /// Callers pick `format` with [`IndexFormat::for_vertex_count`], so every
    /// index already fits.
    pub fn from_u32(indices: Vec<u32>, format: IndexFormat) -> Self {
        match format {
            IndexFormat::U16 => IndexBuffer::U16(indices.into_iter().map(|i| i as u16).collect()),
            IndexFormat::U32 => IndexBuffer::U32(indices),
        }
    }

    pub fn format(&self) -> IndexFormat {
        match self {
            IndexBuffer::U16(_) => IndexFormat::U16,
            IndexBuffer::U32(_) => IndexFormat::U32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices widened to u32
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let (narrow, wide): (&[u16], &[u32]) = match self {
            IndexBuffer::U16(v) => (v.as_slice(), &[][..]),
            IndexBuffer::U32(v) => (&[][..], v.as_slice()),
        };
        narrow.iter().map(|&i| u32::from(i)).chain(wide.iter().copied())
    }

    /// Little-endian bytes at the buffer's own width
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            IndexBuffer::U16(v) => v.iter().flat_map(|i| i.to_le_bytes()).collect(),
            IndexBuffer::U32(v) => v.iter().flat_map(|i| i.to_le_bytes()).collect(),
        }
    }
}

/// Receiver of a finished mesh
pub trait MeshSink {
    /// Drop any previous contents
    fn clear(&mut self);

    fn set_index_format(&mut self, format: IndexFormat);

    fn set_positions(&mut self, positions: &[Vec3]);

    fn set_normals(&mut self, normals: &[Vec3]);

    /// UVs for output channel `channel` (0-based, below 8)
    fn set_uvs(&mut self, channel: usize, uvs: &[Vec2]);

    fn set_colors(&mut self, colors: &[Rgba8]);

    fn set_indices(&mut self, indices: IndexBuffer, topology: Topology);
}

/// Unpacked mesh (f32 attributes) for export and further processing
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// One UV array per output channel
    pub uvs: Vec<Vec<[f32; 2]>>,
    /// Vertex colors as [r, g, b, a]
    pub colors: Vec<Rgba8>,
    pub indices: IndexBuffer,
    pub index_format: IndexFormat,
    pub topology: Topology,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// UV channel, if it was written
    pub fn uv_channel(&self, channel: usize) -> Option<&[[f32; 2]]> {
        self.uvs.get(channel).map(Vec::as_slice)
    }
}

impl MeshSink for MeshData {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn set_index_format(&mut self, format: IndexFormat) {
        self.index_format = format;
    }

    fn set_positions(&mut self, positions: &[Vec3]) {
        self.positions = positions.iter().map(|p| p.to_array()).collect();
    }

    fn set_normals(&mut self, normals: &[Vec3]) {
        self.normals = normals.iter().map(|n| n.to_array()).collect();
    }

    fn set_uvs(&mut self, channel: usize, uvs: &[Vec2]) {
        if self.uvs.len() <= channel {
            self.uvs.resize_with(channel + 1, Vec::new);
        }
        self.uvs[channel] = uvs.iter().map(|uv| uv.to_array()).collect();
    }

    fn set_colors(&mut self, colors: &[Rgba8]) {
        self.colors = colors.to_vec();
    }

    fn set_indices(&mut self, indices: IndexBuffer, topology: Topology) {
        self.indices = indices;
        self.topology = topology;
    }
}
