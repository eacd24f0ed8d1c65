//! Wavefront OBJ export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sink::MeshData;

/// Write an OBJ file
///
/// Vertex colors go on the `v` lines (`v x y z r g b`), UV channel 0 becomes
/// `vt`. Alpha and the other UV channels have no OBJ representation.
pub fn write_obj(mesh: &MeshData, path: &Path, name: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_obj_to(mesh, &mut w, name)?;
    w.flush()
}

/// Write OBJ text to any writer
pub fn write_obj_to<W: Write>(mesh: &MeshData, w: &mut W, name: &str) -> io::Result<()> {
    let vertex_count = mesh.vertex_count();
    let uvs = mesh.uv_channel(0).filter(|uvs| uvs.len() == vertex_count);
    let has_colors = mesh.colors.len() == vertex_count;
    let has_normals = mesh.normals.len() == vertex_count;

    writeln!(w, "# sweepmesh")?;
    writeln!(
        w,
        "# {} vertices, {} triangles",
        vertex_count,
        mesh.triangle_count()
    )?;
    writeln!(w, "o {name}")?;

    for (i, p) in mesh.positions.iter().enumerate() {
        if has_colors {
            let c = mesh.colors[i];
            writeln!(
                w,
                "v {} {} {} {:.4} {:.4} {:.4}",
                p[0],
                p[1],
                p[2],
                c[0] as f32 / 255.0,
                c[1] as f32 / 255.0,
                c[2] as f32 / 255.0
            )?;
        } else {
            writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
        }
    }

    if let Some(uvs) = uvs {
        for uv in uvs {
            writeln!(w, "vt {} {}", uv[0], uv[1])?;
        }
    }

    if has_normals {
        for n in &mesh.normals {
            writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
        }
    }

    // OBJ indices are 1-based
    let indices: Vec<u32> = mesh.indices.iter().collect();
    for tri in indices.chunks_exact(3) {
        write!(w, "f")?;
        for &index in tri {
            let i = index + 1;
            match (uvs.is_some(), has_normals) {
                (true, true) => write!(w, " {i}/{i}/{i}")?,
                (true, false) => write!(w, " {i}/{i}")?,
                (false, true) => write!(w, " {i}//{i}")?,
                (false, false) => write!(w, " {i}")?,
            }
        }
        writeln!(w)?;
    }

    Ok(())
}
