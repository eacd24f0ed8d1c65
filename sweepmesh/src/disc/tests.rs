use glam::{Vec2, Vec3};

use super::ring::color_source;
use super::*;
use crate::color::{Color, ColorSpace};
use crate::gradient::Gradient;
use crate::params::{Axis, UvAxis, UvType};

const EPS: f32 = 1e-5;

fn white_lut() -> GradientLut {
    GradientLut::build(&Gradient::default(), ColorSpace::Gamma)
}

fn build(params: &DiscParams) -> GeometryBuffers {
    generate_buffers(params, &white_lut()).expect("non-degenerate params")
}

fn fan() -> DiscParams {
    DiscParams {
        inner_radius: 0.0,
        outer_radius: 1.0,
        angle: 1.0,
        segments_u: 4,
        segments_v: 1,
        axis: Axis::Z,
        ..Default::default()
    }
}

fn face_normal(positions: &[Vec3], tri: &[u32]) -> Vec3 {
    let p0 = positions[tri[0] as usize];
    let p1 = positions[tri[1] as usize];
    let p2 = positions[tri[2] as usize];
    (p1 - p0).cross(p2 - p0)
}

// =============================================================
// Vertex pass
// =============================================================

#[test]
fn test_fan_scenario() {
    let buffers = build(&fan());

    assert_eq!(buffers.vertex_count(), 10);
    assert_eq!(buffers.triangle_count(), 8);
    assert_eq!(buffers.indices.len(), 24);

    // i = 0, j = 0: zero inner radius puts the first vertex at the centre
    assert_eq!(buffers.positions[0], Vec3::ZERO);
    // i = 0, j = 1: phi = 0, full radius along x
    assert!(buffers.positions[1].abs_diff_eq(Vec3::X, EPS));
    // i = 1, j = 1: a quarter turn
    assert!(buffers.positions[3].abs_diff_eq(Vec3::Y, EPS));
    // i = 2, j = 1: half turn
    assert!(buffers.positions[5].abs_diff_eq(-Vec3::X, EPS));
}

#[test]
fn test_full_turn_closes_seam() {
    let params = DiscParams {
        inner_radius: 0.3,
        outer_radius: 1.7,
        segments_u: 16,
        segments_v: 3,
        ..Default::default()
    };
    let buffers = build(&params);
    let ring_len = params.ring_len();
    let last = params.segments_u as usize * ring_len;

    for j in 0..ring_len {
        let first = buffers.positions[j];
        let closing = buffers.positions[last + j];
        assert!(first.abs_diff_eq(closing, 1e-4), "{first} vs {closing}");
    }
}

#[test]
fn test_partial_angle_stops_short() {
    let params = DiscParams {
        angle: 0.25,
        segments_u: 3,
        segments_v: 1,
        ..Default::default()
    };
    let buffers = build(&params);
    // Ring 3 sits at a quarter turn
    assert!(buffers.positions[7].abs_diff_eq(Vec3::Y, EPS));
}

#[test]
fn test_axis_selects_radial_plane() {
    let params = DiscParams {
        axis: Axis::Y,
        ..fan()
    };
    let buffers = build(&params);
    // Axis Y sweeps in the Z/X plane starting along Z
    assert!(buffers.positions[1].abs_diff_eq(Vec3::Z, EPS));
    assert!(buffers.positions[3].abs_diff_eq(Vec3::X, EPS));
}

#[test]
fn test_extrusion_falls_off_along_v() {
    let params = DiscParams {
        extrusion: 2.0,
        segments_v: 4,
        ..fan()
    };
    let buffers = build(&params);

    assert!((buffers.positions[0].z - 2.0).abs() < EPS);
    assert!((buffers.positions[2].z - 1.0).abs() < EPS);
    assert!(buffers.positions[4].z.abs() < EPS);
}

#[test]
fn test_radial_uvs() {
    let params = DiscParams {
        segments_u: 4,
        segments_v: 2,
        ..Default::default()
    };
    let buffers = build(&params);

    assert_eq!(buffers.radial_uvs[0], Vec2::new(0.0, 0.0));
    assert_eq!(buffers.radial_uvs[1], Vec2::new(0.0, 0.5));
    assert_eq!(buffers.radial_uvs[5], Vec2::new(0.25, 1.0));
    assert_eq!(buffers.radial_uvs[14], Vec2::new(1.0, 1.0));
}

#[test]
fn test_top_projected_uvs_fill_unit_square() {
    let params = DiscParams {
        inner_radius: 0.5,
        outer_radius: 2.0,
        extrusion: 3.0,
        segments_u: 4,
        segments_v: 1,
        ..Default::default()
    };
    let buffers = build(&params);

    // Outer vertex of ring 0 at (2, 0) -> right edge, vertical centre
    assert!(buffers.projected_uvs[1].abs_diff_eq(Vec2::new(1.0, 0.5), EPS));
    // Inner vertex of ring 1 at (0, 0.5) -> quarter of the way up from centre
    assert!(buffers.projected_uvs[2].abs_diff_eq(Vec2::new(0.5, 0.625), EPS));
    // Extrusion does not leak into the projection
    for uv in &buffers.projected_uvs {
        assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
    }
}

// =============================================================
// Vertex colors
// =============================================================

#[test]
fn test_color_source_selection() {
    let radial = Vec2::new(0.1, 0.2);
    let projected = Vec2::new(0.3, 0.4);
    assert_eq!(color_source(UvType::Radial, UvAxis::U, radial, projected), 0.1);
    assert_eq!(color_source(UvType::Radial, UvAxis::V, radial, projected), 0.2);
    assert_eq!(color_source(UvType::TopProjected, UvAxis::U, radial, projected), 0.3);
    assert_eq!(color_source(UvType::TopProjected, UvAxis::V, radial, projected), 0.4);
}

#[test]
fn test_vertex_colors_follow_radial_v() {
    let params = DiscParams {
        segments_v: 2,
        vertex_color_uv: UvType::Radial,
        vertex_color_axis: UvAxis::V,
        color_space: ColorSpace::Gamma,
        gradient: Gradient::linear(Color::BLACK, Color::WHITE),
        ..fan()
    };
    let lut = GradientLut::build(&params.gradient, params.color_space);
    let buffers = generate_buffers(&params, &lut).unwrap();

    assert_eq!(buffers.colors[0], [0, 0, 0, 255]);
    assert!(buffers.colors[1][0].abs_diff(128) <= 1);
    assert!(buffers.colors[2][0] >= 254);
    // Same V on another ring, same color
    assert_eq!(buffers.colors[1], buffers.colors[4]);
}

// =============================================================
// Normals
// =============================================================

#[test]
fn test_flat_disc_normals_point_along_sweep_axis() {
    for (axis, expected) in [(Axis::X, Vec3::X), (Axis::Y, Vec3::Y), (Axis::Z, Vec3::Z)] {
        let buffers = build(&DiscParams {
            inner_radius: 0.5,
            axis,
            segments_u: 8,
            segments_v: 2,
            ..Default::default()
        });
        for n in &buffers.normals {
            assert!(n.abs_diff_eq(expected, EPS), "{axis:?}: {n}");
        }
    }
}

#[test]
fn test_flipped_negates_normals() {
    let base = build(&fan());
    let flipped = build(&DiscParams {
        flipped: true,
        ..fan()
    });
    for (a, b) in base.normals.iter().zip(&flipped.normals) {
        assert_eq!(*a, -*b);
    }
}

#[test]
fn test_negative_radius_flips_normals() {
    let params = DiscParams {
        inner_radius: 1.0,
        outer_radius: -1.0,
        segments_u: 4,
        segments_v: 4,
        ..Default::default()
    };
    let buffers = build(&params);
    for ring in buffers.normals.chunks(params.ring_len()) {
        // j = 0..=2 have radius >= 0, j = 3, 4 cross below zero
        assert_eq!(ring[0], ring[1]);
        assert_eq!(ring[0], ring[2]);
        assert_eq!(ring[3], -ring[0]);
        assert_eq!(ring[4], -ring[0]);
        assert!(ring[0].is_normalized());
    }
}

#[test]
fn test_collapsed_ring_has_zero_normals() {
    // Equal radii and no extrusion: every ring collapses to a point per j
    let buffers = build(&DiscParams {
        inner_radius: 1.0,
        outer_radius: 1.0,
        ..fan()
    });
    assert!(buffers.normals.iter().all(|n| *n == Vec3::ZERO));
}

#[test]
fn test_cone_normals_are_unit_and_tilted() {
    let buffers = build(&DiscParams {
        extrusion: 1.0,
        segments_u: 12,
        segments_v: 3,
        ..Default::default()
    });
    for n in &buffers.normals {
        assert!(n.is_normalized());
        // Tilted towards +Z and away from the axis
        assert!(n.z > 0.0 && n.z < 1.0);
    }
}

// =============================================================
// Triangulation
// =============================================================

#[test]
fn test_populate_quad_winding_table() {
    let mut out = [0u32; 6];
    populate_quad(&mut out, [10, 11, 20, 21], false);
    assert_eq!(out, [10, 20, 11, 20, 21, 11]);
    populate_quad(&mut out, [10, 11, 20, 21], true);
    assert_eq!(out, [10, 11, 20, 20, 11, 21]);
}

#[test]
fn test_face_winding_agrees_with_normals() {
    for flipped in [false, true] {
        let buffers = build(&DiscParams {
            inner_radius: 0.25,
            flipped,
            segments_u: 6,
            segments_v: 2,
            ..Default::default()
        });
        for tri in buffers.indices.chunks(3) {
            let face = face_normal(&buffers.positions, tri);
            let vertex = buffers.normals[tri[0] as usize];
            assert!(face.dot(vertex) > 0.0, "flipped={flipped} tri={tri:?}");
        }
    }
}

#[test]
fn test_flip_reverses_winding_exactly() {
    let params = DiscParams {
        segments_u: 5,
        segments_v: 3,
        double_sided: true,
        ..Default::default()
    };
    let base = build(&params);
    let mut flipped = build(&DiscParams {
        flipped: true,
        ..params
    });

    for tri in flipped.indices.chunks_mut(3) {
        tri.swap(1, 2);
    }
    assert_eq!(flipped.indices, base.indices);
}

// =============================================================
// Double-sided
// =============================================================

#[test]
fn test_double_sided_mirror() {
    let params = DiscParams {
        inner_radius: 0.2,
        extrusion: 0.5,
        segments_u: 6,
        segments_v: 3,
        double_sided: true,
        gradient: Gradient::linear(Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)),
        ..Default::default()
    };
    let lut = GradientLut::build(&params.gradient, params.color_space);
    let buffers = generate_buffers(&params, &lut).unwrap();
    let side = params.side_vertex_count();

    assert_eq!(buffers.vertex_count(), side * 2);
    for v in 0..side {
        assert_eq!(buffers.positions[v + side], buffers.positions[v]);
        assert_eq!(buffers.radial_uvs[v + side], buffers.radial_uvs[v]);
        assert_eq!(buffers.projected_uvs[v + side], buffers.projected_uvs[v]);
        assert_eq!(buffers.colors[v + side], buffers.colors[v]);
        assert_eq!(buffers.normals[v + side], -buffers.normals[v]);
    }
}

#[test]
fn test_back_shell_indices() {
    let params = DiscParams {
        segments_u: 3,
        segments_v: 1,
        double_sided: true,
        ..Default::default()
    };
    let buffers = build(&params);
    let side = params.side_vertex_count() as u32;
    let (front, back) = buffers.indices.split_at(params.side_index_count());

    assert_eq!(front.len(), back.len());
    assert!(front.iter().all(|&i| i < side));
    assert!(back.iter().all(|&i| i >= side && i < side * 2));

    // Same cells, opposite winding
    for (f, b) in front.chunks(3).zip(back.chunks(3)) {
        assert_eq!([b[0], b[2], b[1]], [f[0] + side, f[1] + side, f[2] + side]);
    }
}

// =============================================================
// Degenerate guard
// =============================================================

#[test]
fn test_degenerate_segments_build_nothing() {
    let lut = white_lut();
    for (u, v) in [(0, 4), (2, 4), (8, 0)] {
        let params = DiscParams {
            segments_u: u,
            segments_v: v,
            ..Default::default()
        };
        assert!(generate_buffers(&params, &lut).is_none());
    }
}
