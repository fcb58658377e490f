//! # Mesh — Built-In 3D Mesh Generators
//!
//! The three solids a 3D shape can be (box, sphere, truncated cone) are
//! generated on the CPU as indexed triangle lists. Hosts that rasterize
//! themselves can use them directly; [`DrawList3d`](super::DrawList3d)
//! transforms them into world space.
//!
//! ## Winding Order and Normals
//!
//! Triangles are counter-clockwise when viewed from outside. Each vertex
//! carries an outward unit normal. Cube faces get their own four vertices so
//! that edges keep sharp normals (24 vertices instead of 8).
//!
//! The frustum side normal tilts with the slope of the side:
//! `normalize(cos θ · h, r_bottom − r_top, sin θ · h)`. For a plain cylinder
//! this reduces to the radial direction.
//!
//! ## UV Mapping
//!
//! Each cube face maps the full `[0,1]²` square. The sphere uses
//! equirectangular mapping (longitude → U, latitude → V).

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};

use crate::math::Vec3;

/// Per-vertex data for 3D meshes: position, surface normal, texture UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Box with the given edge lengths, centered on the origin.
///
/// Returns 24 vertices (4 per face for correct normals) and 36 indices.
pub fn cube(size: Vec3) -> (Vec<MeshVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    let half = size * 0.5;

    // (normal, tangent_u, tangent_v) for each face
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let corners = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    for (normal, u_dir, v_dir) in faces {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(uvs) {
            let unit = normal + u_dir * corner[0] + v_dir * corner[1];
            vertices.push(MeshVertex {
                position: (unit * half).to_array(),
                normal: normal.to_array(),
                uv,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// UV sphere centered on the origin.
///
/// `segments` divides longitude, `rings` latitude; both are clamped to at least 3 and 2.
pub fn sphere(radius: f32, segments: u32, rings: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = v * PI;

        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let theta = u * TAU;
            let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());

            vertices.push(MeshVertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
                uv: [u, v],
            });
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;
            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    (vertices, indices)
}

/// Truncated cone standing on the origin, extending along +Y by `height`.
///
/// A zero `radius_top` gives a cone; the top cap is skipped. Caps are center
/// fans, the side is one quad per segment.
pub fn frustum(radius_bottom: f32, radius_top: f32, height: f32, segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let seg = segments.max(3);
    let mut vertices = Vec::with_capacity(((seg + 1) * 4 + 2) as usize);
    let mut indices = Vec::with_capacity((seg * 12) as usize);

    // ── Side ──
    let slope = radius_bottom - radius_top;
    for i in 0..=seg {
        let u = i as f32 / seg as f32;
        let theta = u * TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = Vec3::new(cos * height, slope, sin * height).normalize_or(Vec3::Y);

        vertices.push(MeshVertex {
            position: [cos * radius_top, height, sin * radius_top],
            normal: normal.to_array(),
            uv: [u, 0.0],
        });
        vertices.push(MeshVertex {
            position: [cos * radius_bottom, 0.0, sin * radius_bottom],
            normal: normal.to_array(),
            uv: [u, 1.0],
        });
    }
    for i in 0..seg {
        let top0 = i * 2;
        let bot0 = top0 + 1;
        let top1 = top0 + 2;
        let bot1 = top0 + 3;
        indices.extend_from_slice(&[top0, top1, bot1, top0, bot1, bot0]);
    }

    // ── Caps ──
    if radius_top > 0.0 {
        push_cap(&mut vertices, &mut indices, radius_top, height, seg, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut vertices, &mut indices, radius_bottom, 0.0, seg, false);
    }

    (vertices, indices)
}

fn push_cap(vertices: &mut Vec<MeshVertex>, indices: &mut Vec<u32>, radius: f32, y: f32, seg: u32, up: bool) {
    let normal = if up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };
    let center = vertices.len() as u32;
    vertices.push(MeshVertex {
        position: [0.0, y, 0.0],
        normal,
        uv: [0.5, 0.5],
    });
    for i in 0..seg {
        let (sin, cos) = (i as f32 / seg as f32 * TAU).sin_cos();
        vertices.push(MeshVertex {
            position: [cos * radius, y, sin * radius],
            normal,
            uv: [0.5 + cos * 0.5, 0.5 + sin * 0.5],
        });
    }
    for i in 0..seg {
        let curr = center + 1 + i;
        let next = center + 1 + (i + 1) % seg;
        if up {
            indices.extend_from_slice(&[center, next, curr]);
        } else {
            indices.extend_from_slice(&[center, curr, next]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(verts: &[MeshVertex], idxs: &[u32]) {
        assert_eq!(idxs.len() % 3, 0);
        for &idx in idxs {
            assert!((idx as usize) < verts.len(), "index {idx} out of range");
        }
        for v in verts {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-5, "normal should be unit length, got {len}");
        }
    }

    #[test]
    fn cube_has_correct_counts() {
        let (verts, idxs) = cube(Vec3::ONE);
        assert_eq!(verts.len(), 24, "cube should have 24 vertices (4 per face)");
        assert_eq!(idxs.len(), 36, "cube should have 36 indices (6 per face)");
        assert_valid(&verts, &idxs);
    }

    #[test]
    fn cube_extent_matches_size() {
        let (verts, _) = cube(Vec3::new(2.0, 4.0, 6.0));
        let max = verts.iter().fold(Vec3::splat(f32::MIN), |m, v| m.max(Vec3::from(v.position)));
        assert_eq!(max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn sphere_has_correct_counts() {
        let (verts, idxs) = sphere(0.5, 32, 16);
        assert_eq!(verts.len(), (17 * 33) as usize);
        assert_eq!(idxs.len(), (16 * 32 * 6) as usize);
        assert_valid(&verts, &idxs);
    }

    #[test]
    fn sphere_vertices_on_radius() {
        let (verts, _) = sphere(2.0, 8, 8);
        for v in &verts {
            assert!((Vec3::from(v.position).length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn cylinder_index_count_matches() {
        let seg = 32u32;
        let (verts, idxs) = frustum(0.5, 0.5, 1.0, seg);
        // side: seg*6, top cap: seg*3, bottom cap: seg*3
        assert_eq!(idxs.len(), (seg * 12) as usize);
        assert_valid(&verts, &idxs);
    }

    #[test]
    fn cone_skips_top_cap() {
        let seg = 16u32;
        let (verts, idxs) = frustum(0.5, 0.0, 2.0, seg);
        assert_eq!(idxs.len(), (seg * 9) as usize);
        assert_valid(&verts, &idxs);
        let top = verts.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(top, 2.0);
    }

    #[test]
    fn frustum_sits_on_origin() {
        let (verts, _) = frustum(1.0, 1.0, 3.0, 8);
        let bottom = verts.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        assert_eq!(bottom, 0.0);
    }
}
