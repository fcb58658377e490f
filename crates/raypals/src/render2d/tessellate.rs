//! Local-space tessellation of the 2D primitives.
//!
//! All functions return an indexed triangle list. Winding is not normalized;
//! hosts must accept both orientations (no backface culling in 2D).

use std::f32::consts::TAU;

use super::Mesh2d;
use crate::math::{Rect, Vec2};

/// Rectangle: 4 vertices, 2 triangles.
pub fn rect(rect: Rect) -> Mesh2d {
    Mesh2d {
        vertices: rect.corners().to_vec(),
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Rectangle border of `thickness`, inset so it stays inside `rect`.
///
/// A border thick enough to cover the whole rectangle degenerates to [`rect`].
pub fn rect_outline(r: Rect, thickness: f32) -> Mesh2d {
    let t = thickness.max(0.0);
    if t * 2.0 >= r.size.x.abs().min(r.size.y.abs()) {
        return rect(r);
    }
    let inner = Rect::new(r.min + Vec2::splat(t), r.size - Vec2::splat(t * 2.0));
    let mut vertices = r.corners().to_vec();
    vertices.extend_from_slice(&inner.corners());

    let mut indices = Vec::with_capacity(24);
    for i in 0..4u32 {
        let j = (i + 1) % 4;
        // outer i, outer j, inner j, inner i
        indices.extend_from_slice(&[i, j, 4 + j, i, 4 + j, 4 + i]);
    }
    Mesh2d { vertices, indices }
}

/// Points on a circle, starting at angle 0 and stepping counter-clockwise in math space.
pub fn circle_points(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let seg = segments.max(3);
    (0..seg)
        .map(|i| {
            let theta = i as f32 / seg as f32 * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Filled circle: center vertex + rim, fan triangulation.
pub fn circle(center: Vec2, radius: f32, segments: u32) -> Mesh2d {
    fan(center, &circle_points(center, radius, segments))
}

/// Circle outline: a ring of quads centered on `radius`.
pub fn circle_outline(center: Vec2, radius: f32, segments: u32, thickness: f32) -> Mesh2d {
    let half = thickness.max(0.0) * 0.5;
    let outer = circle_points(center, radius + half, segments);
    let inner = circle_points(center, (radius - half).max(0.0), segments);
    let n = outer.len() as u32;

    let mut mesh = Mesh2d::with_capacity(outer.len() * 2, outer.len() * 6);
    mesh.vertices.extend(outer);
    mesh.vertices.extend(inner);
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.indices.extend_from_slice(&[i, j, n + j, i, n + j, n + i]);
    }
    mesh
}

/// Single triangle.
pub fn triangle(points: [Vec2; 3]) -> Mesh2d {
    Mesh2d {
        vertices: points.to_vec(),
        indices: vec![0, 1, 2],
    }
}

/// Fan from `center` over `rim`, one triangle per consecutive rim pair
/// (including the closing pair). Fewer than two rim points yields nothing.
pub fn fan(center: Vec2, rim: &[Vec2]) -> Mesh2d {
    if rim.len() < 2 {
        return Mesh2d::default();
    }
    let n = rim.len() as u32;
    let mut mesh = Mesh2d::with_capacity(rim.len() + 1, rim.len() * 3);
    mesh.vertices.push(center);
    mesh.vertices.extend_from_slice(rim);
    for i in 0..n {
        mesh.indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % n]);
    }
    mesh
}

/// Thick segments between consecutive points, one quad each (butt caps).
/// Zero-length segments are skipped.
pub fn polyline(points: &[Vec2], closed: bool, thickness: f32) -> Mesh2d {
    let mut mesh = Mesh2d::default();
    if points.len() < 2 {
        return mesh;
    }
    let segments = if closed { points.len() } else { points.len() - 1 };
    for i in 0..segments {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        push_segment(&mut mesh, a, b, thickness);
    }
    mesh
}

/// A single thick line segment.
pub fn line(from: Vec2, to: Vec2, thickness: f32) -> Mesh2d {
    let mut mesh = Mesh2d::with_capacity(4, 6);
    push_segment(&mut mesh, from, to, thickness);
    mesh
}

fn push_segment(mesh: &mut Mesh2d, a: Vec2, b: Vec2, thickness: f32) {
    let dir = b - a;
    let len = dir.length();
    if len <= f32::EPSILON {
        return;
    }
    let normal = Vec2::new(-dir.y, dir.x) / len * (thickness.max(0.0) * 0.5);
    let base = mesh.vertices.len() as u32;
    mesh.vertices.extend_from_slice(&[a + normal, b + normal, b - normal, a - normal]);
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_in_range(mesh: &Mesh2d) -> bool {
        mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len())
    }

    #[test]
    fn rect_counts() {
        let m = rect(Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0)));
        assert_eq!(m.vertices.len(), 4);
        assert_eq!(m.triangle_count(), 2);
    }

    #[test]
    fn rect_outline_has_four_bars() {
        let m = rect_outline(Rect::new(Vec2::ZERO, Vec2::new(20.0, 10.0)), 2.0);
        assert_eq!(m.vertices.len(), 8);
        assert_eq!(m.triangle_count(), 8);
        assert!(indices_in_range(&m));
        // inner corners are inset by the thickness
        assert_eq!(m.vertices[4], Vec2::new(2.0, 2.0));
        assert_eq!(m.vertices[6], Vec2::new(18.0, 8.0));
    }

    #[test]
    fn thick_rect_outline_collapses_to_fill() {
        let m = rect_outline(Rect::new(Vec2::ZERO, Vec2::new(4.0, 4.0)), 3.0);
        assert_eq!(m.triangle_count(), 2);
    }

    #[test]
    fn circle_fan_radius() {
        let m = circle(Vec2::new(1.0, 2.0), 5.0, 36);
        assert_eq!(m.vertices.len(), 37);
        assert_eq!(m.triangle_count(), 36);
        for v in &m.vertices[1..] {
            assert!(((*v - Vec2::new(1.0, 2.0)).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn circle_clamps_segments() {
        assert_eq!(circle(Vec2::ZERO, 1.0, 0).triangle_count(), 3);
    }

    #[test]
    fn circle_outline_ring() {
        let m = circle_outline(Vec2::ZERO, 10.0, 12, 2.0);
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.triangle_count(), 24);
        assert!(indices_in_range(&m));
        assert!((m.vertices[0].length() - 11.0).abs() < 1e-4);
        assert!((m.vertices[12].length() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn fan_closes() {
        let rim = [Vec2::X, Vec2::Y, -Vec2::X];
        let m = fan(Vec2::ZERO, &rim);
        assert_eq!(m.triangle_count(), 3);
        assert_eq!(&m.indices[6..9], &[0, 3, 1]);
    }

    #[test]
    fn fan_needs_two_points() {
        assert!(fan(Vec2::ZERO, &[Vec2::X]).is_empty());
    }

    #[test]
    fn closed_polyline_has_one_quad_per_edge() {
        let pts = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        assert_eq!(polyline(&pts, true, 2.0).triangle_count(), 6);
        assert_eq!(polyline(&pts, false, 2.0).triangle_count(), 4);
    }

    #[test]
    fn line_width() {
        let m = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0);
        assert_eq!(m.vertices[0], Vec2::new(0.0, 2.0));
        assert_eq!(m.vertices[3], Vec2::new(0.0, -2.0));
    }

    #[test]
    fn degenerate_segment_is_skipped() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0).is_empty());
    }
}
