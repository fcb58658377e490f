//! # Render2d — Canvas Trait and CPU Tessellation
//!
//! Every 2D primitive a shape needs (rectangles, circles, triangles, fans and
//! thick polylines) is reduced to a small indexed triangle mesh in local
//! space, then handed to the canvas together with the current model matrix.
//!
//! ```text
//!  Shape2d::draw ──► Canvas2d::fill_rect / stroke_circle / ...   (provided)
//!                          │
//!                          ▼
//!                    tessellate::*  ──► Mesh2d (local space)
//!                          │
//!                          ▼
//!                    Canvas2d::fill_mesh(primitive, transform, mesh, color)
//!                          │
//!              ┌───────────┴────────────┐
//!              ▼                        ▼
//!          DrawList                RasterCanvas
//!   (world-space vertices)     (software rasterizer)
//! ```
//!
//! ## Design Decisions
//!
//! **One required method.** A host only has to accept triangles. The
//! primitive label passed along with each mesh lets instrumented hosts (and
//! tests) see *what* was drawn, not just the triangles.
//!
//! **CPU-side vertex transform.** Meshes stay in local space until a host
//! applies the transform, so a GPU host can upload world-space vertices
//! straight into a batch without per-draw uniforms.
//!
//! ## Comparison
//!
//! - **raylib**: one C function per primitive (`DrawRectangle`,
//!   `DrawCircleLines`, ...), each emitting immediate-mode vertices.
//! - **lyon**: a full path tessellator with joins, caps and curves. We only
//!   need convex fans and butt-capped segments.

pub mod draw_list;
#[cfg(feature = "raster")]
pub mod raster;
pub mod tessellate;
pub mod vertex;

pub use draw_list::{DrawCommand2d, DrawList};
#[cfg(feature = "raster")]
pub use raster::RasterCanvas;
pub use vertex::Vertex2d;

use crate::color::Color;
use crate::math::{Mat4, Rect, Vec2};

/// What a mesh handed to [`Canvas2d::fill_mesh`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive2d {
    Rect,
    RectOutline,
    Circle,
    CircleOutline,
    Triangle,
    TriangleOutline,
    Fan,
    Polyline,
    Line,
}

/// An indexed triangle list in local 2D coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh2d {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Mesh2d {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }
}

/// A 2D drawing host.
///
/// Implementors provide [`fill_mesh`](Self::fill_mesh). The remaining methods
/// tessellate in local space and forward to it; hosts with native primitives
/// may override them.
pub trait Canvas2d {
    /// Fill `mesh` (local space) with `color` after applying `transform`.
    fn fill_mesh(&mut self, primitive: Primitive2d, transform: &Mat4, mesh: &Mesh2d, color: Color);

    fn fill_rect(&mut self, transform: &Mat4, rect: Rect, color: Color) {
        self.fill_mesh(Primitive2d::Rect, transform, &tessellate::rect(rect), color);
    }

    /// Outline drawn inside the rectangle's bounds.
    fn stroke_rect(&mut self, transform: &Mat4, rect: Rect, thickness: f32, color: Color) {
        let mesh = tessellate::rect_outline(rect, thickness);
        self.fill_mesh(Primitive2d::RectOutline, transform, &mesh, color);
    }

    fn fill_circle(&mut self, transform: &Mat4, center: Vec2, radius: f32, segments: u32, color: Color) {
        let mesh = tessellate::circle(center, radius, segments);
        self.fill_mesh(Primitive2d::Circle, transform, &mesh, color);
    }

    fn stroke_circle(
        &mut self,
        transform: &Mat4,
        center: Vec2,
        radius: f32,
        segments: u32,
        thickness: f32,
        color: Color,
    ) {
        let mesh = tessellate::circle_outline(center, radius, segments, thickness);
        self.fill_mesh(Primitive2d::CircleOutline, transform, &mesh, color);
    }

    fn fill_triangle(&mut self, transform: &Mat4, points: [Vec2; 3], color: Color) {
        self.fill_mesh(Primitive2d::Triangle, transform, &tessellate::triangle(points), color);
    }

    fn stroke_triangle(&mut self, transform: &Mat4, points: [Vec2; 3], thickness: f32, color: Color) {
        let mesh = tessellate::polyline(&points, true, thickness);
        self.fill_mesh(Primitive2d::TriangleOutline, transform, &mesh, color);
    }

    /// Fan from `center` through consecutive `rim` points, closing back to the first.
    fn fill_fan(&mut self, transform: &Mat4, center: Vec2, rim: &[Vec2], color: Color) {
        self.fill_mesh(Primitive2d::Fan, transform, &tessellate::fan(center, rim), color);
    }

    fn stroke_polyline(&mut self, transform: &Mat4, points: &[Vec2], closed: bool, thickness: f32, color: Color) {
        let mesh = tessellate::polyline(points, closed, thickness);
        self.fill_mesh(Primitive2d::Polyline, transform, &mesh, color);
    }

    fn line(&mut self, transform: &Mat4, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.fill_mesh(Primitive2d::Line, transform, &tessellate::line(from, to, thickness), color);
    }
}
