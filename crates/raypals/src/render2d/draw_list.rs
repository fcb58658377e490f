//! A recording [`Canvas2d`] host.
//!
//! [`DrawList`] keeps one [`DrawCommand2d`] per primitive call and appends the
//! transformed triangles to a shared vertex/index buffer. It is the host used
//! by the tests to check what was drawn, in which order and where, and it is
//! also a ready-made batch for a GPU host.

use super::{Canvas2d, Mesh2d, Primitive2d, Vertex2d};
use crate::color::Color;
use crate::math::{Mat4, Vec2, Vec3};

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand2d {
    pub primitive: Primitive2d,
    /// Model matrix in effect when the primitive was issued.
    pub transform: Mat4,
    pub color: Color,
    pub first_index: u32,
    pub index_count: u32,
}

impl DrawCommand2d {
    /// Where the local origin of the primitive landed on the canvas.
    pub fn origin(&self) -> Vec2 {
        self.transform.transform_point3(Vec3::ZERO).truncate()
    }
}

#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand2d>,
    vertices: Vec<Vertex2d>,
    indices: Vec<u32>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn commands(&self) -> &[DrawCommand2d] {
        &self.commands
    }

    pub fn vertices(&self) -> &[Vertex2d] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Primitive labels in issue order.
    pub fn primitives(&self) -> Vec<Primitive2d> {
        self.commands.iter().map(|c| c.primitive).collect()
    }

    /// World-space positions of the vertices referenced by `command`.
    pub fn command_positions(&self, command: &DrawCommand2d) -> Vec<Vec2> {
        let start = command.first_index as usize;
        let end = start + command.index_count as usize;
        self.indices[start..end]
            .iter()
            .map(|&i| {
                let p = self.vertices[i as usize].position;
                Vec2::new(p[0], p[1])
            })
            .collect()
    }

    /// Vertex buffer as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Canvas2d for DrawList {
    fn fill_mesh(&mut self, primitive: Primitive2d, transform: &Mat4, mesh: &Mesh2d, color: Color) {
        let base = self.vertices.len() as u32;
        let first_index = self.indices.len() as u32;

        self.vertices.extend(
            mesh.vertices
                .iter()
                .map(|v| Vertex2d::new(transform.transform_point3(v.extend(0.0)), color)),
        );
        self.indices.extend(mesh.indices.iter().map(|i| base + i));

        self.commands.push(DrawCommand2d {
            primitive,
            transform: *transform,
            color,
            first_index,
            index_count: mesh.indices.len() as u32,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    #[test]
    fn records_commands_in_order() {
        let mut list = DrawList::new();
        let t = Mat4::IDENTITY;
        list.fill_circle(&t, Vec2::ZERO, 5.0, 8, Color::RED);
        list.fill_rect(&t, Rect::from_center_size(Vec2::ZERO, Vec2::ONE), Color::BLUE);
        assert_eq!(list.primitives(), vec![Primitive2d::Circle, Primitive2d::Rect]);
        assert_eq!(list.commands()[1].first_index, 24);
    }

    #[test]
    fn vertices_are_world_space() {
        let mut list = DrawList::new();
        let t = Mat4::from_translation(Vec3::new(100.0, 50.0, 0.0));
        list.fill_rect(&t, Rect::new(Vec2::ZERO, Vec2::new(2.0, 2.0)), Color::WHITE);
        let cmd = list.commands()[0].clone();
        assert_eq!(cmd.origin(), Vec2::new(100.0, 50.0));
        let pts = list.command_positions(&cmd);
        assert!(pts.contains(&Vec2::new(102.0, 52.0)));
    }

    #[test]
    fn indices_are_rebased() {
        let mut list = DrawList::new();
        let t = Mat4::IDENTITY;
        list.fill_triangle(&t, [Vec2::ZERO, Vec2::X, Vec2::Y], Color::WHITE);
        list.fill_triangle(&t, [Vec2::ZERO, Vec2::X, Vec2::Y], Color::WHITE);
        assert_eq!(list.indices(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(list.index_bytes().len(), 24);
        assert_eq!(list.vertex_bytes().len(), 6 * Vertex2d::STRIDE);
    }

    #[test]
    fn clear_resets() {
        let mut list = DrawList::new();
        list.line(&Mat4::IDENTITY, Vec2::ZERO, Vec2::X, 1.0, Color::BLACK);
        list.clear();
        assert!(list.is_empty());
        assert!(list.vertices().is_empty());
    }
}
