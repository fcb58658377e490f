//! A recording [`Canvas3d`] host.

use super::{Camera3d, Canvas3d, MeshVertex, Primitive3d, mesh};
use crate::color::Color;
use crate::math::{Mat4, Vec3};

/// One recorded 3D primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand3d {
    pub primitive: Primitive3d,
    pub transform: Mat4,
    pub color: Color,
    pub wireframe: bool,
    /// Index into [`DrawList3d::scopes`] of the scope the command belongs to.
    pub scope: usize,
    pub first_index: u32,
    pub index_count: u32,
}

impl DrawCommand3d {
    pub fn origin(&self) -> Vec3 {
        self.transform.transform_point3(Vec3::ZERO)
    }
}

/// Records scopes and primitives, building world-space meshes.
///
/// Primitives issued outside an open scope are logged and dropped. A nested
/// `begin_scope` keeps the outer camera; the scope closes only when every
/// `begin_scope` has been matched by an `end_scope`.
#[derive(Debug, Default)]
pub struct DrawList3d {
    scopes: Vec<Camera3d>,
    /// Number of unmatched `begin_scope` calls.
    depth: u32,
    commands: Vec<DrawCommand3d>,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl DrawList3d {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scopes.clear();
        self.depth = 0;
        self.commands.clear();
        self.vertices.clear();
        self.indices.clear();
    }

    /// Cameras of every scope opened so far, in order.
    pub fn scopes(&self) -> &[Camera3d] {
        &self.scopes
    }

    pub fn is_scope_open(&self) -> bool {
        self.depth > 0
    }

    pub fn commands(&self) -> &[DrawCommand3d] {
        &self.commands
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn primitives(&self) -> Vec<Primitive3d> {
        self.commands.iter().map(|c| c.primitive).collect()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn record(
        &mut self,
        primitive: Primitive3d,
        transform: &Mat4,
        color: Color,
        wireframe: bool,
        (verts, idxs): (Vec<MeshVertex>, Vec<u32>),
    ) {
        if self.depth == 0 {
            log::warn!("{primitive:?} drawn outside a 3D scope, ignoring");
            return;
        }

        let base = self.vertices.len() as u32;
        let first_index = self.indices.len() as u32;
        let normal_matrix = transform.inverse().transpose();

        self.vertices.extend(verts.into_iter().map(|v| MeshVertex {
            position: transform.transform_point3(Vec3::from(v.position)).to_array(),
            normal: normal_matrix
                .transform_vector3(Vec3::from(v.normal))
                .normalize_or(Vec3::Y)
                .to_array(),
            uv: v.uv,
        }));
        self.indices.extend(idxs.iter().map(|i| base + i));

        self.commands.push(DrawCommand3d {
            primitive,
            transform: *transform,
            color,
            wireframe,
            scope: self.scopes.len() - 1,
            first_index,
            index_count: idxs.len() as u32,
        });
    }
}

impl Canvas3d for DrawList3d {
    fn begin_scope(&mut self, camera: &Camera3d) {
        if self.depth > 0 {
            log::warn!("begin_scope while a 3D scope is already open, keeping the outer camera");
        } else {
            self.scopes.push(*camera);
        }
        self.depth += 1;
    }

    fn end_scope(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => log::warn!("end_scope without an open 3D scope"),
        }
    }

    fn draw_cube(&mut self, transform: &Mat4, size: Vec3, color: Color, wireframe: bool) {
        self.record(Primitive3d::Cube, transform, color, wireframe, mesh::cube(size));
    }

    fn draw_sphere(&mut self, transform: &Mat4, radius: f32, segments: u32, color: Color, wireframe: bool) {
        // Same count for rings and slices.
        self.record(
            Primitive3d::Sphere,
            transform,
            color,
            wireframe,
            mesh::sphere(radius, segments, segments),
        );
    }

    fn draw_cylinder(
        &mut self,
        transform: &Mat4,
        radius_bottom: f32,
        radius_top: f32,
        height: f32,
        segments: u32,
        color: Color,
        wireframe: bool,
    ) {
        self.record(
            Primitive3d::Cylinder,
            transform,
            color,
            wireframe,
            mesh::frustum(radius_bottom, radius_top, height, segments),
        );
    }
}
