//! # Render3d — Camera, 3D Canvas Trait and Mesh Generators
//!
//! 3D shapes are drawn inside a *scope*: the host is told which camera to use
//! with [`Canvas3d::begin_scope`], receives any number of primitives, then
//! [`Canvas3d::end_scope`]. A shape or sprite drawn with a camera opens and
//! closes its own scope; drawn without one, it assumes the caller already
//! opened a scope.
//!
//! Primitives arrive with the current model matrix from the
//! [`TransformStack`](crate::render::TransformStack), exactly like 2D.
//!
//! ## Conventions
//!
//! - Right-handed, +Y up, angles in degrees at the API surface.
//! - Cubes are centered on the local origin.
//! - Cylinders and cones stand on the local origin and extend along +Y.
//!   A cone is a cylinder whose top radius is zero.
//!
//! ## Comparison
//!
//! - **raylib**: `BeginMode3D(camera)` / `EndMode3D()` with `DrawCube`,
//!   `DrawSphereWires`, `DrawCylinder(pos, r_top, r_bottom, h, slices)`.
//! - **three.js**: `CylinderGeometry(radiusTop, radiusBottom, height)` is
//!   centered instead of base-anchored.

pub mod draw_list;
pub mod mesh;

pub use draw_list::{DrawCommand3d, DrawList3d};
pub use mesh::MeshVertex;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{Mat4, Vec3};

/// What a [`DrawCommand3d`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive3d {
    Cube,
    Sphere,
    Cylinder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Projection {
    #[default]
    Perspective,
    /// `fovy` is the visible height in world units.
    Orthographic,
}

/// A look-at camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera3d {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees (perspective).
    pub fovy: f32,
    pub projection: Projection,
}

impl Default for Camera3d {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera3d {
    pub const NEAR: f32 = 0.01;
    pub const FAR: f32 = 1000.0;

    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Self::default()
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => {
                Mat4::perspective_rh(self.fovy.to_radians(), aspect, Self::NEAR, Self::FAR)
            }
            Projection::Orthographic => {
                let top = self.fovy * 0.5;
                let right = top * aspect;
                Mat4::orthographic_rh(-right, right, -top, top, Self::NEAR, Self::FAR)
            }
        }
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// A 3D drawing host.
pub trait Canvas3d {
    fn begin_scope(&mut self, camera: &Camera3d);
    fn end_scope(&mut self);

    /// Axis-aligned box of `size`, centered on the local origin.
    fn draw_cube(&mut self, transform: &Mat4, size: Vec3, color: Color, wireframe: bool);

    fn draw_sphere(&mut self, transform: &Mat4, radius: f32, segments: u32, color: Color, wireframe: bool);

    /// Truncated cone from `y = 0` (radius `radius_bottom`) to `y = height`.
    #[allow(clippy::too_many_arguments)]
    fn draw_cylinder(
        &mut self,
        transform: &Mat4,
        radius_bottom: f32,
        radius_top: f32,
        height: f32,
        segments: u32,
        color: Color,
        wireframe: bool,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_at_origin() {
        let cam = Camera3d::default();
        let origin_in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
        // Right-handed view space looks down -Z.
        assert!(origin_in_view.z < 0.0);
        assert!(origin_in_view.x.abs() < 1e-4 && origin_in_view.y.abs() < 1e-4);
    }

    #[test]
    fn target_projects_to_center() {
        let cam = Camera3d::new(Vec3::new(0.0, 2.0, 8.0), Vec3::new(0.0, 1.0, 0.0));
        for projection in [Projection::Perspective, Projection::Orthographic] {
            let cam = Camera3d { projection, ..cam };
            let clip = cam.view_projection(16.0 / 9.0).project_point3(cam.target);
            assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4, "{projection:?}: {clip:?}");
        }
    }

    #[test]
    fn camera_config_parses() {
        let cam: Camera3d = serde_json::from_str(r#"{ "fovy": 60.0, "projection": "Orthographic" }"#).unwrap();
        assert_eq!(cam.fovy, 60.0);
        assert_eq!(cam.projection, Projection::Orthographic);
        assert_eq!(cam.up, Vec3::Y);
    }
}
