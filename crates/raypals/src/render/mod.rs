//! # Render — The Drawing Host Seam
//!
//! Shapes and sprites never own a window or a GPU. They describe themselves to
//! a *canvas* (anything implementing [`Canvas2d`] or [`Canvas3d`]) and carry
//! their placement in a [`TransformStack`] that the caller threads through
//! every draw call.
//!
//! ## Design
//!
//! Immediate-mode hosts usually keep a hidden global matrix stack: push,
//! translate, rotate, draw, pop. We keep the same push/pop discipline but make
//! the stack an ordinary value. A draw function borrows it mutably, composes
//! its local transform on top, hands the current matrix to the canvas, and
//! restores it before returning. Every draw leaves [`TransformStack::depth`]
//! unchanged, which the tests check after each composite draw.
//!
//! Composition uses post-multiplication (`current = current * local`), the
//! same order as `parent * child` in a scene hierarchy: the most recently
//! pushed operation is applied to vertices first.
//!
//! ## Comparison
//!
//! - **raylib / rlgl**: `rlPushMatrix` / `rlTranslatef` / `rlPopMatrix` on a
//!   global stack. Same operations, implicit state.
//! - **HTML canvas**: `save()` / `translate()` / `restore()` on the context.
//! - **Bevy**: no stack at all; `GlobalTransform` is propagated through the
//!   entity hierarchy once per frame.

use crate::math::{Mat4, Vec2, Vec3};

pub use crate::render2d::{Canvas2d, Mesh2d, Primitive2d};
#[cfg(feature = "render3d")]
pub use crate::render3d::{Camera3d, Canvas3d, Primitive3d, Projection};

/// An explicit model-matrix stack.
///
/// The bottom of the stack is the identity. [`pop`](Self::pop) on an empty
/// stack is logged and ignored.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::with_capacity(8),
        }
    }

    /// Start from an arbitrary base matrix, e.g. a host's camera offset.
    pub fn with_base(base: Mat4) -> Self {
        Self {
            current: base,
            saved: Vec::with_capacity(8),
        }
    }

    /// The matrix that maps local coordinates to canvas coordinates.
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved matrices (balanced draws leave this unchanged).
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(m) => self.current = m,
            None => log::warn!("TransformStack::pop called with nothing pushed"),
        }
    }

    /// Run `f` between a push and its matching pop.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let out = f(self);
        self.pop();
        out
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    pub fn translate_2d(&mut self, offset: Vec2) {
        self.translate(offset.extend(0.0));
    }

    pub fn rotate_x(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_x(degrees.to_radians());
    }

    pub fn rotate_y(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_y(degrees.to_radians());
    }

    /// Rotation in the 2D plane. With y pointing down this turns clockwise on screen.
    pub fn rotate_z(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_z(degrees.to_radians());
    }

    /// Yaw, then pitch, then roll: `Y * X * Z`.
    pub fn rotate_euler(&mut self, degrees: Vec3) {
        self.rotate_y(degrees.y);
        self.rotate_x(degrees.x);
        self.rotate_z(degrees.z);
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.current *= Mat4::from_scale(factors);
    }

    /// Map a local 2D point through the current matrix.
    pub fn apply_2d(&self, point: Vec2) -> Vec2 {
        self.current.transform_point3(point.extend(0.0)).truncate()
    }
}
