use crate::math::{Vec2, Vec3, normalize_degrees};
use crate::render::{Canvas2d, TransformStack};
use crate::shapes::Shape2d;

/// An ordered group of [`Shape2d`] drawn under one transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite2d {
    shapes: Vec<Shape2d>,
    pub position: Vec2,
    pub(crate) rotation: f32,
    /// Uniform scale applied to x and y.
    pub scale: f32,
    pub visible: bool,
}

impl Default for Sprite2d {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Sprite2d {
    /// An empty sprite. `capacity` is only a hint.
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            visible: true,
        }
    }

    /// Append a shape; it is drawn after (on top of) every existing child.
    pub fn add_shape(&mut self, shape: Shape2d) {
        self.shapes.push(shape);
    }

    pub fn with_shape(mut self, shape: Shape2d) -> Self {
        self.add_shape(shape);
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn shapes(&self) -> &[Shape2d] {
        &self.shapes
    }

    /// Mutable access to the children. The list itself cannot grow or shrink here.
    pub fn shapes_mut(&mut self) -> &mut [Shape2d] {
        &mut self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape2d> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape2d> {
        self.shapes.get_mut(index)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Advance the group rotation by `speed` degrees per second.
    pub fn rotate(&mut self, dt: f32, speed: f32) {
        if speed == 0.0 {
            return;
        }
        self.rotation = normalize_degrees(self.rotation + speed * dt);
    }

    pub fn draw<C: Canvas2d + ?Sized>(&self, canvas: &mut C, stack: &mut TransformStack) {
        if !self.visible {
            return;
        }
        stack.scoped(|stack| {
            stack.translate_2d(self.position);
            stack.rotate_z(self.rotation);
            stack.scale(Vec3::new(self.scale, self.scale, 1.0));
            for shape in &self.shapes {
                shape.draw(canvas, stack);
            }
        });
    }
}
