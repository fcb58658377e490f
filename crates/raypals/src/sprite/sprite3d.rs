use crate::math::{Vec3, normalize_degrees3};
use crate::render::{Camera3d, Canvas3d, TransformStack};
use crate::shapes::Shape3d;

/// An ordered group of [`Shape3d`] drawn under one transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite3d {
    shapes: Vec<Shape3d>,
    pub position: Vec3,
    pub(crate) rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    pub visible: bool,
}

impl Default for Sprite3d {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Sprite3d {
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
        }
    }

    pub fn add_shape(&mut self, shape: Shape3d) {
        self.shapes.push(shape);
    }

    pub fn with_shape(mut self, shape: Shape3d) -> Self {
        self.add_shape(shape);
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn shapes(&self) -> &[Shape3d] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [Shape3d] {
        &mut self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape3d> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape3d> {
        self.shapes.get_mut(index)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: Vec3) {
        self.rotation = normalize_degrees3(degrees);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn rotate(&mut self, dt: f32, speed: Vec3) {
        self.rotation = normalize_degrees3(self.rotation + speed * dt);
    }

    /// Draw every child inside one 3D scope.
    ///
    /// With a camera, the sprite opens the scope itself and children are drawn
    /// without one. Without a camera, the caller's scope is used.
    pub fn draw<C: Canvas3d + ?Sized>(&self, canvas: &mut C, stack: &mut TransformStack, camera: Option<&Camera3d>) {
        if !self.visible {
            return;
        }
        if let Some(camera) = camera {
            canvas.begin_scope(camera);
        }

        stack.scoped(|stack| {
            stack.translate(self.position);
            stack.rotate_euler(self.rotation);
            stack.scale(self.scale);
            for shape in &self.shapes {
                shape.draw(canvas, stack, None);
            }
        });

        if camera.is_some() {
            canvas.end_scope();
        }
    }
}
