//! 3D shapes.

use super::DEFAULT_THICKNESS;
use crate::color::Color;
use crate::math::{Vec3, normalize_degrees, normalize_degrees3};
use crate::render::{Camera3d, Canvas3d, TransformStack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind3d {
    Cube,
    Sphere { segments: u32 },
    Cone { segments: u32 },
    Cylinder { segments: u32 },
}

/// A single 3D primitive.
///
/// `size` is the bounding extent: `(2r, 2r, 2r)` for spheres and
/// `(2r, height, 2r)` for cones and cylinders. Rotation is per-axis degrees,
/// applied yaw (Y), then pitch (X), then roll (Z).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape3d {
    pub kind: ShapeKind3d,
    pub position: Vec3,
    pub size: Vec3,
    pub(crate) rotation: Vec3,
    pub color: Color,
    pub wireframe: bool,
    pub thickness: f32,
    pub visible: bool,
}

impl Shape3d {
    fn new(kind: ShapeKind3d, position: Vec3, size: Vec3, color: Color) -> Self {
        Self {
            kind,
            position,
            size,
            rotation: Vec3::ZERO,
            color,
            wireframe: false,
            thickness: DEFAULT_THICKNESS,
            visible: true,
        }
    }

    pub fn cube(position: Vec3, size: Vec3, color: Color) -> Self {
        Self::new(ShapeKind3d::Cube, position, size, color)
    }

    pub fn sphere(position: Vec3, radius: f32, segments: u32, color: Color) -> Self {
        Self::new(
            ShapeKind3d::Sphere { segments },
            position,
            Vec3::splat(radius * 2.0),
            color,
        )
    }

    /// A cone standing on `position`, pointing up.
    pub fn cone(position: Vec3, radius: f32, height: f32, segments: u32, color: Color) -> Self {
        Self::new(
            ShapeKind3d::Cone { segments },
            position,
            Vec3::new(radius * 2.0, height, radius * 2.0),
            color,
        )
    }

    /// A cylinder standing on `position`.
    pub fn cylinder(position: Vec3, radius: f32, height: f32, segments: u32, color: Color) -> Self {
        Self::new(
            ShapeKind3d::Cylinder { segments },
            position,
            Vec3::new(radius * 2.0, height, radius * 2.0),
            color,
        )
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn rotated(mut self, degrees: Vec3) -> Self {
        self.rotation = normalize_degrees3(degrees);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
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

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Advance each axis by `speed` degrees per second over `dt` seconds.
    pub fn rotate(&mut self, dt: f32, speed: Vec3) {
        self.rotation = normalize_degrees3(self.rotation + speed * dt);
    }

    /// Yaw only, used by spin animations.
    pub(crate) fn rotate_yaw(&mut self, degrees: f32) {
        self.rotation.y = normalize_degrees(self.rotation.y + degrees);
    }

    /// Draw the shape.
    ///
    /// With a camera, the call opens and closes its own 3D scope. Without one,
    /// the caller must already be inside a scope.
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
            let t = stack.current();
            let (color, wire) = (self.color, self.wireframe);

            match self.kind {
                ShapeKind3d::Cube => canvas.draw_cube(&t, self.size, color, wire),
                ShapeKind3d::Sphere { segments } => {
                    canvas.draw_sphere(&t, self.size.x * 0.5, segments, color, wire)
                }
                ShapeKind3d::Cone { segments } => {
                    canvas.draw_cylinder(&t, self.size.x * 0.5, 0.0, self.size.y, segments, color, wire)
                }
                ShapeKind3d::Cylinder { segments } => {
                    let r = self.size.x * 0.5;
                    canvas.draw_cylinder(&t, r, r, self.size.y, segments, color, wire)
                }
            }
        });

        if camera.is_some() {
            canvas.end_scope();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive3d;
    use crate::render3d::DrawList3d;

    #[test]
    fn constructors_store_extents() {
        let s = Shape3d::sphere(Vec3::ZERO, 1.5, 16, Color::RED);
        assert_eq!(s.size, Vec3::splat(3.0));
        let c = Shape3d::cone(Vec3::ZERO, 1.0, 4.0, 12, Color::RED);
        assert_eq!(c.size, Vec3::new(2.0, 4.0, 2.0));
        assert_eq!(c.kind, ShapeKind3d::Cone { segments: 12 });
        assert!(!c.wireframe && c.visible);
        assert_eq!(c.thickness, 2.0);
    }

    #[test]
    fn set_rotation_normalizes_each_axis() {
        let mut s = Shape3d::cube(Vec3::ZERO, Vec3::ONE, Color::RED);
        s.set_rotation(Vec3::new(-90.0, 450.0, 360.0));
        assert_eq!(s.rotation(), Vec3::new(270.0, 90.0, 0.0));
    }

    #[test]
    fn rotate_stays_in_range() {
        let mut s = Shape3d::cube(Vec3::ZERO, Vec3::ONE, Color::RED);
        for dt in [0.016, 1.0, 13.0, 1000.0] {
            s.rotate(dt, Vec3::new(-77.0, 1234.5, 0.3));
            let r = s.rotation();
            for axis in [r.x, r.y, r.z] {
                assert!((0.0..360.0).contains(&axis));
            }
        }
    }

    #[test]
    fn draw_with_camera_opens_one_scope() {
        let mut list = DrawList3d::new();
        let mut stack = TransformStack::new();
        let cam = Camera3d::default();
        Shape3d::cube(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE, Color::RED).draw(&mut list, &mut stack, Some(&cam));
        assert_eq!(list.scopes().len(), 1);
        assert!(!list.is_scope_open());
        assert_eq!(list.commands()[0].origin(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn draw_without_camera_needs_open_scope() {
        let mut list = DrawList3d::new();
        let mut stack = TransformStack::new();
        let shape = Shape3d::sphere(Vec3::ZERO, 1.0, 8, Color::RED);
        shape.draw(&mut list, &mut stack, None);
        assert!(list.commands().is_empty());

        list.begin_scope(&Camera3d::default());
        shape.draw(&mut list, &mut stack, None);
        list.end_scope();
        assert_eq!(list.primitives(), vec![Primitive3d::Sphere]);
    }

    #[test]
    fn cone_is_cylinder_with_zero_top() {
        let mut list = DrawList3d::new();
        let mut stack = TransformStack::new();
        let cam = Camera3d::default();
        Shape3d::cone(Vec3::ZERO, 1.0, 2.0, 8, Color::RED)
            .wireframe()
            .draw(&mut list, &mut stack, Some(&cam));
        let cmd = &list.commands()[0];
        assert_eq!(cmd.primitive, Primitive3d::Cylinder);
        assert!(cmd.wireframe);
        // apex at the top
        let top = list.vertices().iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(top, 2.0);
    }

    #[test]
    fn invisible_opens_no_scope() {
        let mut list = DrawList3d::new();
        let mut stack = TransformStack::new();
        Shape3d::cube(Vec3::ZERO, Vec3::ONE, Color::RED)
            .hidden()
            .draw(&mut list, &mut stack, Some(&Camera3d::default()));
        assert!(list.scopes().is_empty());
    }
}
