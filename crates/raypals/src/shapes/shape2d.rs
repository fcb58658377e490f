//! 2D shapes.

use std::f32::consts::{PI, TAU};

use super::{DEFAULT_CIRCLE_SEGMENTS, DEFAULT_THICKNESS, MAX_POLYGON_SIDES, MAX_STAR_POINTS};
use crate::color::Color;
use crate::math::{Mat4, Rect, Vec2, normalize_degrees};
use crate::render::{Canvas2d, TransformStack};

/// The kind of a [`Shape2d`], with kind-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind2d {
    Square,
    Rectangle,
    Circle { segments: u32 },
    Triangle,
    /// Always at least 3 points.
    Star { points: u32 },
    /// Always at least 3 sides.
    Polygon { sides: u32 },
    Arrow,
    WaterDrop,
    Skeleton,
}

/// A single 2D primitive.
///
/// `position` is relative to whatever transform is active when the shape is
/// drawn (the sprite's, inside a sprite). Rotation is in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape2d {
    pub kind: ShapeKind2d,
    pub position: Vec2,
    pub size: Vec2,
    pub(crate) rotation: f32,
    pub color: Color,
    pub filled: bool,
    /// Outline width, used when `filled` is false (skeletons always stroke).
    pub thickness: f32,
    pub visible: bool,
}

// ── Construction ──

impl Shape2d {
    fn new(kind: ShapeKind2d, position: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            kind,
            position,
            size,
            rotation: 0.0,
            color,
            filled: true,
            thickness: DEFAULT_THICKNESS,
            visible: true,
        }
    }

    pub fn square(position: Vec2, size: f32, color: Color) -> Self {
        Self::new(ShapeKind2d::Square, position, Vec2::splat(size), color)
    }

    pub fn rectangle(position: Vec2, size: Vec2, color: Color) -> Self {
        Self::new(ShapeKind2d::Rectangle, position, size, color)
    }

    pub fn circle(position: Vec2, radius: f32, color: Color) -> Self {
        Self::new(
            ShapeKind2d::Circle {
                segments: DEFAULT_CIRCLE_SEGMENTS,
            },
            position,
            Vec2::splat(radius * 2.0),
            color,
        )
    }

    pub fn triangle(position: Vec2, size: f32, color: Color) -> Self {
        Self::new(ShapeKind2d::Triangle, position, Vec2::splat(size), color)
    }

    /// A star `size` across. Fewer than 3 points becomes 5, more than
    /// [`MAX_STAR_POINTS`] is clamped, and a fully transparent black color
    /// becomes [`Color::YELLOW`].
    pub fn star(position: Vec2, size: f32, points: u32, color: Color) -> Self {
        let points = star_points(points);
        let color = if color.is_blank() { Color::YELLOW } else { color };
        Self::new(ShapeKind2d::Star { points }, position, Vec2::splat(size), color)
    }

    /// A regular polygon. Sides are clamped to `3..=MAX_POLYGON_SIDES`.
    pub fn polygon(position: Vec2, radius: f32, sides: u32, color: Color) -> Self {
        Self::new(
            ShapeKind2d::Polygon { sides: polygon_sides(sides) },
            position,
            Vec2::splat(radius * 2.0),
            color,
        )
    }

    /// An arrow pointing along +x, turned by `direction` degrees.
    pub fn arrow(position: Vec2, size: f32, direction: f32, color: Color) -> Self {
        Self::new(ShapeKind2d::Arrow, position, Vec2::splat(size), color).rotated(direction)
    }

    /// A drop with the tip up, turned by `rotation` degrees.
    pub fn water_drop(position: Vec2, size: f32, rotation: f32, color: Color) -> Self {
        Self::new(ShapeKind2d::WaterDrop, position, Vec2::splat(size), color).rotated(rotation)
    }

    /// A stick-figure skeleton `size` tall.
    pub fn skeleton(position: Vec2, size: f32, color: Color) -> Self {
        Self::new(ShapeKind2d::Skeleton, position, Vec2::splat(size), color)
    }

    /// Draw as an outline of the given thickness.
    pub fn outlined(mut self, thickness: f32) -> Self {
        self.filled = false;
        self.thickness = thickness;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = normalize_degrees(degrees);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

// ── Mutation ──

impl Shape2d {
    /// Rotation in degrees, in `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    /// Advance rotation by `speed` degrees per second over `dt` seconds.
    pub fn rotate(&mut self, dt: f32, speed: f32) {
        if speed == 0.0 {
            return;
        }
        self.rotation = normalize_degrees(self.rotation + speed * dt);
    }
}

// ── Drawing ──

impl Shape2d {
    /// Draw at `position` with `rotation`, on top of the stack's current transform.
    ///
    /// Invisible shapes issue nothing. The stack depth is unchanged on return.
    pub fn draw<C: Canvas2d + ?Sized>(&self, canvas: &mut C, stack: &mut TransformStack) {
        if !self.visible {
            return;
        }
        stack.scoped(|stack| {
            stack.translate_2d(self.position);
            stack.rotate_z(self.rotation);
            self.draw_local(canvas, &stack.current());
        });
    }

    fn draw_local<C: Canvas2d + ?Sized>(&self, canvas: &mut C, t: &Mat4) {
        let (color, thickness) = (self.color, self.thickness);
        let s = self.size.x;

        match self.kind {
            ShapeKind2d::Square | ShapeKind2d::Rectangle => {
                let rect = Rect::from_center_size(Vec2::ZERO, self.size);
                if self.filled {
                    canvas.fill_rect(t, rect, color);
                } else {
                    canvas.stroke_rect(t, rect, thickness, color);
                }
            }
            ShapeKind2d::Circle { segments } => {
                if self.filled {
                    canvas.fill_circle(t, Vec2::ZERO, s * 0.5, segments, color);
                } else {
                    canvas.stroke_circle(t, Vec2::ZERO, s * 0.5, segments, thickness, color);
                }
            }
            ShapeKind2d::Triangle => {
                let points = triangle_vertices(s);
                if self.filled {
                    canvas.fill_triangle(t, points, color);
                } else {
                    canvas.stroke_triangle(t, points, thickness, color);
                }
            }
            ShapeKind2d::Star { points } => {
                let rim = star_vertices(points, s * 0.5);
                if self.filled {
                    canvas.fill_fan(t, Vec2::ZERO, &rim, color);
                } else {
                    canvas.stroke_polyline(t, &rim, true, thickness, color);
                }
            }
            ShapeKind2d::Polygon { sides } => {
                let rim = polygon_vertices(sides, s * 0.5);
                if self.filled {
                    canvas.fill_fan(t, Vec2::ZERO, &rim, color);
                } else {
                    canvas.stroke_polyline(t, &rim, true, thickness, color);
                }
            }
            ShapeKind2d::Arrow => {
                let shaft = Rect::new(Vec2::new(-s / 2.0, -s / 10.0), Vec2::new(s, s / 5.0));
                let head = [
                    Vec2::new(s / 2.0, 0.0),
                    Vec2::new(s / 4.0, -s / 4.0),
                    Vec2::new(s / 4.0, s / 4.0),
                ];
                if self.filled {
                    canvas.fill_rect(t, shaft, color);
                    canvas.fill_triangle(t, head, color);
                } else {
                    canvas.stroke_rect(t, shaft, thickness, color);
                    canvas.stroke_triangle(t, head, thickness, color);
                }
            }
            ShapeKind2d::WaterDrop => {
                let body = Vec2::new(0.0, 0.2 * s);
                let radius = 0.3 * s;
                let tip = [
                    Vec2::new(0.0, -s / 2.0),
                    Vec2::new(-radius, 0.2 * s),
                    Vec2::new(radius, 0.2 * s),
                ];
                if self.filled {
                    canvas.fill_circle(t, body, radius, DEFAULT_CIRCLE_SEGMENTS, color);
                    canvas.fill_triangle(t, tip, color);
                } else {
                    canvas.stroke_circle(t, body, radius, DEFAULT_CIRCLE_SEGMENTS, thickness, color);
                    canvas.stroke_triangle(t, tip, thickness, color);
                }
            }
            ShapeKind2d::Skeleton => {
                canvas.stroke_circle(
                    t,
                    Vec2::new(0.0, -0.36 * s),
                    0.12 * s,
                    DEFAULT_CIRCLE_SEGMENTS,
                    thickness,
                    color,
                );
                for [a, b] in skeleton_bones(s) {
                    canvas.line(t, a, b, thickness, color);
                }
            }
        }
    }
}

// ── Geometry ──

/// Upward-pointing triangle inscribed in a `size` square.
pub fn triangle_vertices(size: f32) -> [Vec2; 3] {
    let h = size / 2.0;
    [Vec2::new(0.0, -h), Vec2::new(-h, h), Vec2::new(h, h)]
}

/// Valid star point count: below 3 becomes 5, above [`MAX_STAR_POINTS`] clamps.
pub fn star_points(points: u32) -> u32 {
    if points < 3 { 5 } else { points.min(MAX_STAR_POINTS) }
}

/// Valid polygon side count in `3..=MAX_POLYGON_SIDES`.
pub fn polygon_sides(sides: u32) -> u32 {
    sides.clamp(3, MAX_POLYGON_SIDES)
}

/// `2 * points` vertices alternating between `outer` and `outer / 3`,
/// starting straight up. `points` goes through [`star_points`] first.
pub fn star_vertices(points: u32, outer: f32) -> Vec<Vec2> {
    let points = star_points(points);
    let inner = outer / 3.0;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f32 * PI / points as f32 - PI / 2.0;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Regular polygon of `radius`, vertex `i` at `i * 2π / sides`.
/// `sides` goes through [`polygon_sides`] first.
pub fn polygon_vertices(sides: u32, radius: f32) -> Vec<Vec2> {
    let sides = polygon_sides(sides);
    (0..sides)
        .map(|i| {
            let angle = i as f32 * TAU / sides as f32;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Line segments of the stick-figure skeleton, excluding the skull.
fn skeleton_bones(s: f32) -> [[Vec2; 2]; 10] {
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    [
        // spine
        [p(0.0, -0.24), p(0.0, 0.1)],
        // shoulders and hips
        [p(-0.18, -0.16), p(0.18, -0.16)],
        [p(-0.12, 0.1), p(0.12, 0.1)],
        // arms
        [p(-0.18, -0.16), p(-0.26, 0.06)],
        [p(0.18, -0.16), p(0.26, 0.06)],
        // legs
        [p(-0.1, 0.1), p(-0.14, 0.48)],
        [p(0.1, 0.1), p(0.14, 0.48)],
        // ribs
        [p(-0.1, -0.1), p(0.1, -0.1)],
        [p(-0.09, -0.04), p(0.09, -0.04)],
        [p(-0.08, 0.02), p(0.08, 0.02)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive2d;
    use crate::render2d::DrawList;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn constructors_set_defaults() {
        let c = Shape2d::circle(Vec2::new(1.0, 2.0), 10.0, Color::RED);
        assert_eq!(c.kind, ShapeKind2d::Circle { segments: 36 });
        assert_eq!(c.size, Vec2::splat(20.0));
        assert!(c.filled && c.visible);
        assert_eq!(c.thickness, 2.0);
        assert_eq!(c.rotation(), 0.0);

        let r = Shape2d::rectangle(Vec2::ZERO, Vec2::new(30.0, 10.0), Color::BLUE);
        assert_eq!(r.size, Vec2::new(30.0, 10.0));
        assert_eq!(Shape2d::square(Vec2::ZERO, 8.0, Color::BLUE).size, Vec2::splat(8.0));
    }

    #[test]
    fn star_clamps_points_and_defaults_color() {
        let s = Shape2d::star(Vec2::ZERO, 50.0, 2, Color::BLANK);
        assert_eq!(s.kind, ShapeKind2d::Star { points: 5 });
        assert_eq!(s.color, Color::YELLOW);
        let s = Shape2d::star(Vec2::ZERO, 50.0, 7, Color::BLACK);
        assert_eq!(s.kind, ShapeKind2d::Star { points: 7 });
        assert_eq!(s.color, Color::BLACK);
    }

    #[test]
    fn huge_star_is_clamped_and_draws() {
        let star = Shape2d::star(Vec2::ZERO, 50.0, 1 << 31, Color::GOLD);
        assert_eq!(star.kind, ShapeKind2d::Star { points: MAX_STAR_POINTS });
        let mut list = DrawList::new();
        star.draw(&mut list, &mut TransformStack::new());
        assert_eq!(list.commands()[0].index_count, MAX_STAR_POINTS * 2 * 3);
    }

    #[test]
    fn hand_built_kinds_are_sanitized_when_drawn() {
        let mut star = Shape2d::star(Vec2::ZERO, 50.0, 5, Color::GOLD);
        star.kind = ShapeKind2d::Star { points: 1 };
        let mut list = DrawList::new();
        star.draw(&mut list, &mut TransformStack::new());
        // five points, ten rim vertices, ten fan triangles
        assert_eq!(list.commands()[0].index_count, 30);

        let mut poly = Shape2d::polygon(Vec2::ZERO, 5.0, 6, Color::GREEN);
        poly.kind = ShapeKind2d::Polygon { sides: u32::MAX };
        list.clear();
        poly.draw(&mut list, &mut TransformStack::new());
        assert_eq!(list.commands()[0].index_count, MAX_POLYGON_SIDES * 3);
    }

    #[test]
    fn polygon_clamps_sides() {
        let p = Shape2d::polygon(Vec2::ZERO, 5.0, 1, Color::GREEN);
        assert_eq!(p.kind, ShapeKind2d::Polygon { sides: 3 });
        assert_eq!(p.size, Vec2::splat(10.0));
    }

    #[test]
    fn arrow_direction_is_normalized() {
        assert_eq!(Shape2d::arrow(Vec2::ZERO, 10.0, -90.0, Color::RED).rotation(), 270.0);
        assert_eq!(Shape2d::arrow(Vec2::ZERO, 10.0, 720.0, Color::RED).rotation(), 0.0);
    }

    #[test]
    fn fields_round_trip() {
        let mut s = Shape2d::triangle(Vec2::ZERO, 10.0, Color::RED);
        s.set_position(Vec2::new(-3.5, 12.25));
        s.set_color(Color::rgba(1, 2, 3, 4));
        s.set_rotation(45.0);
        s.set_visible(false);
        s.set_filled(false);
        assert_eq!(s.position, Vec2::new(-3.5, 12.25));
        assert_eq!(s.color, Color::rgba(1, 2, 3, 4));
        assert_eq!(s.rotation(), 45.0);
        assert!(!s.visible && !s.filled);
    }

    #[test]
    fn rotate_stays_in_range() {
        let mut s = Shape2d::square(Vec2::ZERO, 1.0, Color::RED);
        for (dt, speed) in [(0.016, 90.0), (1.0, -1000.0), (3.7, 1e5), (0.5, -0.001), (100.0, 359.0)] {
            s.rotate(dt, speed);
            assert!((0.0..360.0).contains(&s.rotation()), "{dt} {speed} -> {}", s.rotation());
        }
    }

    #[test]
    fn rotate_with_zero_speed_is_noop() {
        let mut s = Shape2d::square(Vec2::ZERO, 1.0, Color::RED).rotated(33.0);
        s.rotate(10.0, 0.0);
        assert_eq!(s.rotation(), 33.0);
    }

    #[test]
    fn star_geometry() {
        let rim = star_vertices(5, 25.0);
        assert_eq!(rim.len(), 10);
        for (i, v) in rim.iter().enumerate() {
            let expected = if i % 2 == 0 { 25.0 } else { 25.0 / 3.0 };
            assert!(approx(v.length(), expected), "vertex {i}: {}", v.length());
        }
        // vertex 0 points straight up (screen space)
        assert!(approx(rim[0].x, 0.0) && approx(rim[0].y, -25.0));
    }

    #[test]
    fn filled_star_is_one_fan() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::star(Vec2::ZERO, 50.0, 5, Color::GOLD).draw(&mut list, &mut stack);
        assert_eq!(list.primitives(), vec![Primitive2d::Fan]);
        // center + 10 rim vertices, one triangle per rim pair
        assert_eq!(list.vertices().len(), 11);
        assert_eq!(list.indices().len(), 30);
    }

    #[test]
    fn outlined_star_is_closed_polyline() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::star(Vec2::ZERO, 50.0, 5, Color::GOLD)
            .outlined(1.0)
            .draw(&mut list, &mut stack);
        assert_eq!(list.primitives(), vec![Primitive2d::Polyline]);
        assert_eq!(list.indices().len(), 10 * 6);
    }

    #[test]
    fn polygon_vertex_zero_on_x_axis() {
        let rim = polygon_vertices(6, 4.0);
        assert_eq!(rim.len(), 6);
        assert!(approx(rim[0].x, 4.0) && approx(rim[0].y, 0.0));
    }

    #[test]
    fn draw_is_placed_and_balanced() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::circle(Vec2::new(30.0, 40.0), 5.0, Color::RED).draw(&mut list, &mut stack);
        assert_eq!(stack.depth(), 0);
        assert_eq!(list.commands()[0].origin(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn invisible_draws_nothing() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::circle(Vec2::ZERO, 5.0, Color::RED)
            .hidden()
            .draw(&mut list, &mut stack);
        assert!(list.is_empty());
    }

    #[test]
    fn outline_kinds_use_stroke_primitives() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        for shape in [
            Shape2d::square(Vec2::ZERO, 10.0, Color::RED),
            Shape2d::circle(Vec2::ZERO, 10.0, Color::RED),
            Shape2d::triangle(Vec2::ZERO, 10.0, Color::RED),
        ] {
            shape.outlined(2.0).draw(&mut list, &mut stack);
        }
        assert_eq!(
            list.primitives(),
            vec![
                Primitive2d::RectOutline,
                Primitive2d::CircleOutline,
                Primitive2d::TriangleOutline
            ]
        );
    }

    #[test]
    fn arrow_is_shaft_then_head() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::arrow(Vec2::ZERO, 20.0, 0.0, Color::RED).draw(&mut list, &mut stack);
        assert_eq!(list.primitives(), vec![Primitive2d::Rect, Primitive2d::Triangle]);
        let head = list.command_positions(&list.commands()[1]);
        assert!(head.contains(&Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn water_drop_is_body_and_tip() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::water_drop(Vec2::ZERO, 10.0, 0.0, Color::BLUE).draw(&mut list, &mut stack);
        assert_eq!(list.primitives(), vec![Primitive2d::Circle, Primitive2d::Triangle]);
        let tip = list.command_positions(&list.commands()[1]);
        assert!(tip.contains(&Vec2::new(0.0, -5.0)));
    }

    #[test]
    fn skeleton_strokes_skull_and_bones() {
        let mut list = DrawList::new();
        let mut stack = TransformStack::new();
        Shape2d::skeleton(Vec2::ZERO, 100.0, Color::WHITE).draw(&mut list, &mut stack);
        let prims = list.primitives();
        assert_eq!(prims[0], Primitive2d::CircleOutline);
        assert_eq!(prims.iter().filter(|p| **p == Primitive2d::Line).count(), 10);
        assert_eq!(stack.depth(), 0);
    }
}
