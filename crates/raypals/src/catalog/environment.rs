//! Scenery: trees, buildings, weather and terrain.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

pub fn simple_tree(position: Vec2, size: f32, trunk: Color, leaves: Color) -> Sprite2d {
    let s = size;
    assemble(
        "simple_tree",
        position,
        vec![
            Shape2d::rectangle(Vec2::new(0.0, s / 4.0), Vec2::new(s / 5.0, s / 2.0), trunk),
            Shape2d::triangle(Vec2::new(0.0, -s / 3.0), s, leaves),
        ],
    )
}

pub fn cloud(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let s = size;
    assemble(
        "cloud",
        position,
        vec![
            Shape2d::circle(Vec2::new(-s / 3.0, 0.0), s / 3.0, color),
            Shape2d::circle(Vec2::new(0.0, -s / 4.0), s / 2.5, color),
            Shape2d::circle(Vec2::new(s / 3.0, 0.0), s / 3.0, color),
            Shape2d::circle(Vec2::new(0.0, s / 8.0), s / 3.0, color),
        ],
    )
}

pub fn house(position: Vec2, size: f32, wall: Color, roof: Color) -> Sprite2d {
    let s = size;
    assemble(
        "house",
        position,
        vec![
            Shape2d::rectangle(Vec2::new(0.0, s / 8.0), Vec2::new(s, s * 0.8), wall),
            Shape2d::triangle(Vec2::new(0.0, -s / 2.0), s * 1.2, roof),
            Shape2d::rectangle(Vec2::new(0.0, s / 3.0), Vec2::new(s / 4.0, s / 3.0), Color::BROWN),
            Shape2d::rectangle(Vec2::new(-s / 3.0, 0.0), Vec2::splat(s / 5.0), Color::SKYBLUE),
            Shape2d::rectangle(Vec2::new(s / 3.0, 0.0), Vec2::splat(s / 5.0), Color::SKYBLUE),
        ],
    )
}

/// Keep with two towers, crenellations and a gate.
pub fn castle(position: Vec2, size: f32, stone: Color, roof: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut shapes = vec![
        Shape2d::rectangle(p(0.0, 0.15), p(0.8, 0.6), stone),
        Shape2d::rectangle(p(-0.45, 0.05), p(0.25, 0.8), stone),
        Shape2d::rectangle(p(0.45, 0.05), p(0.25, 0.8), stone),
        Shape2d::triangle(p(-0.45, -0.47), s * 0.3, roof),
        Shape2d::triangle(p(0.45, -0.47), s * 0.3, roof),
    ];
    for x in [-0.3, -0.1, 0.1, 0.3] {
        shapes.push(Shape2d::square(p(x, -0.19), s * 0.1, stone));
    }
    shapes.extend([
        Shape2d::rectangle(p(0.0, 0.3), p(0.22, 0.3), Color::DARKBROWN),
        Shape2d::circle(p(0.0, 0.15), s * 0.11, Color::DARKBROWN),
        Shape2d::rectangle(p(-0.45, -0.05), p(0.06, 0.12), Color::BLACK),
        Shape2d::rectangle(p(0.45, -0.05), p(0.06, 0.12), Color::BLACK),
    ]);
    assemble("castle", position, shapes)
}

pub fn bush(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let s = size;
    assemble(
        "bush",
        position,
        vec![
            Shape2d::circle(Vec2::new(-s / 4.0, 0.0), s / 2.0, color),
            Shape2d::circle(Vec2::new(s / 4.0, 0.0), s / 2.0, color),
            Shape2d::circle(Vec2::new(0.0, -s / 4.0), s / 2.0, color),
        ],
    )
}

pub fn rock(position: Vec2, size: f32, color: Color) -> Sprite2d {
    assemble("rock", position, vec![Shape2d::circle(Vec2::ZERO, size / 2.0, color)])
}

/// Four petals, a petal-colored ring and a center disc.
pub fn flower(position: Vec2, size: f32, petal: Color, center: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "flower",
        position,
        vec![
            Shape2d::circle(p(0.0, -0.25), s * 0.3, petal),
            Shape2d::circle(p(0.25, 0.0), s * 0.3, petal),
            Shape2d::circle(p(0.0, 0.25), s * 0.3, petal),
            Shape2d::circle(p(-0.25, 0.0), s * 0.3, petal),
            Shape2d::circle(Vec2::ZERO, s * 0.39, petal).outlined(2.0),
            Shape2d::circle(Vec2::ZERO, s * 0.2, center),
        ],
    )
}

/// A falling sheet of water, `width` by `height`, with streaks, a lip and
/// splash drops at the bottom.
pub fn waterfall(position: Vec2, width: f32, height: f32, color: Color) -> Sprite2d {
    let (w, h) = (width, height);
    let streak = color.brighten(60);
    let mut shapes = vec![
        Shape2d::rectangle(Vec2::new(0.0, -h * 0.5), Vec2::new(w * 1.2, h * 0.08), Color::GRAY),
        Shape2d::rectangle(Vec2::ZERO, Vec2::new(w, h), color),
    ];
    for x in [-0.3, 0.0, 0.3] {
        shapes.push(Shape2d::rectangle(
            Vec2::new(x * w, 0.0),
            Vec2::new(w * 0.06, h * 0.8),
            streak,
        ));
    }
    for (x, r) in [(-0.35, 0.14), (0.0, 0.18), (0.35, 0.14)] {
        shapes.push(Shape2d::circle(Vec2::new(x * w, h * 0.5), w * r, streak));
    }
    shapes.push(Shape2d::water_drop(Vec2::new(-w * 0.55, h * 0.4), w * 0.12, -30.0, color));
    shapes.push(Shape2d::water_drop(Vec2::new(w * 0.55, h * 0.4), w * 0.12, 30.0, color));
    assemble("waterfall", position, shapes)
}

/// Concentric rings fading toward the center.
pub fn portal(position: Vec2, size: f32, outer: Color, inner: Color) -> Sprite2d {
    let s = size;
    assemble(
        "portal",
        position,
        vec![
            Shape2d::circle(Vec2::ZERO, s * 0.5, outer.with_alpha(90)),
            Shape2d::circle(Vec2::ZERO, s * 0.42, outer),
            Shape2d::circle(Vec2::ZERO, s * 0.32, inner),
            Shape2d::circle(Vec2::ZERO, s * 0.22, inner.brighten(60)),
            Shape2d::circle(Vec2::ZERO, s * 0.1, Color::WHITE),
            Shape2d::circle(Vec2::ZERO, s * 0.47, Color::WHITE.with_alpha(160)).outlined(2.0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind2d;

    #[test]
    fn tree_trunk_then_canopy() {
        let t = simple_tree(Vec2::ZERO, 80.0, Color::BROWN, Color::GREEN);
        let trunk = &t.shapes()[0];
        assert_eq!(trunk.position, Vec2::new(0.0, 20.0));
        assert_eq!(trunk.size, Vec2::new(16.0, 40.0));
        assert_eq!(t.shapes()[1].kind, ShapeKind2d::Triangle);
        assert_eq!(t.shapes()[1].color, Color::GREEN);
    }

    #[test]
    fn house_details_use_fixed_colors() {
        let h = house(Vec2::ZERO, 80.0, Color::MAROON, Color::DARKBROWN);
        assert_eq!(h.shape_count(), 5);
        assert_eq!(h.shapes()[2].color, Color::BROWN);
        assert_eq!(h.shapes()[3].color, Color::SKYBLUE);
    }

    #[test]
    fn flower_ring_is_outlined() {
        let f = flower(Vec2::ZERO, 60.0, Color::PINK, Color::YELLOW);
        let ring = &f.shapes()[4];
        assert!(!ring.filled);
        assert_eq!(ring.thickness, 2.0);
        assert_eq!(f.shapes()[5].color, Color::YELLOW);
    }

    #[test]
    fn waterfall_ends_with_drops() {
        let w = waterfall(Vec2::ZERO, 60.0, 90.0, Color::SKYBLUE);
        let n = w.shape_count();
        assert_eq!(w.shapes()[n - 1].kind, ShapeKind2d::WaterDrop);
        assert_eq!(w.shapes()[1].size, Vec2::new(60.0, 90.0));
    }
}
