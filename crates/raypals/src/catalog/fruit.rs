//! Fruit.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

pub fn apple(position: Vec2, size: f32, skin: Color, stem: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "apple",
        position,
        vec![
            Shape2d::circle(p(-0.1, 0.05), s * 0.32, skin),
            Shape2d::circle(p(0.1, 0.05), s * 0.32, skin),
            Shape2d::rectangle(p(0.0, -0.32), p(0.06, 0.18), stem).rotated(10.0),
            Shape2d::triangle(p(0.12, -0.33), s * 0.16, Color::GREEN).rotated(60.0),
            Shape2d::circle(p(-0.15, -0.05), s * 0.06, Color::WHITE.with_alpha(150)),
        ],
    )
}

/// A curved bunch approximated by three rotated segments.
pub fn banana(position: Vec2, size: f32, skin: Color, tip: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "banana",
        position,
        vec![
            Shape2d::rectangle(p(-0.28, -0.08), p(0.36, 0.16), skin).rotated(35.0),
            Shape2d::rectangle(p(0.0, 0.05), p(0.36, 0.18), skin),
            Shape2d::rectangle(p(0.28, -0.08), p(0.36, 0.16), skin).rotated(-35.0),
            Shape2d::rectangle(p(-0.43, -0.22), p(0.06, 0.08), tip).rotated(35.0),
            Shape2d::rectangle(p(0.43, -0.22), p(0.06, 0.08), tip).rotated(-35.0),
        ],
    )
}

pub fn orange(position: Vec2, size: f32, peel: Color, leaf: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "orange",
        position,
        vec![
            Shape2d::circle(Vec2::ZERO, s * 0.4, peel),
            Shape2d::circle(p(-0.12, -0.12), s * 0.08, peel.brighten(50)),
            Shape2d::circle(p(0.0, -0.38), s * 0.04, Color::DARKBROWN),
            Shape2d::triangle(p(0.1, -0.42), s * 0.14, leaf).rotated(70.0),
        ],
    )
}

/// A wedge slice, point down, rind along the top edge, with seeds.
pub fn watermelon(position: Vec2, size: f32, rind: Color, flesh: Color, seed: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut shapes = vec![
        Shape2d::triangle(Vec2::ZERO, s, flesh).rotated(180.0),
        Shape2d::rectangle(p(0.0, -0.42), p(0.84, 0.06), Color::RAYWHITE),
        Shape2d::rectangle(p(0.0, -0.5), p(1.0, 0.1), rind),
    ];
    for (x, y) in [(-0.2, -0.25), (0.0, -0.2), (0.2, -0.25), (-0.08, -0.02), (0.08, -0.02)] {
        shapes.push(Shape2d::water_drop(p(x, y), s * 0.06, 180.0, seed));
    }
    assemble("watermelon", position, shapes)
}

/// A single grape on a short stem.
pub fn grape(position: Vec2, size: f32, color: Color, stem: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "grape",
        position,
        vec![
            Shape2d::rectangle(p(0.0, -0.4), p(0.06, 0.2), stem),
            Shape2d::circle(Vec2::ZERO, s * 0.35, color),
            Shape2d::circle(p(-0.12, -0.12), s * 0.08, Color::WHITE.with_alpha(150)),
        ],
    )
}

/// A downward-pointing bunch of grapes.
pub fn grapes(position: Vec2, size: f32, color: Color, stem: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut shapes = vec![
        Shape2d::rectangle(p(0.0, -0.42), p(0.05, 0.18), stem),
        Shape2d::triangle(p(0.12, -0.4), s * 0.15, Color::GREEN).rotated(90.0),
    ];
    let rows: [&[f32]; 4] = [&[-0.24, -0.08, 0.08, 0.24], &[-0.16, 0.0, 0.16], &[-0.08, 0.08], &[0.0]];
    for (row, xs) in rows.iter().enumerate() {
        let y = -0.25 + row as f32 * 0.15;
        for &x in xs.iter() {
            shapes.push(Shape2d::circle(p(x, y), s * 0.09, color));
        }
    }
    assemble("grapes", position, shapes)
}
