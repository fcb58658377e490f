//! Vehicles, drawn side-on facing right unless noted.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

pub fn car(position: Vec2, size: f32, body: Color, detail: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "car",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.0), p(1.0, 0.5), body),
            Shape2d::rectangle(p(-0.1, -0.15), p(0.5, 0.3), body),
            Shape2d::circle(p(-0.3, 0.25), s * 0.15, detail),
            Shape2d::circle(p(0.3, 0.25), s * 0.15, detail),
            Shape2d::rectangle(p(-0.1, -0.15), p(0.4, 0.24), Color::SKYBLUE),
        ],
    )
}

pub fn tank(position: Vec2, size: f32, body: Color, detail: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "tank",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.15), p(1.1, 0.2), detail),
            Shape2d::rectangle(p(0.0, 0.0), p(1.2, 0.5), body),
            Shape2d::circle(p(0.0, -0.2), s * 0.25, body),
            Shape2d::rectangle(p(0.4, -0.2), p(0.6, 0.1), body),
        ],
    )
}

pub fn motorcycle(position: Vec2, size: f32, body: Color, detail: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "motorcycle",
        position,
        vec![
            Shape2d::circle(p(-0.3, 0.1), s * 0.2, detail),
            Shape2d::circle(p(0.3, 0.1), s * 0.2, detail),
            Shape2d::rectangle(p(0.0, -0.1), p(0.8, 0.15), body),
            Shape2d::rectangle(p(0.3, -0.2), p(0.1, 0.2), body),
            Shape2d::rectangle(p(-0.1, -0.2), p(0.3, 0.1), Color::BLACK),
        ],
    )
}

pub fn skateboard(position: Vec2, size: f32, deck: Color, wheels: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "skateboard",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.0), p(1.0, 0.25), deck),
            Shape2d::rectangle(p(-0.35, 0.15), p(0.15, 0.1), wheels),
            Shape2d::rectangle(p(0.35, 0.15), p(0.15, 0.1), wheels),
        ],
    )
}

pub fn sailboat(position: Vec2, size: f32, hull: Color, sail: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "sailboat",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.35), p(1.1, 0.05), Color::BLUE),
            Shape2d::rectangle(p(0.0, 0.2), p(1.0, 0.3), hull),
            Shape2d::rectangle(p(0.0, 0.0), p(0.05, 0.7), Color::BROWN),
            Shape2d::triangle(p(0.0, -0.2), s * 0.8, sail).rotated(90.0),
        ],
    )
}

pub fn airplane(position: Vec2, size: f32, body: Color, wings: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "airplane",
        position,
        vec![
            Shape2d::triangle(p(-0.42, -0.15), s * 0.3, wings).rotated(-90.0),
            Shape2d::rectangle(p(0.0, 0.0), p(0.9, 0.2), body),
            Shape2d::circle(p(0.45, 0.0), s * 0.1, body),
            Shape2d::rectangle(p(0.0, 0.05), p(0.3, 0.6), wings).rotated(15.0),
            Shape2d::rectangle(p(0.3, -0.03), p(0.12, 0.08), Color::SKYBLUE.brighten(60)),
            Shape2d::rectangle(p(0.56, 0.0), p(0.03, 0.3), Color::DARKGRAY),
        ],
    )
}

/// Flying saucer with a glass dome and running lights.
pub fn ufo(position: Vec2, size: f32, hull: Color, dome: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut shapes = vec![
        Shape2d::triangle(p(0.0, 0.35), s * 0.4, dome.with_alpha(80)),
        Shape2d::circle(p(0.0, -0.1), s * 0.22, dome.with_alpha(200)),
        Shape2d::rectangle(p(0.0, 0.05), p(1.0, 0.16), hull),
        Shape2d::rectangle(p(0.0, 0.14), p(0.6, 0.08), hull.scale(0.7)),
    ];
    for x in [-0.3, 0.0, 0.3] {
        shapes.push(Shape2d::circle(p(x, 0.05), s * 0.035, Color::YELLOW));
    }
    assemble("ufo", position, shapes)
}

/// Barrel on a wheeled carriage, aimed up and to the right.
pub fn cannon(position: Vec2, size: f32, barrel: Color, wheels: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "cannon",
        position,
        vec![
            Shape2d::rectangle(p(0.1, -0.1), p(0.8, 0.2), barrel).rotated(-20.0),
            Shape2d::circle(p(-0.25, -0.02), s * 0.13, barrel),
            Shape2d::rectangle(p(-0.1, 0.12), p(0.6, 0.12), Color::BROWN),
            Shape2d::circle(p(-0.2, 0.22), s * 0.16, wheels),
            Shape2d::circle(p(-0.2, 0.22), s * 0.05, Color::GRAY),
        ],
    )
}
