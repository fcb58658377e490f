//! Monsters.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

/// Round body over a row of three triangles, with black eyes.
pub fn ghost(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "ghost",
        position,
        vec![
            Shape2d::circle(p(0.0, -0.15), s * 0.4, color),
            Shape2d::triangle(p(-0.3, 0.3), s * 0.3, color),
            Shape2d::triangle(p(0.0, 0.3), s * 0.3, color),
            Shape2d::triangle(p(0.3, 0.3), s * 0.3, color),
            Shape2d::circle(p(-0.15, -0.2), s * 0.07, Color::BLACK),
            Shape2d::circle(p(0.15, -0.2), s * 0.07, Color::BLACK),
        ],
    )
}

pub fn zombie(position: Vec2, size: f32, skin: Color, clothes: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let trousers = clothes.scale(0.7);
    assemble(
        "zombie",
        position,
        vec![
            Shape2d::rectangle(p(-0.1, 0.35), p(0.12, 0.3), trousers),
            Shape2d::rectangle(p(0.1, 0.35), p(0.12, 0.3), trousers),
            Shape2d::rectangle(p(0.0, 0.05), p(0.4, 0.35), clothes),
            Shape2d::rectangle(p(0.25, -0.05), p(0.35, 0.08), skin),
            Shape2d::rectangle(p(0.22, 0.06), p(0.3, 0.08), skin),
            Shape2d::square(p(0.0, -0.28), s * 0.25, skin).rotated(8.0),
            Shape2d::circle(p(-0.05, -0.3), s * 0.03, Color::RED),
            Shape2d::circle(p(0.05, -0.28), s * 0.02, Color::RED),
            Shape2d::rectangle(p(0.0, -0.2), p(0.1, 0.02), Color::DARKGRAY),
        ],
    )
}

/// A stick-figure skeleton with dark eye sockets.
pub fn skeleton_sprite(position: Vec2, size: f32, bone: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut bones = Shape2d::skeleton(Vec2::ZERO, s, bone);
    bones.thickness = (s * 0.03).max(1.0);
    assemble(
        "skeleton_sprite",
        position,
        vec![
            bones,
            Shape2d::circle(p(-0.04, -0.37), s * 0.025, Color::BLACK),
            Shape2d::circle(p(0.04, -0.37), s * 0.025, Color::BLACK),
        ],
    )
}

pub fn frankenstein(position: Vec2, size: f32, skin: Color, clothes: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "frankenstein",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.15), p(0.5, 0.45), clothes),
            Shape2d::rectangle(p(-0.19, -0.2), p(0.06, 0.04), Color::GRAY),
            Shape2d::rectangle(p(0.19, -0.2), p(0.06, 0.04), Color::GRAY),
            Shape2d::rectangle(p(0.0, -0.25), p(0.32, 0.34), skin),
            Shape2d::rectangle(p(0.0, -0.4), p(0.34, 0.06), Color::BLACK),
            Shape2d::rectangle(p(0.0, -0.34), p(0.14, 0.015), Color::DARKGRAY),
            Shape2d::rectangle(p(-0.07, -0.27), p(0.06, 0.03), Color::BLACK),
            Shape2d::rectangle(p(0.07, -0.27), p(0.06, 0.03), Color::BLACK),
            Shape2d::rectangle(p(0.0, -0.13), p(0.14, 0.02), Color::BLACK),
        ],
    )
}

pub fn dracula(position: Vec2, size: f32, cape: Color, skin: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "dracula",
        position,
        vec![
            Shape2d::triangle(p(0.0, 0.1), s * 0.8, cape),
            Shape2d::rectangle(p(0.0, 0.12), p(0.26, 0.5), Color::BLACK),
            Shape2d::circle(p(0.0, -0.25), s * 0.14, skin),
            Shape2d::triangle(p(0.0, -0.34), s * 0.18, Color::BLACK).rotated(180.0),
            Shape2d::circle(p(-0.05, -0.26), s * 0.02, Color::RED),
            Shape2d::circle(p(0.05, -0.26), s * 0.02, Color::RED),
            Shape2d::triangle(p(-0.025, -0.16), s * 0.03, Color::WHITE).rotated(180.0),
            Shape2d::triangle(p(0.025, -0.16), s * 0.03, Color::WHITE).rotated(180.0),
        ],
    )
}

pub fn werewolf(position: Vec2, size: f32, fur: Color, eyes: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "werewolf",
        position,
        vec![
            Shape2d::circle(p(0.0, 0.12), s * 0.3, fur),
            Shape2d::triangle(p(-0.3, 0.3), s * 0.08, Color::WHITE).rotated(180.0),
            Shape2d::triangle(p(0.3, 0.3), s * 0.08, Color::WHITE).rotated(180.0),
            Shape2d::triangle(p(-0.12, -0.42), s * 0.14, fur),
            Shape2d::triangle(p(0.12, -0.42), s * 0.14, fur),
            Shape2d::circle(p(0.0, -0.25), s * 0.18, fur),
            Shape2d::rectangle(p(0.0, -0.18), p(0.14, 0.1), fur.scale(0.8)),
            Shape2d::circle(p(0.0, -0.22), s * 0.025, Color::BLACK),
            Shape2d::circle(p(-0.07, -0.29), s * 0.03, eyes),
            Shape2d::circle(p(0.07, -0.29), s * 0.03, eyes),
        ],
    )
}

pub fn mummy(position: Vec2, size: f32, bandage: Color, eyes: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let wrap = bandage.scale(0.8);
    let mut shapes = vec![
        Shape2d::rectangle(p(0.25, -0.02), p(0.3, 0.08), bandage),
        Shape2d::rectangle(p(0.25, 0.1), p(0.3, 0.08), bandage),
        Shape2d::rectangle(p(0.0, 0.1), p(0.4, 0.6), bandage),
        Shape2d::circle(p(0.0, -0.3), s * 0.16, bandage),
    ];
    for y in [-0.1, 0.05, 0.2, 0.35] {
        shapes.push(Shape2d::rectangle(p(0.0, y), p(0.42, 0.025), wrap));
    }
    shapes.push(Shape2d::rectangle(p(0.0, -0.36), p(0.3, 0.025), wrap));
    shapes.push(Shape2d::circle(p(-0.06, -0.3), s * 0.03, eyes));
    shapes.push(Shape2d::circle(p(0.06, -0.3), s * 0.03, eyes));
    assemble("mummy", position, shapes)
}

/// A side-on dragon facing right with raised wings.
pub fn dragon(position: Vec2, size: f32, body: Color, wings: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "dragon",
        position,
        vec![
            Shape2d::triangle(p(-0.15, -0.25), s * 0.5, wings).rotated(-30.0),
            Shape2d::triangle(p(0.15, -0.25), s * 0.5, wings).rotated(30.0),
            Shape2d::triangle(p(-0.42, 0.15), s * 0.3, body).rotated(-90.0),
            Shape2d::circle(p(0.0, 0.0), s * 0.3, body),
            Shape2d::circle(p(0.0, 0.05), s * 0.18, body.brighten(40)),
            Shape2d::triangle(p(0.32, -0.42), s * 0.08, Color::WHITE),
            Shape2d::circle(p(0.35, -0.25), s * 0.15, body),
            Shape2d::circle(p(0.4, -0.28), s * 0.03, Color::YELLOW),
        ],
    )
}
