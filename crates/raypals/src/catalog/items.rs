//! Items, pickups and effects.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

/// Upright sword, point up.
pub fn sword(position: Vec2, size: f32, blade: Color, hilt: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "sword",
        position,
        vec![
            Shape2d::rectangle(p(0.0, -0.15), p(0.15, 0.6), blade),
            Shape2d::triangle(p(0.0, -0.5), s * 0.15, blade),
            Shape2d::rectangle(p(0.0, 0.3), p(0.08, 0.3), hilt),
            Shape2d::rectangle(p(0.0, 0.1), p(0.4, 0.08), hilt),
        ],
    )
}

/// Horizontal arrow pointing right.
pub fn arrow_sprite(position: Vec2, size: f32, shaft: Color, head: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "arrow_sprite",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.0), p(0.8, 0.1), shaft),
            Shape2d::triangle(p(0.5, 0.0), s * 0.3, head).rotated(90.0),
            Shape2d::triangle(p(-0.4, 0.0), s * 0.2, head).rotated(-90.0),
        ],
    )
}

/// Five-point star with a brighter inner star. A blank color means yellow.
pub fn star_sprite(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let color = if color.is_blank() { Color::YELLOW } else { color };
    assemble(
        "star_sprite",
        position,
        vec![
            Shape2d::star(Vec2::ZERO, size * 1.2, 5, color),
            Shape2d::star(Vec2::ZERO, size * 0.7, 5, color.brighten(40)),
        ],
    )
}

/// [`star_sprite`] in pure yellow, slightly larger.
pub fn yellow_star(position: Vec2, size: f32) -> Sprite2d {
    star_sprite(position, size * 1.2, Color::rgb(255, 255, 0))
}

pub fn coin(position: Vec2, size: f32, color: Color) -> Sprite2d {
    assemble(
        "coin",
        position,
        vec![
            Shape2d::circle(Vec2::ZERO, size / 2.0, color),
            Shape2d::circle(Vec2::ZERO, size * 0.35, color.scale(0.8)).outlined(2.0),
        ],
    )
}

pub fn key(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "key",
        position,
        vec![
            Shape2d::circle(p(0.3, 0.0), s * 0.2, color),
            Shape2d::rectangle(p(-0.15, 0.0), p(0.7, 0.1), color),
            Shape2d::rectangle(p(-0.4, 0.0), p(0.2, 0.3), color),
        ],
    )
}

/// Point-down shield with a trim outline.
pub fn shield(position: Vec2, size: f32, body: Color, trim: Color) -> Sprite2d {
    assemble(
        "shield",
        position,
        vec![
            Shape2d::triangle(Vec2::ZERO, size * 1.05, trim).rotated(180.0).outlined(2.0),
            Shape2d::triangle(Vec2::ZERO, size, body).rotated(180.0),
        ],
    )
}

pub fn crown(position: Vec2, size: f32, gold: Color, gems: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "crown",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.1), p(1.0, 0.3), gold),
            Shape2d::triangle(p(-0.3, -0.1), s * 0.2, gold),
            Shape2d::triangle(p(0.0, -0.2), s * 0.3, gold),
            Shape2d::triangle(p(0.3, -0.1), s * 0.2, gold),
            Shape2d::circle(p(-0.3, 0.0), s * 0.1, gems),
            Shape2d::circle(p(0.0, -0.1), s * 0.12, gems),
            Shape2d::circle(p(0.3, 0.0), s * 0.1, gems),
        ],
    )
}

/// Zig-zag bolt of rotated bars over a translucent glow.
pub fn lightning_bolt(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let s = size;
    let w = s * 0.2;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let glow = color.with_alpha(120);
    assemble(
        "lightning_bolt",
        position,
        vec![
            Shape2d::rectangle(p(-0.1, -0.4), Vec2::new(w * 1.5, s * 0.3), glow).rotated(-35.0),
            Shape2d::rectangle(p(0.0, 0.2), Vec2::new(w * 1.5, s * 0.375), glow).rotated(45.0),
            Shape2d::rectangle(p(-0.1, -0.4), Vec2::new(w, s * 0.2), color).rotated(-35.0),
            Shape2d::rectangle(p(-0.15, -0.2), Vec2::new(w, s * 0.25), color).rotated(40.0),
            Shape2d::rectangle(p(0.0, 0.0), Vec2::new(w, s * 0.2), color).rotated(-35.0),
            Shape2d::rectangle(p(0.0, 0.2), Vec2::new(w, s * 0.25), color).rotated(45.0),
        ],
    )
}

/// Fish facing left, tail on the right.
pub fn fish(position: Vec2, size: f32, body: Color, fin: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "fish",
        position,
        vec![
            Shape2d::triangle(p(0.4, 0.0), s * 0.3, fin).rotated(90.0),
            Shape2d::circle(Vec2::ZERO, s * 0.4, body),
            Shape2d::triangle(p(0.0, -0.3), s * 0.2, fin),
            Shape2d::triangle(p(0.0, 0.3), s * 0.2, fin).rotated(180.0),
            Shape2d::circle(p(-0.2, -0.08), s * 0.05, Color::BLACK),
        ],
    )
}

/// Octagonal cut gem with a highlight and a sparkle.
pub fn gem(position: Vec2, size: f32, color: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "gem",
        position,
        vec![
            Shape2d::polygon(Vec2::ZERO, s * 0.51, 8, Color::BLACK).rotated(22.5).outlined(1.5),
            Shape2d::polygon(Vec2::ZERO, s * 0.5, 8, color).rotated(22.5),
            Shape2d::polygon(p(-0.05, -0.05), s * 0.3, 8, color.brighten(80)).rotated(22.5),
            Shape2d::star(p(-0.15, -0.15), s * 0.15, 4, Color::WHITE),
        ],
    )
}

/// Layered spiky burst with a hot core.
pub fn explosion(position: Vec2, size: f32, outer: Color, inner: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut shapes = vec![
        Shape2d::star(Vec2::ZERO, s * 1.1, 10, outer),
        Shape2d::star(Vec2::ZERO, s * 0.8, 8, inner).rotated(20.0),
        Shape2d::circle(Vec2::ZERO, s * 0.2, Color::WHITE),
    ];
    for (x, y) in [(-0.45, -0.35), (0.5, -0.2), (-0.35, 0.45), (0.4, 0.4)] {
        shapes.push(Shape2d::circle(p(x, y), s * 0.06, outer.with_alpha(180)));
    }
    assemble("explosion", position, shapes)
}

/// Chest with a gold band and lock. An open chest shows a raised lid and
/// coins inside.
pub fn treasure_chest(position: Vec2, size: f32, wood: Color, gold: Color, is_open: bool) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let mut shapes = Vec::with_capacity(9);
    if is_open {
        shapes.push(Shape2d::rectangle(p(0.0, -0.4), p(0.9, 0.2), wood.scale(0.8)));
        shapes.push(Shape2d::rectangle(p(0.0, -0.15), p(0.8, 0.15), Color::BLACK));
        for x in [-0.2, 0.0, 0.2] {
            shapes.push(Shape2d::circle(p(x, -0.18), s * 0.1, gold));
        }
    } else {
        shapes.push(Shape2d::rectangle(p(0.0, -0.15), p(0.9, 0.3), wood.scale(0.8)));
    }
    shapes.extend([
        Shape2d::rectangle(p(0.0, 0.15), p(0.9, 0.45), wood),
        Shape2d::rectangle(p(0.0, 0.0), p(0.9, 0.06), gold),
        Shape2d::square(p(0.0, 0.05), s * 0.12, gold),
        Shape2d::circle(p(0.0, 0.05), s * 0.025, Color::BLACK),
    ]);
    assemble("treasure_chest", position, shapes)
}

/// Round flask with a neck and a cork.
pub fn potion(position: Vec2, size: f32, glass: Color, liquid: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "potion",
        position,
        vec![
            Shape2d::circle(p(0.0, 0.12), s * 0.32, glass.with_alpha(140)),
            Shape2d::circle(p(0.0, 0.16), s * 0.26, liquid),
            Shape2d::rectangle(p(0.0, -0.28), p(0.16, 0.24), glass.with_alpha(140)),
            Shape2d::rectangle(p(0.0, -0.43), p(0.2, 0.08), Color::BROWN),
            Shape2d::circle(p(-0.1, 0.05), s * 0.05, Color::WHITE.with_alpha(200)),
        ],
    )
}
