//! Characters.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

/// Round body with a round head on top.
pub fn simple_character(position: Vec2, size: f32, body: Color, head: Color) -> Sprite2d {
    let s = size;
    assemble(
        "simple_character",
        position,
        vec![
            Shape2d::circle(Vec2::new(0.0, s / 4.0), s / 2.0, body),
            Shape2d::circle(Vec2::new(0.0, -s / 2.0), s / 3.0, head),
        ],
    )
}

pub fn robot_character(position: Vec2, size: f32, primary: Color, secondary: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "robot_character",
        position,
        vec![
            Shape2d::rectangle(p(0.0, 0.0), p(0.8, 1.0), primary),
            Shape2d::rectangle(p(0.0, -0.6), p(0.6, 0.5), primary),
            Shape2d::circle(p(-0.15, -0.6), s * 0.1, secondary),
            Shape2d::circle(p(0.15, -0.6), s * 0.1, secondary),
        ],
    )
}

/// A cat: round body and head, two ears, two eyes.
pub fn animal_character(position: Vec2, size: f32, body: Color, detail: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "animal_character",
        position,
        vec![
            Shape2d::circle(p(0.0, 0.1), s * 0.4, body),
            Shape2d::circle(p(0.0, -0.3), s * 0.3, body),
            Shape2d::triangle(p(-0.2, -0.5), s * 0.2, body),
            Shape2d::triangle(p(0.2, -0.5), s * 0.2, body),
            Shape2d::circle(p(-0.1, -0.3), s * 0.05, detail),
            Shape2d::circle(p(0.1, -0.3), s * 0.05, detail),
        ],
    )
}

pub fn soldier(position: Vec2, size: f32, uniform: Color, skin: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    let helmet = uniform.scale(0.8);
    assemble(
        "soldier",
        position,
        vec![
            Shape2d::rectangle(p(-0.12, 0.35), p(0.14, 0.3), uniform),
            Shape2d::rectangle(p(0.12, 0.35), p(0.14, 0.3), uniform),
            Shape2d::rectangle(p(0.0, 0.05), p(0.45, 0.4), uniform),
            Shape2d::rectangle(p(0.0, 0.2), p(0.45, 0.05), Color::DARKBROWN),
            Shape2d::circle(p(0.0, -0.3), s * 0.15, skin),
            Shape2d::rectangle(p(0.0, -0.42), p(0.36, 0.1), helmet),
            Shape2d::rectangle(p(0.3, 0.05), p(0.08, 0.5), Color::DARKGRAY).rotated(20.0),
        ],
    )
}

pub fn wizard(position: Vec2, size: f32, robe: Color, hat: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "wizard",
        position,
        vec![
            Shape2d::rectangle(p(0.35, 0.05), p(0.05, 0.8), Color::BROWN),
            Shape2d::circle(p(0.35, -0.37), s * 0.07, Color::SKYBLUE),
            Shape2d::triangle(p(0.0, 0.15), s * 0.8, robe),
            Shape2d::circle(p(0.0, -0.25), s * 0.13, Color::BEIGE),
            Shape2d::triangle(p(0.0, -0.1), s * 0.2, Color::WHITE).rotated(180.0),
            Shape2d::rectangle(p(0.0, -0.33), p(0.45, 0.05), hat),
            Shape2d::triangle(p(0.0, -0.48), s * 0.3, hat),
            Shape2d::star(p(0.0, -0.46), s * 0.12, 5, Color::GOLD),
        ],
    )
}

pub fn snowman(position: Vec2, size: f32, snow: Color, accessory: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "snowman",
        position,
        vec![
            Shape2d::circle(p(0.0, 0.28), s * 0.22, snow),
            Shape2d::circle(p(0.0, -0.02), s * 0.16, snow),
            Shape2d::circle(p(0.0, -0.26), s * 0.11, snow),
            Shape2d::rectangle(p(0.0, -0.15), p(0.24, 0.04), Color::RED),
            Shape2d::circle(p(0.0, -0.05), s * 0.02, accessory),
            Shape2d::circle(p(0.0, 0.03), s * 0.02, accessory),
            Shape2d::circle(p(-0.04, -0.28), s * 0.015, Color::BLACK),
            Shape2d::circle(p(0.04, -0.28), s * 0.015, Color::BLACK),
            Shape2d::triangle(p(0.04, -0.24), s * 0.05, Color::ORANGE).rotated(90.0),
            Shape2d::rectangle(p(0.0, -0.37), p(0.26, 0.03), accessory),
            Shape2d::rectangle(p(0.0, -0.45), p(0.16, 0.14), accessory),
        ],
    )
}

/// A side-on horse facing right.
pub fn horse(position: Vec2, size: f32, body: Color) -> Sprite2d {
    let s = size;
    let p = |x: f32, y: f32| Vec2::new(x * s, y * s);
    assemble(
        "horse",
        position,
        vec![
            Shape2d::rectangle(p(-0.9, -0.4), p(0.5, 0.2), body).rotated(-35.0),
            Shape2d::rectangle(p(0.0, 0.0), p(1.8, 0.8), body),
            Shape2d::rectangle(p(0.6, -0.3), p(0.4, 0.7), body).rotated(30.0),
            Shape2d::rectangle(p(0.9, -0.6), p(0.8, 0.4), body).rotated(45.0),
            Shape2d::rectangle(p(0.5, 0.6), p(0.2, 0.8), body),
            Shape2d::rectangle(p(-0.5, 0.6), p(0.2, 0.8), body),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind2d;

    #[test]
    fn simple_character_layout() {
        let c = simple_character(Vec2::new(10.0, 20.0), 60.0, Color::BLUE, Color::RED);
        assert_eq!(c.shape_count(), 2);
        let body = &c.shapes()[0];
        let head = &c.shapes()[1];
        assert_eq!(body.position, Vec2::new(0.0, 15.0));
        assert_eq!(body.size, Vec2::splat(60.0));
        assert_eq!(head.position, Vec2::new(0.0, -30.0));
        assert_eq!(head.color, Color::RED);
    }

    #[test]
    fn horse_tail_is_drawn_first() {
        let h = horse(Vec2::ZERO, 40.0, Color::BROWN);
        assert_eq!(h.shape_count(), 6);
        assert_eq!(h.shapes()[0].rotation(), 325.0);
        assert!(h.shapes().iter().all(|s| s.kind == ShapeKind2d::Rectangle));
    }
}
