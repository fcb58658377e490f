//! Interface widgets.

use super::assemble;
use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

/// A filled rectangle with a 2-pixel border.
pub fn button(position: Vec2, size: Vec2, background: Color, border: Color) -> Sprite2d {
    assemble(
        "button",
        position,
        vec![
            Shape2d::rectangle(Vec2::ZERO, size, background),
            Shape2d::rectangle(Vec2::ZERO, size, border).outlined(2.0),
        ],
    )
}

/// A `width`-wide bar filled to `fill` (clamped to `[0, 1]`), left-aligned.
///
/// The bar is `0.15 * width` tall; the fill is 80% of that.
pub fn health_bar(position: Vec2, width: f32, fill: f32, background: Color, foreground: Color) -> Sprite2d {
    let fill = fill.clamp(0.0, 1.0);
    let height = width * 0.15;
    let filled = width * fill;
    assemble(
        "health_bar",
        position,
        vec![
            Shape2d::rectangle(Vec2::ZERO, Vec2::new(width, height), background),
            Shape2d::rectangle(
                Vec2::new(-(width - filled) * 0.5, 0.0),
                Vec2::new(filled, height * 0.8),
                foreground,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn health_bar_fill_is_left_aligned() {
        let bar = health_bar(Vec2::ZERO, 150.0, 0.75, Color::RED, Color::GREEN);
        let bg = &bar.shapes()[0];
        let fg = &bar.shapes()[1];
        assert!(approx(bg.size.y, 22.5));
        assert!(approx(fg.size.x, 112.5));
        assert!(approx(fg.size.y, 18.0));
        assert!(approx(fg.position.x, -18.75));
        // left edges line up
        assert!(approx(fg.position.x - fg.size.x / 2.0, bg.position.x - bg.size.x / 2.0));
    }

    #[test]
    fn health_bar_clamps_fill() {
        let over = health_bar(Vec2::ZERO, 100.0, 3.0, Color::RED, Color::GREEN);
        assert!(approx(over.shapes()[1].size.x, 100.0));
        let under = health_bar(Vec2::ZERO, 100.0, -1.0, Color::RED, Color::GREEN);
        assert_eq!(under.shapes()[1].size.x, 0.0);
    }

    #[test]
    fn button_border_is_outlined() {
        let b = button(Vec2::ZERO, Vec2::new(80.0, 40.0), Color::SKYBLUE, Color::BLUE);
        assert!(b.shapes()[0].filled);
        assert!(!b.shapes()[1].filled);
        assert_eq!(b.shapes()[1].thickness, 2.0);
    }
}
