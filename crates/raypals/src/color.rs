//! 8-bit RGBA color and the stock palette.
//!
//! Shapes store colors as four `u8` channels, the same representation an
//! immediate-mode host consumes. Animation interpolates per channel and
//! truncates back to `u8`, so colors never drift outside the representable
//! range.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const LIGHTGRAY: Self = Self::rgb(200, 200, 200);
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    pub const DARKGRAY: Self = Self::rgb(80, 80, 80);
    pub const YELLOW: Self = Self::rgb(253, 249, 0);
    pub const GOLD: Self = Self::rgb(255, 203, 0);
    pub const ORANGE: Self = Self::rgb(255, 161, 0);
    pub const PINK: Self = Self::rgb(255, 109, 194);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const MAROON: Self = Self::rgb(190, 33, 55);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const LIME: Self = Self::rgb(0, 158, 47);
    pub const DARKGREEN: Self = Self::rgb(0, 117, 44);
    pub const SKYBLUE: Self = Self::rgb(102, 191, 255);
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    pub const DARKBLUE: Self = Self::rgb(0, 82, 172);
    pub const PURPLE: Self = Self::rgb(200, 122, 255);
    pub const VIOLET: Self = Self::rgb(135, 60, 190);
    pub const DARKPURPLE: Self = Self::rgb(112, 31, 126);
    pub const BEIGE: Self = Self::rgb(211, 176, 131);
    pub const BROWN: Self = Self::rgb(127, 106, 79);
    pub const DARKBROWN: Self = Self::rgb(76, 63, 47);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const BLANK: Self = Self::rgba(0, 0, 0, 0);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const RAYWHITE: Self = Self::rgb(245, 245, 245);

    /// Create a color from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `true` when every channel, alpha included, is zero.
    pub const fn is_blank(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.a == 0
    }

    /// Per-channel linear interpolation toward `other`, truncated to `u8`.
    ///
    /// `t` is not clamped; out-of-range results saturate at 0 and 255.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| (a as f32 + t * (b as f32 - a as f32)) as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Add `delta` to the RGB channels, saturating at 255. Alpha is kept.
    pub const fn brighten(self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_add(delta),
            g: self.g.saturating_add(delta),
            b: self.b.saturating_add(delta),
            a: self.a,
        }
    }

    /// Multiply the RGB channels by `factor` (truncating). Alpha is kept.
    pub fn scale(self, factor: f32) -> Self {
        let mul = |c: u8| (c as f32 * factor) as u8;
        Self {
            r: mul(self.r),
            g: mul(self.g),
            b: mul(self.b),
            a: self.a,
        }
    }

    /// Normalized `[r, g, b, a]` in `[0, 1]`, the layout vertex buffers use.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
    }

    #[test]
    fn lerp_truncates_midpoint() {
        let mid = Color::rgb(0, 0, 0).lerp(Color::rgb(255, 255, 255), 0.5);
        assert_eq!(mid, Color::rgb(127, 127, 127));
    }

    #[test]
    fn brighten_saturates_and_keeps_alpha() {
        let c = Color::rgba(250, 10, 0, 77).brighten(40);
        assert_eq!(c, Color::rgba(255, 50, 40, 77));
    }

    #[test]
    fn scale_darkens() {
        assert_eq!(Color::rgb(100, 200, 50).scale(0.8), Color::rgb(80, 160, 40));
    }

    #[test]
    fn blank_detection() {
        assert!(Color::BLANK.is_blank());
        assert!(!Color::BLACK.is_blank());
    }

    #[test]
    fn deserializes_from_json() {
        let c: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":4}"#).unwrap();
        assert_eq!(c, Color::rgba(1, 2, 3, 4));
    }
}
