//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. Every rotation in the public API is expressed in
//! **degrees**; [`normalize_degrees`] keeps stored angles in `[0, 360)`.

pub use glam::{Mat4, Vec2, Vec3, Vec4};

/// Wrap an angle in degrees into the half-open range `[0, 360)`.
///
/// Works for any sign and magnitude. `rem_euclid` can round a tiny negative
/// input up to exactly `360.0`, which is folded back to `0.0`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// [`normalize_degrees`] applied to each axis.
pub fn normalize_degrees3(degrees: Vec3) -> Vec3 {
    Vec3::new(
        normalize_degrees(degrees.x),
        normalize_degrees(degrees.y),
        normalize_degrees(degrees.z),
    )
}

/// An axis-aligned rectangle in local shape space.
///
/// `min` is the top-left corner (y grows downward, matching screen space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// A rectangle of the given size centered on `center`.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Corners in clockwise screen order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.min,
            Vec2::new(max.x, self.min.y),
            max,
            Vec2::new(self.min.x, max.y),
        ]
    }
}
