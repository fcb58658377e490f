//! # Shapes — Single Drawable Primitives
//!
//! A shape is a plain value: a kind tag with its own payload, a local
//! placement, a color and a few style flags. Shapes know how to describe
//! themselves to a canvas and nothing else; grouping lives in
//! [`sprite`](crate::sprite) and motion in [`animation`](crate::animation).
//!
//! ```ignore
//! let mut star = Shape2d::star(Vec2::new(40.0, 40.0), 60.0, 5, Color::GOLD).outlined(3.0);
//! star.rotate(dt, 90.0);
//! star.draw(&mut canvas, &mut stack);
//! ```
//!
//! ## Design
//!
//! **Closed kind enum.** Every kind is a variant of [`ShapeKind2d`] or
//! [`ShapeKind3d`], and drawing is one exhaustive `match`. Adding a kind is a
//! compile error everywhere it is not handled yet.
//!
//! **Rotation invariant.** Stored rotations are always in `[0, 360)`. The
//! field is read through `rotation()` and written only by methods that
//! normalize.
//!
//! **Sizes are diameters.** Round and regular kinds store their bounding
//! diameter in every component of `size`, so animation can scale any shape
//! the same way.

pub mod shape2d;
#[cfg(feature = "render3d")]
pub mod shape3d;

pub use shape2d::{Shape2d, ShapeKind2d};
#[cfg(feature = "render3d")]
pub use shape3d::{Shape3d, ShapeKind3d};

/// Outline thickness given to freshly constructed shapes.
pub const DEFAULT_THICKNESS: f32 = 2.0;
/// Circle smoothness given to freshly constructed circles.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 36;
/// Upper bound on star points; larger requests are clamped.
pub const MAX_STAR_POINTS: u32 = 1024;
/// Upper bound on polygon sides; larger requests are clamped.
pub const MAX_POLYGON_SIDES: u32 = 1024;
