//! # Raypals — Shapes and Sprites for Immediate-Mode Drawing
//!
//! Small building blocks for drawing 2D and 3D scenes from primitive shapes:
//! a [`Shape2d`](shapes::Shape2d) is one rectangle, circle, star or stick
//! figure; a [`Sprite2d`](sprite::Sprite2d) groups shapes under one
//! position, rotation and scale; the [`catalog`] assembles ready-made
//! sprites (characters, vehicles, fruit). [`ShapeAnimation`](animation::ShapeAnimation)
//! drives pulse, spin and color cycling per frame.
//!
//! Nothing here owns a window. Drawing goes through the [`Canvas2d`](render::Canvas2d)
//! and [`Canvas3d`](render::Canvas3d) traits, with the current transform
//! kept on an explicit [`TransformStack`](render::TransformStack). Two hosts
//! ship with the crate: [`DrawList`](render2d::DrawList) records
//! GPU-ready vertices, and [`RasterCanvas`](render2d::RasterCanvas)
//! (feature `raster`) paints into an RGBA image.
//!
//! Start with `use raypals::prelude::*`.

pub mod animation;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod prelude;
pub mod render;
pub mod render2d;
pub mod shapes;
pub mod sprite;

#[cfg(feature = "render3d")]
pub mod render3d;
