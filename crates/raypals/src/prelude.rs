//! Common imports: `use raypals::prelude::*`.

pub use crate::animation::ShapeAnimation;
pub use crate::catalog::{self, CatalogEntry, Category};
pub use crate::color::Color;
pub use crate::config::CanvasConfig;
pub use crate::error::{RaypalsError, Result};
pub use crate::logging::{LoggingConfig, init_logging};
pub use crate::math::{Mat4, Rect, Vec2, Vec3};
pub use crate::render::{Canvas2d, TransformStack};
pub use crate::render2d::DrawList;
#[cfg(feature = "raster")]
pub use crate::render2d::RasterCanvas;
pub use crate::shapes::{Shape2d, ShapeKind2d};
pub use crate::sprite::Sprite2d;

#[cfg(feature = "render3d")]
pub use crate::render::{Camera3d, Canvas3d, Projection};
#[cfg(feature = "render3d")]
pub use crate::render3d::DrawList3d;
#[cfg(feature = "render3d")]
pub use crate::shapes::{Shape3d, ShapeKind3d};
#[cfg(feature = "render3d")]
pub use crate::sprite::Sprite3d;
