//! # Sprite — Shapes Under One Group Transform
//!
//! A sprite owns an ordered list of shapes and a group transform. Drawing a
//! sprite composes the group transform on the stack, then draws every child
//! in list order, so each child's own `position`/`rotation` is relative to
//! the sprite. Later children paint over earlier ones.
//!
//! ```text
//!   stack.current()
//!        │  × translate(sprite.position)
//!        │  × rotate(sprite.rotation)
//!        │  × scale(sprite.scale)
//!        ▼
//!   child 0 ─► child 1 ─► ... ─► child n      (paint order)
//!        │  × translate(child.position) × rotate(child.rotation)
//! ```
//!
//! ## Ownership
//!
//! Children are stored by value in a `Vec`. Adding a shape moves it into the
//! sprite; dropping the sprite drops every child. There is no single-child
//! removal, matching the append-only way catalog recipes build sprites.
//!
//! ## Comparison
//!
//! - **Scene graphs** (Bevy hierarchy, Godot `Node2D`): arbitrary depth and
//!   reparenting. Sprites are a single level, which covers every recipe.
//! - **SVG `<g transform>`**: the same idea, one group around primitives.

pub mod sprite2d;
#[cfg(feature = "render3d")]
pub mod sprite3d;

pub use sprite2d::Sprite2d;
#[cfg(feature = "render3d")]
pub use sprite3d::Sprite3d;
