//! # Vertex — Per-Corner Data for GPU Upload
//!
//! [`DrawList`](super::DrawList) emits one [`Vertex2d`] per mesh corner with
//! the model matrix already applied. A GPU host can cast the whole vertex
//! array to bytes and upload it in one copy.
//!
//! ```text
//! Vertex2d (28 bytes per vertex)
//! ┌────────────────┬────────────────────────┐
//! │ position       │ color                  │
//! │ [f32; 3]       │ [f32; 4]               │
//! │ 12 bytes       │ 16 bytes               │
//! │ offset 0       │ offset 12              │
//! └────────────────┴────────────────────────┘
//! ```
//!
//! `#[repr(C)]` fixes the field order and the `bytemuck` derives make the
//! `&[Vertex2d] -> &[u8]` cast safe.

use bytemuck::{Pod, Zeroable};

use crate::color::Color;
use crate::math::Vec3;

/// A world-space colored vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex2d {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex2d {
    /// Byte distance between consecutive vertices in a buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex2d>();
    /// Byte offset of `color` within a vertex.
    pub const COLOR_OFFSET: usize = 12;

    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_packed() {
        assert_eq!(Vertex2d::STRIDE, 28);
        assert_eq!(std::mem::offset_of!(Vertex2d, color), Vertex2d::COLOR_OFFSET);
    }

    #[test]
    fn casts_to_bytes() {
        let v = [Vertex2d::new(Vec3::new(1.0, 2.0, 0.0), Color::WHITE); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 56);
    }
}
