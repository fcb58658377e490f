//! # Raster — Software Canvas
//!
//! [`RasterCanvas`] fills triangles straight into an [`image::RgbaImage`].
//! It needs no window or GPU, which makes it the host for PNG export, the
//! terminal gallery and paint-order tests.
//!
//! ## Algorithm
//!
//! For every triangle, the bounding box is clipped to the image and each
//! pixel *center* `(x + 0.5, y + 0.5)` is tested with three edge functions.
//! Both windings are accepted; the triangle is reordered so its area is
//! positive before testing. A center exactly on an edge belongs to the
//! triangle only when that edge is a top or left edge, so pixels on an edge
//! shared by two triangles (rect diagonals, fan spokes) are painted once.
//! Edge functions are evaluated with endpoints in a fixed order, which makes
//! the two neighbours see the same value with opposite signs.
//!
//! Covered pixels are blended source-over:
//!
//! ```text
//! out_a   = src_a + dst_a * (1 - src_a)
//! out_rgb = (src_rgb * src_a + dst_rgb * dst_a * (1 - src_a)) / out_a
//! ```
//!
//! No anti-aliasing.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::{Canvas2d, Mesh2d, Primitive2d};
use crate::color::Color;
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::math::{Mat4, Vec2};

pub struct RasterCanvas {
    image: RgbaImage,
    background: Color,
    triangles_drawn: usize,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba8())),
            background,
            triangles_drawn: 0,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.width, config.height, config.background)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill with the background color.
    pub fn clear(&mut self) {
        let bg = Rgba(self.background.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = bg;
        }
        self.triangles_drawn = 0;
    }

    /// Color at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::from(p.0))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Triangles submitted since creation or the last [`clear`](Self::clear).
    pub fn triangles_drawn(&self) -> usize {
        self.triangles_drawn
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        log::info!("wrote {}x{} png to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    fn fill_triangle_px(&mut self, [a, mut b, mut c]: [Vec2; 3], color: Color) {
        let area = edge(a, b, c);
        if area.abs() <= f32::EPSILON {
            return;
        }
        if area < 0.0 {
            std::mem::swap(&mut b, &mut c);
        }
        let edges = [(b, c), (c, a), (a, b)];

        let (w, h) = (self.image.width() as f32, self.image.height() as f32);
        let min = a.min(b).min(c).max(Vec2::ZERO);
        let max = a.max(b).max(c).min(Vec2::new(w, h));
        if min.x >= max.x || min.y >= max.y {
            return;
        }

        let (x0, y0) = (min.x.floor() as u32, min.y.floor() as u32);
        let (x1, y1) = (max.x.ceil() as u32, max.y.ceil() as u32);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let inside = edges.iter().all(|&(from, to)| {
                    let w = edge(from, to, p);
                    w > 0.0 || (w == 0.0 && is_top_left(from, to))
                });
                if inside {
                    let dst = self.image.get_pixel_mut(x, y);
                    dst.0 = blend_over(color.to_rgba8(), dst.0);
                }
            }
        }
    }
}

impl Canvas2d for RasterCanvas {
    fn fill_mesh(&mut self, _primitive: Primitive2d, transform: &Mat4, mesh: &Mesh2d, color: Color) {
        if color.a == 0 {
            return;
        }
        for tri in mesh.triangles() {
            let world = tri.map(|v| transform.transform_point3(v.extend(0.0)).truncate());
            self.fill_triangle_px(world, color);
            self.triangles_drawn += 1;
        }
    }
}

/// Twice the signed area of `(a, b, p)`.
///
/// Always computed from the lexicographically smaller endpoint, so
/// `edge(b, a, p) == -edge(a, b, p)` exactly.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let raw = |a: Vec2, b: Vec2| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if (a.x, a.y) <= (b.x, b.y) { raw(a, b) } else { -raw(b, a) }
}

/// Top or left edge of a positive-area triangle (y grows downward).
fn is_top_left(from: Vec2, to: Vec2) -> bool {
    let d = to - from;
    d.y < 0.0 || (d.y == 0.0 && d.x > 0.0)
}

fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let src_a = src[3] as f32 / 255.0;
    if src_a <= 0.0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let blend = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let out = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        (out * 255.0).round().clamp(0.0, 255.0) as u8
    };

    [
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    #[test]
    fn starts_cleared() {
        let canvas = RasterCanvas::new(4, 4, Color::RAYWHITE);
        assert_eq!(canvas.pixel(0, 0), Some(Color::RAYWHITE));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn fills_rect_pixels() {
        let mut canvas = RasterCanvas::new(10, 10, Color::BLACK);
        canvas.fill_rect(&Mat4::IDENTITY, Rect::new(Vec2::new(2.0, 2.0), Vec2::new(4.0, 4.0)), Color::RED);
        assert_eq!(canvas.pixel(3, 3), Some(Color::RED));
        assert_eq!(canvas.pixel(5, 5), Some(Color::RED));
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(6, 6), Some(Color::BLACK));
    }

    #[test]
    fn both_windings_fill() {
        let mut canvas = RasterCanvas::new(10, 10, Color::BLACK);
        let cw = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        let ccw = [Vec2::new(10.0, 10.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        canvas.fill_triangle(&Mat4::IDENTITY, cw, Color::GREEN);
        canvas.fill_triangle(&Mat4::IDENTITY, ccw, Color::BLUE);
        assert_eq!(canvas.pixel(1, 1), Some(Color::GREEN));
        assert_eq!(canvas.pixel(8, 8), Some(Color::BLUE));
    }

    #[test]
    fn later_draws_paint_over() {
        let mut canvas = RasterCanvas::new(8, 8, Color::WHITE);
        let full = Rect::new(Vec2::ZERO, Vec2::new(8.0, 8.0));
        canvas.fill_rect(&Mat4::IDENTITY, full, Color::RED);
        canvas.fill_rect(&Mat4::IDENTITY, full, Color::BLUE);
        assert_eq!(canvas.pixel(4, 4), Some(Color::BLUE));
    }

    #[test]
    fn translucent_blends() {
        let mut canvas = RasterCanvas::new(2, 2, Color::BLACK);
        let full = Rect::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        canvas.fill_rect(&Mat4::IDENTITY, full, Color::rgba(255, 255, 255, 128));
        let p = canvas.pixel(0, 0).unwrap();
        assert!((126..=130).contains(&p.r), "got {p:?}");
        assert_eq!(p.a, 255);
    }

    #[test]
    fn translucent_rect_diagonal_blends_once() {
        let mut canvas = RasterCanvas::new(8, 8, Color::BLACK);
        let full = Rect::new(Vec2::ZERO, Vec2::new(8.0, 8.0));
        canvas.fill_rect(&Mat4::IDENTITY, full, Color::rgba(255, 255, 255, 128));
        let off_diagonal = canvas.pixel(5, 2);
        assert_eq!(canvas.pixel(3, 3), off_diagonal);
        let first = canvas.image().get_pixel(0, 0).0;
        assert!(canvas.image().pixels().all(|p| p.0 == first));
    }

    #[test]
    fn translucent_fan_spokes_blend_once() {
        // Spokes run along pixel-center rows and columns through the center.
        let mut canvas = RasterCanvas::new(9, 9, Color::BLACK);
        let center = Vec2::new(4.5, 4.5);
        canvas.fill_circle(&Mat4::IDENTITY, center, 4.0, 4, Color::rgba(255, 255, 255, 128));
        let interior = canvas.pixel(5, 5);
        assert_ne!(interior, Some(Color::BLACK));
        for (x, y) in [(6, 4), (4, 6), (4, 2), (4, 4)] {
            assert_eq!(canvas.pixel(x, y), interior, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn shared_edges_cover_each_pixel_once() {
        // Opaque-over-opaque hides double coverage; count it via alpha instead.
        let mut canvas = RasterCanvas::new(16, 16, Color::BLANK);
        canvas.fill_circle(&Mat4::IDENTITY, Vec2::splat(8.0), 7.0, 24, Color::rgba(255, 0, 0, 100));
        for p in canvas.image().pixels() {
            assert!(p.0[3] == 0 || p.0[3] == 100, "alpha {} means overlap", p.0[3]);
        }
    }

    #[test]
    fn offscreen_geometry_is_clipped() {
        let mut canvas = RasterCanvas::new(4, 4, Color::BLACK);
        let t = Mat4::from_translation(crate::math::Vec3::new(-100.0, -100.0, 0.0));
        canvas.fill_circle(&t, Vec2::ZERO, 5.0, 12, Color::RED);
        assert!(canvas.image().pixels().all(|p| p.0 == Color::BLACK.to_rgba8()));
    }

    #[test]
    fn clear_restores_background() {
        let mut canvas = RasterCanvas::new(4, 4, Color::BLACK);
        canvas.fill_rect(&Mat4::IDENTITY, Rect::new(Vec2::ZERO, Vec2::splat(4.0)), Color::RED);
        assert!(canvas.triangles_drawn() > 0);
        canvas.clear();
        assert_eq!(canvas.pixel(2, 2), Some(Color::BLACK));
        assert_eq!(canvas.triangles_drawn(), 0);
    }
}
