//! Sprite Gallery: every catalog recipe rasterized into one PNG.
//!
//! ```text
//! cargo run --example sprite_gallery -- gallery.png
//! ```

use raypals::prelude::*;

const COLUMNS: usize = 8;
const CELL: f32 = 110.0;

fn main() -> raypals::error::Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args().nth(1).unwrap_or_else(|| "sprite_gallery.png".into());
    let entries = catalog::all_2d();
    let rows = entries.len().div_ceil(COLUMNS);

    let config = CanvasConfig {
        width: (COLUMNS as f32 * CELL) as u32,
        height: (rows as f32 * CELL) as u32,
        ..CanvasConfig::default()
    };
    let mut canvas = RasterCanvas::from_config(&config);
    let mut stack = TransformStack::new();

    for (i, entry) in entries.iter().enumerate() {
        let (col, row) = (i % COLUMNS, i / COLUMNS);
        let center = Vec2::new((col as f32 + 0.5) * CELL, (row as f32 + 0.5) * CELL);
        let cell = Rect::from_center_size(center, Vec2::splat(CELL - 6.0));
        canvas.stroke_rect(&Mat4::IDENTITY, cell, 1.0, Color::LIGHTGRAY);
        (entry.build)(center).draw(&mut canvas, &mut stack);
        log::debug!("{} [{}]", entry.name, entry.category.label());
    }

    log::info!(
        "{} sprites, {} triangles",
        entries.len(),
        canvas.triangles_drawn()
    );
    canvas.save_png(&out)
}
