//! Shape Animation: pulse, spin and color cycling over a fixed timestep.
//!
//! Steps three animated shapes for two simulated seconds and logs their
//! state every quarter second. With `--features raster` the final frame is
//! also saved to `shape_animation.png`.

use raypals::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn main() -> raypals::error::Result<()> {
    init_logging(LoggingConfig::with_filter("info"));

    let mut shapes = vec![
        Shape2d::circle(Vec2::new(120.0, 150.0), 40.0, Color::RED),
        Shape2d::star(Vec2::new(300.0, 150.0), 90.0, 5, Color::GOLD),
        Shape2d::polygon(Vec2::new(480.0, 150.0), 45.0, 6, Color::BLUE),
    ];
    let mut animations = vec![
        ShapeAnimation::new(2.0).pulse(0.6, 1.4).ping_pong(),
        ShapeAnimation::new(1.0).spin(90.0),
        ShapeAnimation::new(0.5).color_cycle(Color::BLUE, Color::GREEN).ping_pong(),
    ];

    for frame in 1..=120 {
        for (shape, anim) in shapes.iter_mut().zip(animations.iter_mut()) {
            anim.update_2d(shape, DT);
        }
        if frame % 15 == 0 {
            let [pulse, star, hex] = [&shapes[0], &shapes[1], &shapes[2]];
            log::info!(
                "t={:.2}s pulse={:.1} spin={:.1}° color=({}, {}, {})",
                frame as f32 * DT,
                pulse.size.x,
                star.rotation(),
                hex.color.r,
                hex.color.g,
                hex.color.b,
            );
        }
    }

    #[cfg(feature = "raster")]
    {
        let mut canvas = RasterCanvas::new(600, 300, Color::RAYWHITE);
        let mut stack = TransformStack::new();
        for shape in &shapes {
            shape.draw(&mut canvas, &mut stack);
        }
        canvas.save_png("shape_animation.png")?;
    }

    Ok(())
}
