//! Scene 3D: robots, a spaceship and trees recorded into a 3D draw list.
//!
//! Orbits the camera around the scene for a few frames and logs how much
//! geometry each frame produces. A GPU host would upload
//! [`DrawList3d::vertex_bytes`] once per frame.

use raypals::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn main() {
    init_logging(LoggingConfig::default());

    let mut robots = vec![
        catalog::robot_3d(Vec3::new(0.0, 1.0, 0.0), 2.0, Color::RED, Color::YELLOW),
        catalog::robot_3d(Vec3::new(3.0, 1.0, 3.0), 1.5, Color::BLUE, Color::WHITE),
        catalog::robot_3d(Vec3::new(-3.0, 1.0, -3.0), 1.8, Color::GREEN, Color::ORANGE),
    ];
    let speeds = [
        Vec3::new(0.0, 30.0, 0.0),
        Vec3::new(10.0, 20.0, 5.0),
        Vec3::new(0.0, -40.0, 0.0),
    ];
    let ship = catalog::spaceship_3d(Vec3::new(0.0, 4.0, -2.0), 1.2, Color::LIGHTGRAY, Color::SKYBLUE);
    let trees = [
        catalog::tree_3d(Vec3::new(-4.0, 0.0, 3.0), 1.0, Color::BROWN, Color::DARKGREEN),
        catalog::tree_3d(Vec3::new(4.0, 0.0, -3.0), 1.3, Color::BROWN, Color::GREEN),
    ];
    let ground = Shape3d::cube(Vec3::new(0.0, -0.05, 0.0), Vec3::new(12.0, 0.1, 12.0), Color::DARKGRAY)
        .wireframe();

    let mut camera = Camera3d {
        position: Vec3::new(7.0, 3.0, 0.0),
        ..Camera3d::default()
    };
    let mut list = DrawList3d::new();
    let mut stack = TransformStack::new();
    let mut angle: f32 = 0.0;

    for frame in 0..8 {
        for (robot, speed) in robots.iter_mut().zip(speeds) {
            robot.rotate(DT, speed);
        }
        angle += 30.0;
        camera.position = Vec3::new(7.0 * angle.to_radians().cos(), 3.0, 7.0 * angle.to_radians().sin());

        list.clear();
        list.begin_scope(&camera);
        ground.draw(&mut list, &mut stack, None);
        for robot in &robots {
            robot.draw(&mut list, &mut stack, None);
        }
        ship.draw(&mut list, &mut stack, None);
        for tree in &trees {
            tree.draw(&mut list, &mut stack, None);
        }
        list.end_scope();

        log::info!(
            "frame {frame}: camera at {:.1}, {} commands, {} vertices, {} bytes",
            camera.position,
            list.commands().len(),
            list.vertices().len(),
            list.vertex_bytes().len(),
        );
    }
}
