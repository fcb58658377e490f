//! 3D models built from cubes, spheres, cones and cylinders.
//!
//! Offsets are in world units scaled by `size`; `y` is up. Cylinders and
//! cones stand on their position, cubes and spheres are centered on it.

use crate::color::Color;
use crate::math::Vec3;
use crate::shapes::Shape3d;
use crate::sprite::Sprite3d;

fn assemble_3d(name: &str, position: Vec3, shapes: Vec<Shape3d>) -> Sprite3d {
    log::debug!("{name}: {} shapes at {position}", shapes.len());
    let mut sprite = Sprite3d::new(shapes.len()).at(position);
    for shape in shapes {
        sprite.add_shape(shape);
    }
    sprite
}

/// Boxy robot: torso, head with eyes and an antenna, arms and legs.
pub fn robot_3d(position: Vec3, size: f32, body: Color, detail: Color) -> Sprite3d {
    let s = size;
    let p = |x: f32, y: f32, z: f32| Vec3::new(x * s, y * s, z * s);
    assemble_3d(
        "robot_3d",
        position,
        vec![
            Shape3d::cube(p(0.0, 0.0, 0.0), p(0.6, 0.7, 0.4), body),
            Shape3d::cube(p(0.0, 0.55, 0.0), p(0.4, 0.35, 0.35), body),
            Shape3d::sphere(p(-0.1, 0.58, 0.18), s * 0.05, 8, detail),
            Shape3d::sphere(p(0.1, 0.58, 0.18), s * 0.05, 8, detail),
            Shape3d::cylinder(p(0.0, 0.72, 0.0), s * 0.02, s * 0.2, 6, detail),
            Shape3d::sphere(p(0.0, 0.94, 0.0), s * 0.05, 8, detail),
            Shape3d::cube(p(-0.4, 0.05, 0.0), p(0.15, 0.6, 0.15), detail),
            Shape3d::cube(p(0.4, 0.05, 0.0), p(0.15, 0.6, 0.15), detail),
            Shape3d::cube(p(-0.15, -0.6, 0.0), p(0.18, 0.5, 0.18), body),
            Shape3d::cube(p(0.15, -0.6, 0.0), p(0.18, 0.5, 0.18), body),
            Shape3d::cube(p(0.0, 0.1, 0.21), p(0.3, 0.2, 0.02), detail),
        ],
    )
}

/// Rocket-style ship along +z: hull, nose cone, cockpit, wings and engine.
pub fn spaceship_3d(position: Vec3, size: f32, body: Color, glass: Color) -> Sprite3d {
    let s = size;
    let p = |x: f32, y: f32, z: f32| Vec3::new(x * s, y * s, z * s);
    // Cylinders and cones stand along +y; tilt them forward onto +z.
    let forward = Vec3::new(90.0, 0.0, 0.0);
    assemble_3d(
        "spaceship_3d",
        position,
        vec![
            Shape3d::cylinder(p(0.0, 0.0, -0.5), s * 0.2, s * 1.0, 16, body).rotated(forward),
            Shape3d::cone(p(0.0, 0.0, 0.5), s * 0.2, s * 0.4, 16, body).rotated(forward),
            Shape3d::sphere(p(0.0, 0.17, 0.15), s * 0.12, 12, glass),
            Shape3d::cube(p(0.0, 0.0, -0.15), p(1.2, 0.05, 0.35), body),
            Shape3d::cube(p(0.0, 0.25, -0.4), p(0.05, 0.35, 0.2), body),
            Shape3d::cylinder(p(0.0, 0.0, -0.6), s * 0.14, s * 0.1, 12, Color::DARKGRAY).rotated(forward),
            Shape3d::sphere(p(0.0, 0.0, -0.65), s * 0.1, 10, Color::ORANGE),
        ],
    )
}

/// Trunk with three stacked cones of foliage.
pub fn tree_3d(position: Vec3, scale: f32, trunk: Color, leaves: Color) -> Sprite3d {
    let s = scale;
    let p = |x: f32, y: f32, z: f32| Vec3::new(x * s, y * s, z * s);
    assemble_3d(
        "tree_3d",
        position,
        vec![
            Shape3d::cylinder(p(0.0, 0.0, 0.0), s * 0.2, s * 1.0, 8, trunk),
            Shape3d::cone(p(0.0, 0.8, 0.0), s * 1.0, s * 1.2, 12, leaves),
            Shape3d::cone(p(0.0, 1.4, 0.0), s * 0.8, s * 1.0, 12, leaves),
            Shape3d::cone(p(0.0, 1.9, 0.0), s * 0.55, s * 0.8, 12, leaves.brighten(20)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Camera3d, TransformStack};
    use crate::render3d::DrawList3d;

    #[test]
    fn models_draw_inside_one_scope() {
        let camera = Camera3d::default();
        let models = [
            robot_3d(Vec3::new(0.0, 1.0, 0.0), 2.0, Color::RED, Color::YELLOW),
            spaceship_3d(Vec3::ZERO, 1.0, Color::LIGHTGRAY, Color::SKYBLUE),
            tree_3d(Vec3::new(-3.0, 0.0, 0.0), 1.0, Color::BROWN, Color::DARKGREEN),
        ];
        for model in &models {
            let mut list = DrawList3d::new();
            let mut stack = TransformStack::new();
            model.draw(&mut list, &mut stack, Some(&camera));
            assert_eq!(list.scopes().len(), 1);
            assert_eq!(list.commands().len(), model.shape_count());
            assert!(!list.is_scope_open());
            assert_eq!(stack.depth(), 0);
        }
    }

    #[test]
    fn tree_foliage_sits_on_trunk() {
        let tree = tree_3d(Vec3::ZERO, 2.0, Color::BROWN, Color::GREEN);
        let trunk = &tree.shapes()[0];
        let lowest_cone = &tree.shapes()[1];
        assert!(lowest_cone.position.y < trunk.position.y + trunk.size.y);
        assert_eq!(trunk.color, Color::BROWN);
    }

    #[test]
    fn robot_is_placed_at_position() {
        let robot = robot_3d(Vec3::new(3.0, 1.0, 3.0), 1.5, Color::BLUE, Color::WHITE);
        assert_eq!(robot.position, Vec3::new(3.0, 1.0, 3.0));
        assert_eq!(robot.shape_count(), 11);
    }
}
