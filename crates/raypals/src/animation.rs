//! # Animation — Sinusoidal Shape Tweening
//!
//! [`ShapeAnimation`] drives three properties of a single shape from one
//! oscillating clock: size (pulse), rotation (spin) and color (cycle). Each
//! channel is only touched when it is configured, so one animation can do any
//! combination.
//!
//! ## The Factor
//!
//! Every update advances `clock` by `dt * speed` and derives a factor in
//! `[0, 1]` from it:
//!
//! ```text
//!  ping-pong:  factor = (sin(clock) + 1) / 2     smooth 0 → 1 → 0
//!  default:    factor = |sin(clock)|             bounces off 0 twice per period
//! ```
//!
//! Scale and color are absolute functions of the factor, so they never drift
//! no matter how many updates run. Spin is incremental: it advances by
//! `rotation_speed * dt` and is unaffected by `speed`.
//!
//! ## Original Size
//!
//! Pulsing scales the shape's size *as it was when the pulse started*. The
//! size is captured on the first scaled update into `original_size` and
//! reused afterwards, which keeps the scale from compounding. If the shape is
//! resized on purpose, call [`ShapeAnimation::recapture_size`].
//!
//! ## Comparison
//!
//! - **Keyframe tweens** (Tween.js, Bevy `bevy_tweening`): explicit start and
//!   end with an easing curve over a fixed duration. Here there is no duration,
//!   the motion loops forever.
//! - **CSS `animation-direction: alternate`**: the ping-pong mode.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{Vec3, normalize_degrees};
use crate::shapes::Shape2d;
#[cfg(feature = "render3d")]
use crate::shapes::Shape3d;

/// Oscillating size/rotation/color animation for one shape.
///
/// Configuration fields are public and plain data; `clock` and the captured
/// original size are runtime state and are not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeAnimation {
    pub active: bool,
    /// Multiplier on `dt` when advancing the clock.
    pub speed: f32,
    #[serde(skip)]
    clock: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    /// Degrees per second; 3D shapes spin about Y.
    pub rotation_speed: f32,
    pub color_start: Color,
    pub color_end: Color,
    pub ping_pong: bool,
    #[serde(skip)]
    original_size: Option<Vec3>,
}

impl Default for ShapeAnimation {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ShapeAnimation {
    /// An active animation that changes nothing until a channel is configured.
    pub fn new(speed: f32) -> Self {
        Self {
            active: true,
            speed,
            clock: 0.0,
            scale_min: 1.0,
            scale_max: 1.0,
            rotation_speed: 0.0,
            color_start: Color::BLANK,
            color_end: Color::BLANK,
            ping_pong: false,
            original_size: None,
        }
    }

    /// Oscillate size between `min` and `max` times the original size.
    pub fn pulse(mut self, min: f32, max: f32) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }

    /// Spin at `degrees_per_second`.
    pub fn spin(mut self, degrees_per_second: f32) -> Self {
        self.rotation_speed = degrees_per_second;
        self
    }

    /// Oscillate color between `start` and `end`.
    pub fn color_cycle(mut self, start: Color, end: Color) -> Self {
        self.color_start = start;
        self.color_end = end;
        self
    }

    pub fn ping_pong(mut self) -> Self {
        self.ping_pong = true;
        self
    }

    pub fn paused(mut self) -> Self {
        self.active = false;
        self
    }

    /// Accumulated animation time.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Size captured on the first scaled update, if any.
    pub fn original_size(&self) -> Option<Vec3> {
        self.original_size
    }

    /// Forget the captured size; the next scaled update re-reads the shape.
    pub fn recapture_size(&mut self) {
        self.original_size = None;
    }

    /// Current interpolation factor in `[0, 1]`.
    pub fn factor(&self) -> f32 {
        let raw = self.clock.sin();
        if self.ping_pong { (raw + 1.0) * 0.5 } else { raw.abs() }
    }

    fn scales(&self) -> bool {
        self.scale_min != self.scale_max
    }

    fn cycles_color(&self) -> bool {
        self.color_start != self.color_end
    }

    /// Advance the clock. Returns `false` when nothing should change.
    fn step(&mut self, dt: f32) -> bool {
        if !self.active || dt == 0.0 {
            return false;
        }
        self.clock += dt * self.speed;
        true
    }

    fn scale_at(&self, factor: f32) -> f32 {
        self.scale_min + factor * (self.scale_max - self.scale_min)
    }

    pub fn update_2d(&mut self, shape: &mut Shape2d, dt: f32) {
        if !self.step(dt) {
            return;
        }
        let factor = self.factor();

        if self.rotation_speed != 0.0 {
            shape.rotation = normalize_degrees(shape.rotation + self.rotation_speed * dt);
        }
        if self.scales() {
            let original = *self.original_size.get_or_insert(shape.size.extend(0.0));
            shape.size = original.truncate() * self.scale_at(factor);
        }
        if self.cycles_color() {
            shape.color = self.color_start.lerp(self.color_end, factor);
        }
    }

    #[cfg(feature = "render3d")]
    pub fn update_3d(&mut self, shape: &mut Shape3d, dt: f32) {
        if !self.step(dt) {
            return;
        }
        let factor = self.factor();

        if self.rotation_speed != 0.0 {
            shape.rotate_yaw(self.rotation_speed * dt);
        }
        if self.scales() {
            let original = *self.original_size.get_or_insert(shape.size);
            shape.size = original * self.scale_at(factor);
        }
        if self.cycles_color() {
            shape.color = self.color_start.lerp(self.color_end, factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn circle() -> Shape2d {
        Shape2d::circle(Vec2::ZERO, 10.0, Color::RED)
    }

    #[test]
    fn factor_modes() {
        let mut anim = ShapeAnimation::new(1.0);
        let mut shape = circle();
        anim.update_2d(&mut shape, FRAC_PI_2);
        assert!((anim.factor() - 1.0).abs() < 1e-6);

        let mut anim = ShapeAnimation::new(1.0).ping_pong();
        assert!((anim.factor() - 0.5).abs() < 1e-6);
        anim.update_2d(&mut shape, -FRAC_PI_2);
        assert!(anim.factor().abs() < 1e-6);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut anim = ShapeAnimation::new(2.0)
            .pulse(0.5, 1.5)
            .spin(90.0)
            .color_cycle(Color::RED, Color::BLUE);
        let mut shape = circle();
        anim.update_2d(&mut shape, 0.3);
        let (before_shape, before_anim) = (shape.clone(), anim.clone());

        anim.update_2d(&mut shape, 0.0);
        assert_eq!(shape, before_shape);
        assert_eq!(anim, before_anim);
    }

    #[test]
    fn inactive_changes_nothing() {
        let mut anim = ShapeAnimation::new(1.0).spin(45.0).paused();
        let mut shape = circle();
        anim.update_2d(&mut shape, 1.0);
        assert_eq!(shape, circle());
        assert_eq!(anim.clock(), 0.0);
    }

    #[test]
    fn scale_is_relative_to_original() {
        let mut anim = ShapeAnimation::new(1.0).pulse(0.5, 1.5);
        let mut shape = circle();
        let expected = |anim: &ShapeAnimation| 20.0 * (0.5 + anim.factor() * (1.5 - 0.5));

        // clock 0.4: factor |sin 0.4|
        anim.update_2d(&mut shape, 0.4);
        assert!((anim.factor() - 0.4f32.sin()).abs() < 1e-6);
        assert!((shape.size.x - expected(&anim)).abs() < 1e-4, "first: {}", shape.size.x);
        assert!((shape.size.x - 20.0 * (0.5 + 0.4f32.sin())).abs() < 1e-4);

        // clock 1.1: still scaled from 20, not from the first result
        anim.update_2d(&mut shape, 0.7);
        assert!((shape.size.x - 20.0 * (0.5 + 1.1f32.sin())).abs() < 1e-4, "second: {}", shape.size.x);
        assert_eq!(shape.size.x, shape.size.y);

        for _ in 0..500 {
            anim.update_2d(&mut shape, 0.037);
            assert!((shape.size.x - expected(&anim)).abs() < 1e-3, "scale drifted to {}", shape.size.x);
        }
        assert_eq!(anim.original_size(), Some(Vec3::new(20.0, 20.0, 0.0)));
    }

    #[test]
    fn recapture_uses_new_size() {
        let mut anim = ShapeAnimation::new(1.0).pulse(1.0, 2.0);
        let mut shape = circle();
        anim.update_2d(&mut shape, 0.1);
        shape.size = Vec2::splat(100.0);
        anim.recapture_size();
        anim.update_2d(&mut shape, 0.1);
        assert_eq!(anim.original_size(), Some(Vec3::new(100.0, 100.0, 0.0)));
    }

    #[test]
    fn spin_keeps_rotation_in_range() {
        let mut anim = ShapeAnimation::new(1.0).spin(-725.0);
        let mut shape = circle();
        for _ in 0..100 {
            anim.update_2d(&mut shape, 0.33);
            assert!((0.0..360.0).contains(&shape.rotation()));
        }
    }

    #[test]
    fn color_follows_factor() {
        let mut anim = ShapeAnimation::new(1.0).color_cycle(Color::rgb(0, 0, 0), Color::rgb(200, 100, 50));
        let mut shape = circle();
        anim.update_2d(&mut shape, FRAC_PI_2);
        assert_eq!(shape.color, Color::rgb(200, 100, 50));
    }

    #[test]
    fn untouched_channels_stay() {
        let mut anim = ShapeAnimation::new(1.0).spin(10.0);
        let mut shape = circle();
        anim.update_2d(&mut shape, 0.5);
        assert_eq!(shape.size, Vec2::splat(20.0));
        assert_eq!(shape.color, Color::RED);
        assert_eq!(shape.rotation(), 5.0);
    }

    #[cfg(feature = "render3d")]
    #[test]
    fn update_3d_spins_yaw_and_scales_all_axes() {
        let mut anim = ShapeAnimation::new(1.0).spin(90.0).pulse(1.0, 3.0);
        let mut cube = Shape3d::cube(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Color::RED);
        anim.update_3d(&mut cube, FRAC_PI_2);
        let r = cube.rotation();
        assert_eq!((r.x, r.z), (0.0, 0.0));
        assert!((r.y - 90.0 * FRAC_PI_2).abs() < 1e-3);
        assert!((cube.size - Vec3::new(3.0, 6.0, 9.0)).length() < 1e-3);
    }

    #[test]
    fn deserializes_with_defaults() {
        let anim: ShapeAnimation = serde_json::from_str(r#"{ "rotation_speed": 30.0, "ping_pong": true }"#).unwrap();
        assert!(anim.active);
        assert_eq!(anim.speed, 1.0);
        assert_eq!(anim.rotation_speed, 30.0);
        assert!(anim.ping_pong);
        assert_eq!(anim.original_size(), None);
    }
}
