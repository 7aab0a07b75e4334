//! Rigid bodies: a collision cage paired with its motion state.
//!
//! Collision maths happens in the body's logical units. Anything handed to the
//! renderer-facing model is first multiplied by the body's scale factor so the
//! rendered object moves by the same visual amount as its cage.

use glam::Vec3;

use crate::aabb::AxisAlignedBox;
use crate::direction::Direction;
use crate::motion::{Motion, MotionLimits};

/// A collision cage with velocity and acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    cage: AxisAlignedBox,
    motion: Motion,
    scale_factor: Vec3,
}

impl RigidBody {
    /// Creates a movable body at rest whose cage spans `max` to `min`.
    #[must_use]
    pub fn new(max: Vec3, min: Vec3, limits: MotionLimits) -> Self {
        Self {
            cage: AxisAlignedBox::new(max, min),
            motion: Motion::new(limits),
            scale_factor: Vec3::ONE,
        }
    }

    /// Creates a body that never moves.
    #[must_use]
    pub fn immovable(max: Vec3, min: Vec3, limits: MotionLimits) -> Self {
        let mut body = Self::new(max, min, limits);
        body.motion.set_movable(false);
        body
    }

    /// The collision cage.
    #[must_use]
    pub const fn cage(&self) -> &AxisAlignedBox {
        &self.cage
    }

    /// The motion state.
    #[must_use]
    pub const fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Mutable access to the motion state.
    pub fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    /// Factor converting logical displacements into render units.
    #[must_use]
    pub const fn scale_factor(&self) -> Vec3 {
        self.scale_factor
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.motion.velocity()
    }

    /// Centre of the cage.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.cage.center()
    }

    /// Returns `true` while the body has a non-zero velocity.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }

    /// Returns `true` if the body may move at all.
    #[must_use]
    pub const fn can_move(&self) -> bool {
        self.motion.can_move()
    }

    /// Adds an acceleration impulse.
    pub fn accelerate_towards(&mut self, impulse: Vec3) {
        self.motion.accelerate_towards(impulse);
    }

    /// Adds an impulse of magnitude `rate` in `direction`.
    pub fn push(&mut self, direction: Direction, rate: f32) {
        self.accelerate_towards(direction.unit() * rate);
    }

    /// Integrates motion for `delta_time`, moves the cage and returns the
    /// logical displacement.
    pub fn integrate(&mut self, delta_time: f32) -> Vec3 {
        let displacement = self.motion.apply(delta_time);
        self.cage.translate(displacement);
        displacement
    }

    /// Moves the cage by `delta` without touching the motion state.
    pub fn translate(&mut self, delta: Vec3) {
        self.cage.translate(delta);
    }

    /// Recentres the cage on `point`.
    pub fn place_at(&mut self, point: Vec3) {
        self.cage.move_to(point);
    }

    /// Scales the cage about its centre and remembers `factor` for
    /// converting later displacements into render units.
    pub fn scale(&mut self, factor: Vec3) {
        self.cage.scale(factor);
        self.scale_factor = factor;
    }

    /// Converts a logical vector into render units.
    #[must_use]
    pub fn to_render(&self, logical: Vec3) -> Vec3 {
        logical * self.scale_factor
    }

    /// Zeroes velocity and acceleration.
    pub fn stop_motion(&mut self) {
        self.motion.stop_motion();
    }

    /// Negates the velocity.
    pub fn reverse_motion(&mut self) {
        self.motion.reverse_motion();
    }
}
