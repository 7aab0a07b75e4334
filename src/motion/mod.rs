//! Motion integration for a single body.
//!
//! Integration is semi-implicit Euler in acceleration space: impulses
//! accumulate into the acceleration, the acceleration feeds the velocity and
//! the velocity yields the displacement returned to the caller. Friction is a
//! fixed fractional decay of the acceleration applied once per call,
//! independent of the time step. Once the decayed acceleration falls inside
//! the friction limit on every axis the body settles and both vectors are
//! zeroed.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::vector_math::{clamp_symmetric, within_symmetric};
use crate::{FRICTION_DECAY, HIGHEST_ACCELERATION, LOWEST_ACCELERATION};

/// Constants bounding how a body accelerates, moves and comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionLimits {
    /// Largest acceleration allowed on any single axis.
    pub highest_acceleration: f32,
    /// Multiplier applied to the acceleration after every step.
    pub friction_decay: f32,
    /// Acceleration magnitude under which the body settles.
    pub friction_limit: f32,
}

impl Default for MotionLimits {
    fn default() -> Self {
        Self {
            highest_acceleration: HIGHEST_ACCELERATION,
            friction_decay: FRICTION_DECAY,
            friction_limit: LOWEST_ACCELERATION,
        }
    }
}

/// Velocity and acceleration state of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    velocity: Vec3,
    acceleration: Vec3,
    movable: bool,
    limits: MotionLimits,
}

impl Motion {
    /// Creates a movable body at rest.
    #[must_use]
    pub const fn new(limits: MotionLimits) -> Self {
        Self {
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            movable: true,
            limits,
        }
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current accumulated acceleration.
    #[must_use]
    pub const fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Limits this state integrates under.
    #[must_use]
    pub const fn limits(&self) -> &MotionLimits {
        &self.limits
    }

    /// Adds `impulse` to the accumulated acceleration.
    ///
    /// Several impulses in the same frame compose additively. Immovable
    /// bodies ignore impulses.
    pub fn accelerate_towards(&mut self, impulse: Vec3) {
        if self.movable {
            self.acceleration += impulse;
        }
    }

    /// Overwrites the velocity; immovable bodies stay at rest.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        if self.movable {
            self.velocity = velocity;
        } else {
            self.stop_motion();
        }
    }

    /// Clears the accumulated acceleration, keeping the velocity.
    pub fn clear_acceleration(&mut self) {
        self.acceleration = Vec3::ZERO;
    }

    /// Advances the state by `delta_time` and returns the displacement the
    /// body should be moved by.
    ///
    /// # Examples
    /// ```
    /// use coinrun::motion::{Motion, MotionLimits};
    /// use glam::Vec3;
    ///
    /// let mut motion = Motion::new(MotionLimits::default());
    /// motion.accelerate_towards(Vec3::new(0.1, 0.0, 0.0));
    /// let displacement = motion.apply(1.0);
    /// assert!((displacement.x - 0.1).abs() < 1e-6);
    /// assert!((motion.acceleration().x - 0.09).abs() < 1e-6);
    /// ```
    pub fn apply(&mut self, delta_time: f32) -> Vec3 {
        if !self.movable {
            self.stop_motion();
            return Vec3::ZERO;
        }

        self.velocity += self.acceleration * delta_time;
        let displacement = self.velocity * delta_time;

        self.acceleration = clamp_symmetric(self.acceleration, self.limits.highest_acceleration);
        self.apply_friction();

        displacement
    }

    fn apply_friction(&mut self) {
        self.acceleration *= self.limits.friction_decay;
        if within_symmetric(self.acceleration, self.limits.friction_limit) {
            self.stop_motion();
        }
    }

    /// Zeroes velocity and acceleration.
    pub fn stop_motion(&mut self) {
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
    }

    /// Negates the velocity, leaving the acceleration untouched.
    pub fn reverse_motion(&mut self) {
        self.velocity = -self.velocity;
    }

    /// Returns `true` while the velocity is non-zero.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec3::ZERO
    }

    /// Returns the movable flag.
    #[must_use]
    pub const fn can_move(&self) -> bool {
        self.movable
    }

    /// Sets the movable flag; pinning a body also brings it to rest.
    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
        if !movable {
            self.stop_motion();
        }
    }
}
