//! Collision detection and resolution between cages.
//!
//! The resolver only ever rewrites velocities (and clears accelerations); the
//! caller realises the change on the next integration step. The one exception
//! is the world boundary, which recentres a stray cage directly.
//!
//! Resolution between two bodies follows a fixed policy:
//!
//! - both pinned: nothing happens;
//! - one pinned: the free body bounces, popping upwards if it was at rest or
//!   reversing if it was moving;
//! - both free and at rest: each is pushed apart by half the penetration
//!   depth;
//! - both free and at least one moving: both velocities are reversed.

use glam::Vec3;
use log::{debug, trace};

use crate::aabb::AxisAlignedBox;
use crate::body::RigidBody;
use crate::vector_math::{axis, from_axes};

/// What [`resolve_pairwise`] did to a pair of bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// Neither body can move; the pair was left untouched.
    BothImmovable,
    /// The movable body of the pair bounced off the pinned one.
    Bounced {
        /// `true` when the first argument was the body that bounced.
        first: bool,
    },
    /// Both bodies were at rest and were pushed apart.
    Separated {
        /// Velocity given to the first body; the second got its negation.
        push: Vec3,
    },
    /// At least one body was moving; both velocities were negated.
    Reversed,
}

/// Returns `true` when the two cages overlap.
#[must_use]
pub fn check_pairwise(a: &AxisAlignedBox, b: &AxisAlignedBox) -> bool {
    a.intersects(b)
}

/// Per-axis penetration of `other` into `this`, halved and signed so that it
/// points from `other` towards `this`.
///
/// On each axis, when the top of `other` sits strictly inside `this` the
/// depth is `other.max - this.min` and `this` is pushed up the axis; when the
/// top of `this` sits strictly inside `other` the depth is
/// `this.max - other.min` and `this` is pushed down the axis. Otherwise the
/// axis contributes nothing.
///
/// # Examples
/// ```
/// use coinrun::{collision::push_vector, AxisAlignedBox};
/// use glam::Vec3;
///
/// let a = AxisAlignedBox::new(Vec3::ONE, Vec3::NEG_ONE);
/// let b = AxisAlignedBox::new(Vec3::new(2.5, 1.0, 1.0), Vec3::new(0.5, -1.0, -1.0));
/// assert_eq!(push_vector(&a, &b), Vec3::new(-0.25, 0.0, 0.0));
/// ```
#[must_use]
pub fn push_vector(this: &AxisAlignedBox, other: &AxisAlignedBox) -> Vec3 {
    from_axes(|i| {
        let (this_min, this_max) = (axis(this.min, i), axis(this.max, i));
        let (other_min, other_max) = (axis(other.min, i), axis(other.max, i));
        let depth = if other_max > this_min && other_max < this_max {
            other_max - this_min
        } else if this_max > other_min && this_max < other_max {
            -(this_max - other_min)
        } else {
            0.0
        };
        depth / 2.0
    })
}

/// Applies the resolution policy to two overlapping bodies.
///
/// Only velocities and accelerations change; positions are left for the
/// next integration step.
pub fn resolve_pairwise(this: &mut RigidBody, other: &mut RigidBody, nudge: f32) -> Resolution {
    match (this.can_move(), other.can_move()) {
        (false, false) => {
            debug!("collision between two immovable bodies ignored");
            Resolution::BothImmovable
        }
        (true, false) => {
            bounce(this, nudge);
            Resolution::Bounced { first: true }
        }
        (false, true) => {
            bounce(other, nudge);
            Resolution::Bounced { first: false }
        }
        (true, true) if !this.is_moving() && !other.is_moving() => {
            let push = push_vector(this.cage(), other.cage());
            trace!("separating resting bodies with push {push:?}");
            this.motion_mut().set_velocity(push);
            other.motion_mut().set_velocity(-push);
            this.motion_mut().clear_acceleration();
            other.motion_mut().clear_acceleration();
            Resolution::Separated { push }
        }
        (true, true) => {
            this.reverse_motion();
            other.reverse_motion();
            Resolution::Reversed
        }
    }
}

/// Bounces a movable body off an immovable obstacle.
fn bounce(body: &mut RigidBody, nudge: f32) {
    if body.is_moving() {
        trace!("reversing body moving at {:?}", body.velocity());
        body.reverse_motion();
    } else {
        trace!("popping resting body upwards");
        body.motion_mut().set_velocity(Vec3::new(0.0, nudge, 0.0));
    }
}

/// Checks two bodies and resolves them if their cages overlap.
///
/// Returns `None` when the cages do not touch.
pub fn collide(this: &mut RigidBody, other: &mut RigidBody, nudge: f32) -> Option<Resolution> {
    if !check_pairwise(this.cage(), other.cage()) {
        return None;
    }
    debug!(
        "collision between cages {:?} and {:?}",
        this.cage(),
        other.cage()
    );
    Some(resolve_pairwise(this, other, nudge))
}

/// Target point a stray cage is recentred on by [`resolve_boundary`].
///
/// Per axis: past the upper face the target is `boundary.max - cage.max`;
/// past the lower face it is `cage.min - boundary.min`; otherwise the cage
/// keeps its centre coordinate. The result is used as an absolute centre
/// even though it is computed like an offset.
#[must_use]
pub fn boundary_target(cage: &AxisAlignedBox, boundary: &AxisAlignedBox) -> Vec3 {
    let center = cage.center();
    from_axes(|i| {
        let (cage_min, cage_max) = (axis(cage.min, i), axis(cage.max, i));
        let (bound_min, bound_max) = (axis(boundary.min, i), axis(boundary.max, i));
        if cage_max > bound_max {
            bound_max - cage_max
        } else if cage_min < bound_min {
            cage_min - bound_min
        } else {
            axis(center, i)
        }
    })
}

/// Recentres `body` if its cage is not strictly inside `boundary`.
///
/// Returns the logical point the cage was moved to, or `None` if the body
/// was already inside. Velocity is left untouched.
pub fn resolve_boundary(body: &mut RigidBody, boundary: &AxisAlignedBox) -> Option<Vec3> {
    if body.cage().is_fully_inside(boundary) {
        return None;
    }
    let target = boundary_target(body.cage(), boundary);
    debug!(
        "cage {:?} left the playable region; recentring on {target:?}",
        body.cage()
    );
    body.place_at(target);
    Some(target)
}

#[cfg(test)]
mod tests;
