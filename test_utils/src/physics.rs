//! Convenience constructors for bodies and cages used in tests.

use coinrun::{AxisAlignedBox, MotionLimits, RigidBody};
use glam::Vec3;

/// Cube cage of half-size `half` centred on `center`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::physics::cube;
/// let cage = cube(Vec3::ZERO, 0.5);
/// assert_eq!(cage.max, Vec3::splat(0.5));
/// ```
pub fn cube(center: Vec3, half: f32) -> AxisAlignedBox {
    AxisAlignedBox::from_center(center, Vec3::splat(half))
}

/// Movable unit cube at rest, centred on `center`.
pub fn body_at(center: Vec3) -> RigidBody {
    let cage = cube(center, 0.5);
    RigidBody::new(cage.max, cage.min, MotionLimits::default())
}

/// Immovable unit cube centred on `center`.
pub fn obstacle_at(center: Vec3) -> RigidBody {
    let cage = cube(center, 0.5);
    RigidBody::immovable(cage.max, cage.min, MotionLimits::default())
}

/// Movable unit cube centred on `center` already travelling at `velocity`.
pub fn moving_body(center: Vec3, velocity: Vec3) -> RigidBody {
    let mut body = body_at(center);
    body.motion_mut().set_velocity(velocity);
    body
}

/// Upper bound on the integration steps needed for an acceleration of
/// magnitude `initial` to decay below `limit` at the given retention `decay`.
///
/// # Examples
/// ```
/// use test_utils::physics::settle_bound;
/// assert_eq!(settle_bound(0.1, 0.03, 0.9), 12);
/// ```
pub fn settle_bound(initial: f32, limit: f32, decay: f32) -> u32 {
    if initial <= limit {
        return 1;
    }
    ((limit / initial).ln() / decay.ln()).ceil() as u32
}
