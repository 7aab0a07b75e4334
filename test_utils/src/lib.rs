//! Utility helpers for tests.
pub mod physics;

use glam::Vec3;

/// Assert that two vectors agree component-wise within `epsilon`.
///
/// # Panics
/// Panics with both vectors in the message if any component differs.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// test_utils::assert_vec3_near(Vec3::new(0.1 + 0.2, 0.0, 0.0), Vec3::new(0.3, 0.0, 0.0), 1e-6);
/// ```
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    let close = actual
        .to_array()
        .iter()
        .zip(expected.to_array())
        .all(|(a, e)| approx::abs_diff_eq!(*a, e, epsilon = epsilon));
    assert!(close, "{actual:?} differs from {expected:?} by more than {epsilon}");
}
