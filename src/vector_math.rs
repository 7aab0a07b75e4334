//! Small per-axis helpers layered over [`glam::Vec3`].
use glam::Vec3;

/// Returns the component of `vector` selected by `index` (0→x, 1→y, 2→z).
///
/// # Panics
///
/// Panics when `index` is not 0, 1 or 2. Axis indices are a programming
/// contract, so an out-of-range index is a bug in the caller.
///
/// # Examples
/// ```
/// use coinrun::vector_math::axis;
/// use glam::Vec3;
/// assert_eq!(axis(Vec3::new(1.0, 2.0, 3.0), 2), 3.0);
/// ```
#[must_use]
pub fn axis(vector: Vec3, index: usize) -> f32 {
    match index {
        0 => vector.x,
        1 => vector.y,
        2 => vector.z,
        _ => panic!("axis index {index} is outside 0..3"),
    }
}

/// Builds a vector by evaluating `per_axis` for each axis index in turn.
///
/// # Examples
/// ```
/// use coinrun::vector_math::from_axes;
/// use glam::Vec3;
/// assert_eq!(from_axes(|i| i as f32), Vec3::new(0.0, 1.0, 2.0));
/// ```
#[must_use]
pub fn from_axes(per_axis: impl FnMut(usize) -> f32) -> Vec3 {
    Vec3::from_array(std::array::from_fn(per_axis))
}

/// Clamps every component of `vector` into `[-limit, limit]`.
///
/// A negative `limit` is treated as its magnitude.
///
/// # Examples
/// ```
/// use coinrun::vector_math::clamp_symmetric;
/// use glam::Vec3;
/// let clamped = clamp_symmetric(Vec3::new(3.0, -4.0, 0.5), 1.0);
/// assert_eq!(clamped, Vec3::new(1.0, -1.0, 0.5));
/// ```
#[must_use]
pub fn clamp_symmetric(vector: Vec3, limit: f32) -> Vec3 {
    let bound = Vec3::splat(limit.abs());
    vector.clamp(-bound, bound)
}

/// Returns `true` when every component of `vector` lies within `[-limit, limit]`.
#[must_use]
pub fn within_symmetric(vector: Vec3, limit: f32) -> bool {
    vector.abs().cmple(Vec3::splat(limit.abs())).all()
}
