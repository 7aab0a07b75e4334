//! Property tests for friction decay from arbitrary starting accelerations.
//!
//! The dominant axis is generated as `limit / decay^(steps - offset)` so the
//! decayed value lands clearly on one side of the friction limit after each
//! step, away from float rounding at the threshold.

use coinrun::{
    Motion, MotionLimits, DELTA_TIME, FRICTION_DECAY, HIGHEST_ACCELERATION, LOWEST_ACCELERATION,
};
use glam::Vec3;
use proptest::prelude::*;
use test_utils::physics::settle_bound;

/// Acceleration whose largest component has magnitude `peak` on `axis`.
fn shaped(peak: f32, axis: usize, negative: bool, others: (f32, f32)) -> Vec3 {
    let sign = if negative { -1.0 } else { 1.0 };
    let mut components = [others.0 * peak, others.1 * peak, others.0 * peak];
    if let Some(dominant) = components.get_mut(axis) {
        *dominant = sign * peak;
    }
    Vec3::from_array(components)
}

fn above_limit() -> impl Strategy<Value = (f32, u32)> {
    (1_u32..=11, 0.1_f32..0.9).prop_map(|(steps, offset)| {
        let exponent = f64::from(steps) - f64::from(offset);
        let peak = f64::from(LOWEST_ACCELERATION) / f64::from(FRICTION_DECAY).powf(exponent);
        (peak as f32, steps)
    })
}

fn initial_acceleration() -> impl Strategy<Value = (Vec3, u32)> {
    (
        above_limit(),
        0_usize..3,
        any::<bool>(),
        (-0.9_f32..0.9, -0.9_f32..0.9),
    )
        .prop_map(|((peak, steps), axis, negative, others)| {
            (shaped(peak, axis, negative, others), steps)
        })
}

fn magnitudes(acceleration: Vec3, steps: u32) -> (Motion, Vec<f32>) {
    let mut motion = Motion::new(MotionLimits::default());
    motion.accelerate_towards(acceleration);
    let mut seen = vec![motion.acceleration().length()];
    for _ in 0..steps {
        motion.apply(DELTA_TIME);
        seen.push(motion.acceleration().length());
    }
    (motion, seen)
}

proptest! {
    #[test]
    fn decay_is_monotonic_and_settles_within_bound((acceleration, steps) in initial_acceleration()) {
        let peak = acceleration.abs().max_element();
        prop_assert!(peak <= HIGHEST_ACCELERATION);
        let bound = settle_bound(peak, LOWEST_ACCELERATION, FRICTION_DECAY);
        prop_assert_eq!(bound, steps);

        let (motion, seen) = magnitudes(acceleration, bound);
        prop_assert!(seen.windows(2).all(|pair| matches!(pair, [a, b] if b <= a)));
        prop_assert_eq!(motion.acceleration(), Vec3::ZERO);
        prop_assert_eq!(motion.velocity(), Vec3::ZERO);
    }

    #[test]
    fn still_decaying_one_step_before_bound((acceleration, steps) in initial_acceleration()) {
        let (motion, _) = magnitudes(acceleration, steps - 1);
        prop_assert_ne!(motion.acceleration(), Vec3::ZERO);
    }

    #[test]
    fn small_acceleration_settles_in_one_step(
        acceleration in (-0.03_f32..=0.03, -0.03_f32..=0.03, -0.03_f32..=0.03)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    ) {
        let bound = settle_bound(
            acceleration.abs().max_element(),
            LOWEST_ACCELERATION,
            FRICTION_DECAY,
        );
        prop_assert_eq!(bound, 1);
        let (motion, _) = magnitudes(acceleration, bound);
        prop_assert_eq!(motion.acceleration(), Vec3::ZERO);
        prop_assert_eq!(motion.velocity(), Vec3::ZERO);
    }
}
