//! Behaviour tests for friction and settling using rust-rspec.
//!
//! A single impulse is applied to a resting body which is then integrated
//! until friction brings it to rest.

use coinrun::{Direction, RigidBody, DELTA_TIME, FRICTION_DECAY, IMPULSE_RATE, LOWEST_ACCELERATION};
use glam::Vec3;
use test_utils::physics::{body_at, settle_bound};

#[derive(Clone, Debug)]
struct Coasting {
    body: RigidBody,
    magnitudes: Vec<f32>,
}

impl Default for Coasting {
    fn default() -> Self {
        Self {
            body: body_at(Vec3::ZERO),
            magnitudes: Vec::new(),
        }
    }
}

impl Coasting {
    fn push(&mut self) {
        self.body.push(Direction::Right, IMPULSE_RATE);
        self.magnitudes.push(self.body.motion().acceleration().length());
    }

    fn coast(&mut self, steps: u32) {
        for _ in 0..steps {
            self.body.integrate(DELTA_TIME);
            self.magnitudes.push(self.body.motion().acceleration().length());
        }
    }
}

#[test]
fn impulse_decays_to_rest() {
    let bound = settle_bound(IMPULSE_RATE, LOWEST_ACCELERATION, FRICTION_DECAY);
    rspec::run(&rspec::given(
        "a resting body pushed once to the right",
        Coasting::default(),
        |ctx| {
            ctx.before_each(|world| world.push());
            ctx.when("it coasts for a single step", |ctx| {
                ctx.before_each(|world| world.coast(1));
                ctx.then("it has moved towards -x", |world| {
                    assert!(world.body.center().x < 0.0);
                    assert!(world.body.is_moving());
                });
            });
            ctx.when("it coasts until friction takes over", move |ctx| {
                ctx.before_each(move |world| world.coast(bound));
                ctx.then("the acceleration never grows", |world| {
                    assert!(world
                        .magnitudes
                        .windows(2)
                        .all(|pair| matches!(pair, [a, b] if b <= a)));
                });
                ctx.then("the body is at rest", |world| {
                    assert!(!world.body.is_moving());
                    assert_eq!(world.body.motion().acceleration(), Vec3::ZERO);
                });
            });
            ctx.when("it coasts one step short of settling", move |ctx| {
                ctx.before_each(move |world| world.coast(bound - 1));
                ctx.then("it is still moving", |world| {
                    assert!(world.body.is_moving());
                });
            });
        },
    ));
}
