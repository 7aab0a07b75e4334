use super::*;
use crate::motion::MotionLimits;
use approx::assert_relative_eq;
use rstest::rstest;

const NUDGE: f32 = 1.0;

fn body(max: Vec3, min: Vec3) -> RigidBody {
    RigidBody::new(max, min, MotionLimits::default())
}

fn pinned(max: Vec3, min: Vec3) -> RigidBody {
    RigidBody::immovable(max, min, MotionLimits::default())
}

fn cube() -> RigidBody {
    body(Vec3::ONE, Vec3::NEG_ONE)
}

#[rstest]
#[case::this_on_top(
    AxisAlignedBox::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0)),
    AxisAlignedBox::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(-3.0, -1.0, -1.0)),
    Vec3::new(0.5, 0.0, 0.0)
)]
#[case::this_under(
    AxisAlignedBox::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0)),
    AxisAlignedBox::new(Vec3::new(1.0, 3.0, 1.0), Vec3::new(-1.0, 0.0, -1.0)),
    Vec3::new(0.0, -0.5, 0.0)
)]
#[case::this_engulfs_other(
    AxisAlignedBox::new(Vec3::new(2.0, 1.0, 1.0), Vec3::new(-2.0, -1.0, -1.0)),
    AxisAlignedBox::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0)),
    Vec3::new(1.5, 0.0, 0.0)
)]
#[case::identical(
    AxisAlignedBox::new(Vec3::ONE, Vec3::NEG_ONE),
    AxisAlignedBox::new(Vec3::ONE, Vec3::NEG_ONE),
    Vec3::ZERO
)]
fn push_vector_cases(
    #[case] this: AxisAlignedBox,
    #[case] other: AxisAlignedBox,
    #[case] expected: Vec3,
) {
    let push = push_vector(&this, &other);
    assert_relative_eq!(push.x, expected.x);
    assert_relative_eq!(push.y, expected.y);
    assert_relative_eq!(push.z, expected.z);
}

#[test]
fn both_immovable_is_a_no_op() {
    let mut a = pinned(Vec3::ONE, Vec3::NEG_ONE);
    let mut b = pinned(Vec3::ONE, Vec3::NEG_ONE);
    let before = (a, b);
    assert_eq!(resolve_pairwise(&mut a, &mut b, NUDGE), Resolution::BothImmovable);
    assert_eq!((a, b), before);
}

#[rstest]
#[case::free_first(true)]
#[case::free_second(false)]
fn resting_body_pops_off_obstacle(#[case] free_first: bool) {
    let mut free = cube();
    let mut wall = pinned(Vec3::ONE, Vec3::NEG_ONE);
    let outcome = if free_first {
        resolve_pairwise(&mut free, &mut wall, NUDGE)
    } else {
        resolve_pairwise(&mut wall, &mut free, NUDGE)
    };
    assert_eq!(outcome, Resolution::Bounced { first: free_first });
    assert_eq!(free.velocity(), Vec3::new(0.0, NUDGE, 0.0));
    assert_eq!(wall.velocity(), Vec3::ZERO);
}

#[test]
fn moving_body_reverses_off_obstacle() {
    let mut free = cube();
    free.motion_mut().set_velocity(Vec3::new(0.3, 0.0, -0.1));
    let mut wall = pinned(Vec3::ONE, Vec3::NEG_ONE);
    resolve_pairwise(&mut free, &mut wall, NUDGE);
    assert_eq!(free.velocity(), Vec3::new(-0.3, 0.0, 0.1));
}

#[test]
fn moving_pair_reverses_both() {
    let mut a = cube();
    let mut b = cube();
    a.motion_mut().set_velocity(Vec3::X);
    assert_eq!(resolve_pairwise(&mut a, &mut b, NUDGE), Resolution::Reversed);
    assert_eq!(a.velocity(), Vec3::NEG_X);
    assert_eq!(b.velocity(), Vec3::ZERO);
}

#[test]
fn separation_clears_accelerations() {
    let mut a = cube();
    let mut b = body(Vec3::new(2.5, 1.0, 1.0), Vec3::new(0.5, -1.0, -1.0));
    a.accelerate_towards(Vec3::new(0.05, 0.0, 0.0));
    resolve_pairwise(&mut a, &mut b, NUDGE);
    assert_eq!(a.motion().acceleration(), Vec3::ZERO);
    assert_relative_eq!(a.velocity().x, -0.25);
    assert_relative_eq!(b.velocity().x, 0.25);
}

#[test]
fn collide_skips_apart_cages() {
    let mut a = cube();
    let mut b = body(Vec3::splat(5.0), Vec3::splat(3.0));
    assert_eq!(collide(&mut a, &mut b, NUDGE), None);
}

#[test]
fn inside_body_is_left_alone() {
    let boundary = AxisAlignedBox::new(Vec3::splat(50.0), Vec3::splat(-50.0));
    let mut a = cube();
    assert_eq!(resolve_boundary(&mut a, &boundary), None);
    assert_eq!(a.center(), Vec3::ZERO);
}

#[test]
fn lower_face_target_uses_offset_arithmetic() {
    let boundary = AxisAlignedBox::new(Vec3::splat(50.0), Vec3::splat(-50.0));
    let cage = AxisAlignedBox::new(Vec3::new(1.0, -49.0, 1.0), Vec3::new(-1.0, -55.0, -1.0));
    let target = boundary_target(&cage, &boundary);
    assert_relative_eq!(target.y, -5.0);
    assert_relative_eq!(target.x, 0.0);
}

#[test]
fn flush_body_is_corrected_onto_its_own_centre() {
    let boundary = AxisAlignedBox::new(Vec3::splat(50.0), Vec3::splat(-50.0));
    let mut flush = body(Vec3::new(50.0, 1.0, 1.0), Vec3::new(48.0, -1.0, -1.0));
    // Flush with the wall counts as outside, but no face is past it, so the
    // correction lands where the cage already is.
    let target = resolve_boundary(&mut flush, &boundary);
    assert_eq!(target, Some(Vec3::new(49.0, 0.0, 0.0)));
    assert_relative_eq!(flush.cage().max.x, 50.0);
    assert_eq!(resolve_boundary(&mut flush, &boundary), target);
}
