//! Property tests for cage geometry.
//!
//! Cages are generated from arbitrary corner pairs, so the constructor's
//! repair step is exercised on every case.

use coinrun::{check_pairwise, collision::push_vector, AxisAlignedBox};
use glam::Vec3;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -100.0_f32..100.0
}

fn point() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn any_cage() -> impl Strategy<Value = AxisAlignedBox> {
    (point(), point()).prop_map(|(a, b)| AxisAlignedBox::new(a, b))
}

proptest! {
    #[test]
    fn construction_orders_corners(a in point(), b in point()) {
        let cage = AxisAlignedBox::new(a, b);
        prop_assert!(cage.min.cmple(cage.max).all());
    }

    #[test]
    fn repair_is_idempotent(cage in any_cage()) {
        let mut repaired = cage;
        repaired.repair();
        prop_assert_eq!(repaired, cage);
    }

    #[test]
    fn intersection_is_symmetric(a in any_cage(), b in any_cage()) {
        prop_assert_eq!(check_pairwise(&a, &b), check_pairwise(&b, &a));
    }

    #[test]
    fn cage_contains_its_centre(cage in any_cage()) {
        prop_assert!(cage.contains_point(cage.center()));
        prop_assert!(check_pairwise(&cage, &cage));
    }

    #[test]
    fn translation_preserves_extent(cage in any_cage(), delta in point()) {
        let mut moved = cage;
        moved.translate(delta);
        let drift = (moved.extent() - cage.extent()).abs().max_element();
        prop_assert!(drift < 1e-3);
    }

    #[test]
    fn move_to_recentres(cage in any_cage(), target in point()) {
        let mut moved = cage;
        moved.move_to(target);
        let error = (moved.center() - target).abs().max_element();
        prop_assert!(error < 1e-3);
    }

    #[test]
    fn push_ignores_disjoint_axes(a in any_cage(), b in any_cage()) {
        let push = push_vector(&a, &b).to_array();
        let axes = a.min.to_array().into_iter()
            .zip(a.max.to_array())
            .zip(b.min.to_array().into_iter().zip(b.max.to_array()));
        for (component, ((a_min, a_max), (b_min, b_max))) in push.into_iter().zip(axes) {
            if a_max < b_min || b_max < a_min {
                prop_assert_eq!(component, 0.0);
            }
        }
    }
}
