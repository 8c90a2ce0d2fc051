// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use tuple_math::{FastMathProvider, Vec2, Vec3, Vec4};

// Finite values in a sane range so sums and squares cannot overflow.
fn scalar() -> impl Strategy<Value = f32> {
    -1.0e3_f32..1.0e3_f32
}

fn vec2() -> impl Strategy<Value = Vec2> {
    prop::array::uniform2(scalar()).prop_map(Vec2::from)
}

fn vec3() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(scalar()).prop_map(Vec3::from)
}

fn vec4() -> impl Strategy<Value = Vec4> {
    prop::array::uniform4(scalar()).prop_map(Vec4::from)
}

fn non_degenerate_vec2() -> impl Strategy<Value = Vec2> {
    vec2().prop_filter("length well above zero", |v| v.length_squared() > 1.0e-3)
}

fn unit_vec2() -> impl Strategy<Value = Vec2> {
    (0.0_f32..std::f32::consts::TAU).prop_map(|a| Vec2::UNIT_X.rotate_rad(a))
}

// Any direction at magnitudes from 1e-35 to 1e35.
fn wide_vec2() -> impl Strategy<Value = Vec2> {
    (unit_vec2(), -35.0_f32..35.0).prop_map(|(u, e)| u.scale(10.0_f32.powf(e)))
}

fn close(a: f32, b: f32, scale: f32) -> bool {
    (a - b).abs() <= 1.0e-5 * scale.max(1.0)
}

proptest! {
    #[test]
    fn additive_identity(v in vec2()) {
        prop_assert_eq!(v.add(Vec2::ZERO), v);
        prop_assert_eq!(Vec2::ZERO.add(v), v);
    }

    #[test]
    fn addition_commutes(a in vec2(), b in vec2()) {
        prop_assert_eq!(a.add(b), b.add(a));
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn sub_undoes_add(a in vec2(), b in vec2()) {
        let back = a.add(b).sub(b);
        let scale = a.x().abs().max(a.y().abs()).max(b.x().abs()).max(b.y().abs());
        prop_assert!(close(back.x(), a.x(), scale), "{:?} vs {:?}", back, a);
        prop_assert!(close(back.y(), a.y(), scale), "{:?} vs {:?}", back, a);
    }

    #[test]
    fn dot_commutes(a in vec2(), b in vec2()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn normalized_length_is_one(v in non_degenerate_vec2()) {
        let len = v.normalize().length();
        prop_assert!((len - 1.0).abs() < 1.0e-5, "{:?} -> {}", v, len);
        let fast = v.normalize_with(&FastMathProvider).length();
        prop_assert!((fast - 1.0).abs() < 4.0e-3, "{:?} -> {}", v, fast);
    }

    #[test]
    fn normalized_length_is_one_at_any_magnitude(v in wide_vec2()) {
        let len = v.normalize().length();
        prop_assert!((len - 1.0).abs() < 1.0e-5, "{:?} -> {}", v, len);
    }

    #[test]
    fn min_max_bound_both_inputs(a in vec2(), b in vec2()) {
        let lo = a.min(b);
        let hi = a.max(b);
        prop_assert!(lo.x() <= a.x() && lo.x() <= b.x());
        prop_assert!(lo.y() <= a.y() && lo.y() <= b.y());
        prop_assert!(hi.x() >= a.x() && hi.x() >= b.x());
        prop_assert!(hi.y() >= a.y() && hi.y() >= b.y());
    }

    #[test]
    fn extreme_index_picks_an_extreme(v in vec4()) {
        let arr = v.to_array();
        let min = v.min_component();
        let max = v.max_component();
        prop_assert!(arr.iter().all(|&c| min <= c && c <= max));
        // First index wins ties.
        prop_assert_eq!(v.min_component_index(), arr.iter().position(|&c| c == min).unwrap());
        prop_assert_eq!(v.max_component_index(), arr.iter().position(|&c| c == max).unwrap());
    }

    #[test]
    fn reflect_twice_is_identity(v in vec2(), n in unit_vec2()) {
        let back = v.reflect(n).reflect(n);
        let scale = v.x().abs().max(v.y().abs());
        prop_assert!(close(back.x(), v.x(), scale), "{:?} vs {:?}", back, v);
        prop_assert!(close(back.y(), v.y(), scale), "{:?} vs {:?}", back, v);
    }

    #[test]
    fn rotation_preserves_length(v in vec2(), angle in -10.0_f32..10.0) {
        let before = v.length();
        let after = v.rotate_rad(angle).length();
        prop_assert!(close(before, after, before), "{} vs {}", before, after);
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.length_squared() * b.length().max(1.0) + b.length_squared() * a.length().max(1.0);
        prop_assert!(c.dot(a).abs() <= 1.0e-5 * scale.max(1.0));
        prop_assert!(c.dot(b).abs() <= 1.0e-5 * scale.max(1.0));
    }

    #[test]
    fn distance_is_symmetric(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.distance_squared(b), b.distance_squared(a));
        prop_assert_eq!(a.midpoint(b), b.midpoint(a));
    }
}

#[test]
fn pinned_seed_projection_is_idempotent() {
    // Pinned seed so failures reproduce across machines and CI.
    const SEED_BYTES: [u8; 32] = [
        0x2a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    runner
        .run(&(vec2(), unit_vec2()), |(v, t)| {
            let once = v.project(t);
            let twice = once.project(t);
            let scale = v.length();
            prop_assert!(close(once.x(), twice.x(), scale));
            prop_assert!(close(once.y(), twice.y(), scale));
            // The residual is orthogonal to the target.
            prop_assert!(v.sub(once).dot(t).abs() <= 1.0e-4 * scale.max(1.0));
            Ok(())
        })
        .expect("projection property");
}
