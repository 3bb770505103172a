//! Property-based tests for the functor and monad laws of `Optional`

use fpkit_option::{bind, from_legacy, lift, lift2, AbsentError, Optional};
use proptest::prelude::*;
use std::convert::identity;

fn arb_optional() -> impl Strategy<Value = Optional<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Optional::Present),
        Just(Optional::Absent),
    ]
}

fn halve_even(x: i64) -> Optional<i64> {
    if x % 2 == 0 {
        Optional::Present(x / 2)
    } else {
        Optional::Absent
    }
}

fn positive(x: i64) -> Optional<i64> {
    if x > 0 {
        Optional::Present(x)
    } else {
        Optional::Absent
    }
}

proptest! {
    #[test]
    fn test_predicates_are_exclusive(opt in arb_optional()) {
        prop_assert_ne!(opt.is_present(), opt.is_absent());
    }

    #[test]
    fn test_extract_law(x in any::<i64>()) {
        prop_assert_eq!(Optional::Present(x).extract(), Ok(x));
        prop_assert_eq!(Optional::Present(x).extract_or_default(), (x, true));
        prop_assert_eq!(Optional::<i64>::Absent.extract(), Err(AbsentError));
    }

    #[test]
    fn test_lift_identity(opt in arb_optional()) {
        prop_assert_eq!(lift(identity)(opt), opt);
    }

    #[test]
    fn test_lift_composition(opt in arb_optional()) {
        let f = |x: i64| x.wrapping_mul(3);
        let g = |x: i64| x.wrapping_sub(1);

        let composed = lift(move |x| g(f(x)));
        let (lifted_f, lifted_g) = (lift(f), lift(g));

        prop_assert_eq!(composed(opt), lifted_g(lifted_f(opt)));
    }

    #[test]
    fn test_lift2_matches_both_present(a in any::<i32>(), b in any::<i32>()) {
        let add = lift2(|x: i32, y: i32| i64::from(x) + i64::from(y));
        let expected = Optional::Present(i64::from(a) + i64::from(b));

        prop_assert_eq!(add(Optional::Present(a), Optional::Present(b)), expected);
        prop_assert_eq!(add(Optional::Absent, Optional::Present(b)), Optional::Absent);
        prop_assert_eq!(add(Optional::Present(a), Optional::Absent), Optional::Absent);
    }

    #[test]
    fn test_bind_left_identity(x in any::<i64>()) {
        prop_assert_eq!(bind(halve_even)(Optional::Present(x)), halve_even(x));
    }

    #[test]
    fn test_bind_right_identity(opt in arb_optional()) {
        prop_assert_eq!(bind(Optional::Present)(opt), opt);
    }

    #[test]
    fn test_bind_associativity(opt in arb_optional()) {
        let left = bind(positive)(bind(halve_even)(opt));
        let right = bind(|x| bind(positive)(halve_even(x)))(opt);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn test_from_legacy_law(x in any::<i64>(), failure in proptest::option::of(".*")) {
        let expected = if failure.is_some() { Optional::Absent } else { Optional::Present(x) };

        prop_assert_eq!(from_legacy(x, failure), expected);
    }

    #[test]
    fn test_std_option_round_trip(opt in arb_optional()) {
        let std_opt: Option<i64> = opt.into();

        prop_assert_eq!(Optional::from(std_opt), opt);
    }
}
