//! Property tests over the op catalogue. The `const fn`s are also ordinary
//! functions, so they can be checked against primitive arithmetic on
//! arbitrary inputs.

use proptest::prelude::*;

const fn affine(i: i64) -> i64 {
    i * 3 + 1
}

ctl::make_update!(Affine, i64, affine);

const fn within(i: i64, n: i64) -> bool {
    i < n && n - i < 1_000
}

ctl::make_test!(Within, i64, within);

proptest! {
    #[test]
    fn inc_matches_addition(i in -1_000_000i64..1_000_000) {
        prop_assert_eq!(ctl::ops::i64::Inc::<7>::apply(i), i + 7);
        prop_assert_eq!(ctl::ops::i64::Inc::<1>::apply(i), i + 1);
    }

    #[test]
    fn dec_matches_subtraction(i in -1_000_000i64..1_000_000) {
        prop_assert_eq!(ctl::ops::i64::Dec::<5>::apply(i), i - 5);
    }

    #[test]
    fn mul_matches_multiplication(i in -100_000i64..100_000) {
        prop_assert_eq!(ctl::ops::i64::Mul::<4>::apply(i), i * 4);
    }

    #[test]
    fn div_matches_division_for_nonzero_deltas(i in -1_000_000i64..1_000_000) {
        prop_assert_eq!(ctl::ops::i64::Div::<3>::apply(i), i / 3);
        prop_assert_eq!(ctl::ops::i64::Div::<{ -2 }>::apply(i), i / -2);
    }

    #[test]
    fn unsigned_catalogue_agrees_with_primitives(i in 0u32..1_000_000) {
        prop_assert_eq!(ctl::ops::u32::Inc::<9>::apply(i), i + 9);
        prop_assert_eq!(ctl::ops::u32::Div::<10>::apply(i), i / 10);
    }

    #[test]
    fn relational_tests_agree_with_operators(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(ctl::ops::i32::LessThan::test(a, b), a < b);
        prop_assert_eq!(ctl::ops::i32::GreaterThan::test(a, b), a > b);
        prop_assert_eq!(ctl::ops::i32::Equal::test(a, b), a == b);
        prop_assert_eq!(ctl::ops::i32::NotEqual::test(a, b), a != b);
    }

    #[test]
    fn adapters_delegate_to_the_wrapped_function(i in -10_000i64..10_000, n in -10_000i64..10_000) {
        prop_assert_eq!(Affine::apply(i), affine(i));
        prop_assert_eq!(Within::test(i, n), within(i, n));
    }
}
