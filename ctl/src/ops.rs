//! Ready-made update, test and output operations for the counter expanders.
//!
//! One catalogue per integer element type, each module carrying the same set
//! of operations. Every update and test op follows the shape the expanders
//! splice against: an associated `const CHECK: ()` evaluated at composition
//! time, plus a `const fn` doing the actual work. `CHECK` is `()` everywhere
//! except where a parameter is degenerate — `Div` with a zero delta, for
//! instance, fails compilation even for a loop that would run zero times:
//!
//! ```compile_fail
//! const _: () = ctl::ops::i64::Div::<0>::CHECK;
//! ```
//!
//! Custom operations with the same shape can be generated from plain
//! functions with [`crate::make_update!`], [`crate::make_test!`] and
//! [`crate::make_action!`].

macro_rules! int_catalogue {
    ($($m:ident),* $(,)?) => {$(
        #[doc = concat!("Operations over `", stringify!($m), "` loop counters.")]
        pub mod $m {
            #[doc = concat!("Advance the counter by `DELTA: ", stringify!($m), "` each iteration.")]
            pub struct Inc<const DELTA: $m>;

            impl<const DELTA: $m> Inc<DELTA> {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn apply(i: $m) -> $m {
                    i + DELTA
                }
            }

            /// Lower the counter by `DELTA` each iteration.
            pub struct Dec<const DELTA: $m>;

            impl<const DELTA: $m> Dec<DELTA> {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn apply(i: $m) -> $m {
                    i - DELTA
                }
            }

            /// Scale the counter by `DELTA` each iteration.
            pub struct Mul<const DELTA: $m>;

            impl<const DELTA: $m> Mul<DELTA> {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn apply(i: $m) -> $m {
                    i * DELTA
                }
            }

            /// Divide the counter by `DELTA` each iteration.
            ///
            /// A zero delta is rejected at composition time via `CHECK`.
            pub struct Div<const DELTA: $m>;

            impl<const DELTA: $m> Div<DELTA> {
                /// Rejects the degenerate zero divisor before any iteration
                /// semantics are considered.
                pub const CHECK: () = assert!(DELTA != 0, "ctl: Div requires a nonzero delta");

                #[inline(always)]
                pub const fn apply(i: $m) -> $m {
                    i / DELTA
                }
            }

            /// Continue while the counter is below the bound.
            pub struct LessThan;

            impl LessThan {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn test(i: $m, n: $m) -> bool {
                    i < n
                }
            }

            /// Continue while the counter is above the bound.
            pub struct GreaterThan;

            impl GreaterThan {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn test(i: $m, n: $m) -> bool {
                    i > n
                }
            }

            /// Continue while the counter equals the bound.
            pub struct Equal;

            impl Equal {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn test(i: $m, n: $m) -> bool {
                    i == n
                }
            }

            /// Continue while the counter differs from the bound.
            pub struct NotEqual;

            impl NotEqual {
                /// Composition-time parameter check; nothing to reject here.
                pub const CHECK: () = ();

                #[inline(always)]
                pub const fn test(i: $m, n: $m) -> bool {
                    i != n
                }
            }

            /// Ready-made action printing each index to stdout, followed by
            /// the separator char. `'\0'` suppresses the separator.
            pub struct PrintIndex<const SEP: char>;

            impl<const SEP: char> PrintIndex<SEP> {
                pub fn run<const I: $m>() {
                    if SEP == '\0' {
                        print!("{}", I);
                    } else {
                        print!("{}{}", I, SEP);
                    }
                }
            }
        }
    )*};
}

int_catalogue! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
}

#[cfg(test)]
mod tests {
    #[test]
    fn updates_match_primitive_arithmetic() {
        assert_eq!(super::i64::Inc::<3>::apply(4), 7);
        assert_eq!(super::i64::Dec::<3>::apply(4), 1);
        assert_eq!(super::i64::Mul::<3>::apply(4), 12);
        assert_eq!(super::i64::Div::<3>::apply(13), 4);
        assert_eq!(super::u8::Inc::<1>::apply(41), 42);
    }

    #[test]
    fn tests_match_primitive_comparisons() {
        assert!(super::u32::LessThan::test(1, 2));
        assert!(!super::u32::LessThan::test(2, 2));
        assert!(super::u32::GreaterThan::test(3, 2));
        assert!(super::u32::Equal::test(2, 2));
        assert!(super::u32::NotEqual::test(1, 2));
    }

    #[test]
    fn checks_are_const_evaluable_for_valid_parameters() {
        const _: () = super::i32::Inc::<0>::CHECK;
        const _: () = super::i32::Div::<{ -1 }>::CHECK;
        const _: () = super::usize::Mul::<0>::CHECK;
    }
}
