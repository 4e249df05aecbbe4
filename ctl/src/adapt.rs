//! Adapters lifting ordinary functions into the shapes the expanders splice
//! against, so independently written (and independently testable) logic can
//! drive a loop without being rewritten as an op type.

/// Wrap a `const fn(T) -> T` as an update op.
///
/// ```rust
/// const fn triple_plus_one(i: u64) -> u64 { i * 3 + 1 }
/// ctl::make_update!(TriplePlusOne, u64, triple_plus_one);
///
/// let tr = ctl::for_trace!(
///     u64,
///     start = 1,
///     bound = 50,
///     update = TriplePlusOne,
///     test = ctl::ops::u64::LessThan,
/// );
/// assert_eq!(tr.visited(), &[1, 4, 13, 40]);
/// ```
#[macro_export]
macro_rules! make_update {
    ($vis:vis $name:ident, $t:ty, $f:path) => {
        $vis struct $name;

        impl $name {
            /// Composition-time parameter check; nothing to reject here.
            pub const CHECK: () = ();

            #[inline(always)]
            pub const fn apply(i: $t) -> $t {
                $f(i)
            }
        }
    };
}

/// Wrap a `const fn(T, T) -> bool` as a continuation test op. The wrapped
/// function receives the current counter and the bound, in that order.
///
/// ```rust
/// const fn apart(i: i32, n: i32) -> bool { n - i > 2 }
/// ctl::make_test!(WellBelow, i32, apart);
///
/// let tr = ctl::for_trace!(
///     i32,
///     start = 0,
///     bound = 10,
///     update = ctl::ops::i32::Inc<1>,
///     test = WellBelow,
/// );
/// assert_eq!(tr.visited(), &[0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
#[macro_export]
macro_rules! make_test {
    ($vis:vis $name:ident, $t:ty, $f:path) => {
        $vis struct $name;

        impl $name {
            /// Composition-time parameter check; nothing to reject here.
            pub const CHECK: () = ();

            #[inline(always)]
            pub const fn test(i: $t, n: $t) -> bool {
                $f(i, n)
            }
        }
    };
}

/// Wrap an ordinary `fn(T)` as a per-iteration action. The wrapped function
/// is called with each surviving counter value; the value itself is a
/// compile-time constant at every call site.
///
/// ```rust
/// fn show(i: u8) { println!("at {i}") }
/// ctl::make_action!(Show, u8, show);
///
/// let ran = ctl::for_loop!(
///     u8,
///     start = 0,
///     bound = 3,
///     update = ctl::ops::u8::Inc<1>,
///     test = ctl::ops::u8::LessThan,
///     action = Show,
/// );
/// assert!(ran);
/// ```
#[macro_export]
macro_rules! make_action {
    ($vis:vis $name:ident, $t:ty, $f:path) => {
        $vis struct $name;

        impl $name {
            #[inline(always)]
            pub fn run<const I: $t>() {
                $f(I)
            }
        }
    };
}
