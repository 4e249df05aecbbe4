//! The loop expanders.
//!
//! Both expanders work in two phases, all of it at compile time:
//!
//! 1. **Trace.** A `const` item's initializer runs the loop inside the
//!    constant evaluator — test, action ordering and update rule exactly as
//!    the runtime loop would — and records every state that survived the
//!    continuation test into a [`crate::Trace`].
//! 2. **Expansion.** A fixed number of straight-line slots (the *fuel*) is
//!    emitted over the trace by recursive bisection. Each slot binds its
//!    index and state as `const` items, so the guard `index < trace.len` is
//!    a branch on constants that the backend deletes, and the surviving
//!    slots invoke the action with the state as a compile-time constant.
//!
//! Fuel must be one of 8, 16, 32, 64 (the default), 128 or 256. A loop that
//! fails to settle within its fuel budget is a compile error; so is any
//! mismatch between the supplied operations and the shapes the expander
//! splices them into.

/// Expand a bounded counter loop at compile time.
///
/// `update` and `test` name types following the op shape (an associated
/// `const CHECK: ()` plus `const fn apply(T) -> T` / `const fn test(T, T) ->
/// bool`), either from [`crate::ops`] or generated by [`crate::make_update!`]
/// and [`crate::make_test!`]. `action` names a type exposing
/// `fn run<const I: T>()`, invoked once per surviving iteration with the
/// counter as a const generic.
///
/// Evaluates to `true` if the action ran at least once — itself a
/// compile-time constant.
///
/// ```rust
/// struct Collatz;
/// impl Collatz {
///     fn run<const I: u64>() {
///         // I is usable in const positions here
///         let _ = const { I * 2 };
///     }
/// }
///
/// let ran = ctl::for_loop!(
///     u64,
///     start = 0,
///     bound = 10,
///     update = ctl::ops::u64::Inc<2>,
///     test = ctl::ops::u64::LessThan,
///     action = Collatz,
/// );
/// assert!(ran);
/// ```
///
/// A degenerate operation parameter is rejected before any iteration
/// semantics are considered, even for a loop that would run zero times:
///
/// ```compile_fail
/// struct Noop;
/// impl Noop {
///     fn run<const I: u64>() {}
/// }
///
/// let _ = ctl::for_loop!(
///     u64,
///     start = 5,
///     bound = 5,
///     update = ctl::ops::u64::Div<0>,
///     test = ctl::ops::u64::LessThan,
///     action = Noop,
/// );
/// ```
///
/// A non-terminating composition (here, a zero-progress update against a
/// strict inequality) exhausts its fuel at compile time instead of looping
/// forever — though whether a given update/test pair terminates at all
/// remains the caller's responsibility:
///
/// ```compile_fail
/// let _ = ctl::for_trace!(
///     i64,
///     start = 0,
///     bound = 10,
///     update = ctl::ops::i64::Inc<0>,
///     test = ctl::ops::i64::LessThan,
/// );
/// ```
#[macro_export]
macro_rules! for_loop {
    ($t:ty, start = $start:expr, bound = $bound:expr, update = $u:ty, test = $c:ty, action = $a:ty $(,)?) => {
        $crate::for_loop!($t, start = $start, bound = $bound, update = $u, test = $c, action = $a, fuel = 64)
    };
    ($t:ty, start = $start:expr, bound = $bound:expr, update = $u:ty, test = $c:ty, action = $a:ty, fuel = $fuel:tt $(,)?) => {{
        const __CTL_TRACE: $crate::Trace<$t, $fuel> =
            $crate::__ctl_for_trace!($t, $start, $bound, $u, $c, $fuel);
        $crate::__ctl_slots!(@go $fuel, 0, for_loop, (__CTL_TRACE, $t, $a));
        __CTL_TRACE.len != 0
    }};

    // internal: one expansion slot
    (@slot $idx:expr, $tr:ident, $t:ty, $a:ty) => {{
        const __CTL_IDX: usize = $idx;
        if __CTL_IDX < $tr.len {
            const __CTL_CUR: $t = $tr.vals[__CTL_IDX];
            <$a>::run::<{ __CTL_CUR }>();
        }
    }};
}

/// Resolve a bounded counter loop at compile time and yield its
/// [`crate::Trace`] instead of running actions.
///
/// Same grammar as [`for_loop!`] minus the `action` field. Useful when the
/// visited sequence is wanted as data, and as the assertion surface in tests.
///
/// ```rust
/// let tr = ctl::for_trace!(
///     i64,
///     start = 25,
///     bound = 20,
///     update = ctl::ops::i64::Dec<1>,
///     test = ctl::ops::i64::GreaterThan,
/// );
/// assert_eq!(tr.visited(), &[25, 24, 23, 22, 21]);
/// ```
#[macro_export]
macro_rules! for_trace {
    ($t:ty, start = $start:expr, bound = $bound:expr, update = $u:ty, test = $c:ty $(,)?) => {
        $crate::for_trace!($t, start = $start, bound = $bound, update = $u, test = $c, fuel = 64)
    };
    ($t:ty, start = $start:expr, bound = $bound:expr, update = $u:ty, test = $c:ty, fuel = $fuel:tt $(,)?) => {{
        const __CTL_TRACE: $crate::Trace<$t, $fuel> =
            $crate::__ctl_for_trace!($t, $start, $bound, $u, $c, $fuel);
        __CTL_TRACE
    }};
}

/// Expand a stateful loop at compile time, threading a whole state tuple
/// between iterations.
///
/// `state` declares the tuple type (arity ≥ 1, fixed for the whole chain)
/// and its initial value. `test` is a `const fn(S) -> bool`; `step` is a
/// `const fn(S) -> S` producing the next state — it must return exactly the
/// shape it received, anything else is a type error at the splice site.
/// `visit`, if given, is an ordinary function or closure applied to each
/// visited state in order; each state it sees is a compile-time constant.
///
/// Test-before-step semantics: a state is visited only if the test held for
/// it, and the step is never applied past the first failing state. Evaluates
/// to `true` if at least one iteration ran.
///
/// ```rust
/// const fn below(s: (u64, u64)) -> bool { s.0 < s.1 }
/// const fn bump(s: (u64, u64)) -> (u64, u64) { (s.0 + 1, s.1) }
///
/// let mut seen = Vec::new();
/// let ran = ctl::while_loop!(
///     state: (u64, u64) = (0, 3),
///     test = below,
///     step = bump,
///     visit = |s: (u64, u64)| seen.push(s.0),
/// );
/// assert!(ran);
/// assert_eq!(seen, vec![0, 1, 2]);
/// ```
#[macro_export]
macro_rules! while_loop {
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path $(,)?) => {
        $crate::while_loop!(state: $st = $init, test = $test, step = $step, visit = $crate::__ctl_discard, fuel = 64)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, fuel = $fuel:tt $(,)?) => {
        $crate::while_loop!(state: $st = $init, test = $test, step = $step, visit = $crate::__ctl_discard, fuel = $fuel)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, visit = $v:expr $(,)?) => {
        $crate::while_loop!(state: $st = $init, test = $test, step = $step, visit = $v, fuel = 64)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, visit = $v:expr, fuel = $fuel:tt $(,)?) => {{
        const __CTL_TRACE: $crate::Trace<$st, $fuel> =
            $crate::__ctl_while_trace!(@pretest $st, $init, $test, $step, $fuel);
        $crate::__ctl_slots!(@go $fuel, 0, while_loop, (__CTL_TRACE, $st, $v));
        __CTL_TRACE.len != 0
    }};

    // internal: one expansion slot
    (@slot $idx:expr, $tr:ident, $st:ty, $v:expr) => {{
        const __CTL_IDX: usize = $idx;
        if __CTL_IDX < $tr.len {
            const __CTL_CUR: $st = $tr.vals[__CTL_IDX];
            ($v)(__CTL_CUR);
        }
    }};
}

/// Like [`while_loop!`], but the initial state is visited unconditionally
/// before the test is first consulted, and the result is therefore always
/// `true`.
///
/// ```rust
/// const fn negative(s: (i64,)) -> bool { s.0 < 0 }
/// const fn halve(s: (i64,)) -> (i64,) { (s.0 / 2,) }
///
/// let mut seen = Vec::new();
/// let ran = ctl::do_while_loop!(
///     state: (i64,) = (42,),
///     test = negative,
///     step = halve,
///     visit = |s: (i64,)| seen.push(s.0),
/// );
/// // the test fails for 21, so only the unconditional first visit happens
/// assert!(ran);
/// assert_eq!(seen, vec![42]);
/// ```
#[macro_export]
macro_rules! do_while_loop {
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path $(,)?) => {
        $crate::do_while_loop!(state: $st = $init, test = $test, step = $step, visit = $crate::__ctl_discard, fuel = 64)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, fuel = $fuel:tt $(,)?) => {
        $crate::do_while_loop!(state: $st = $init, test = $test, step = $step, visit = $crate::__ctl_discard, fuel = $fuel)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, visit = $v:expr $(,)?) => {
        $crate::do_while_loop!(state: $st = $init, test = $test, step = $step, visit = $v, fuel = 64)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, visit = $v:expr, fuel = $fuel:tt $(,)?) => {{
        const __CTL_TRACE: $crate::Trace<$st, $fuel> =
            $crate::__ctl_while_trace!(@dowhile $st, $init, $test, $step, $fuel);
        $crate::__ctl_slots!(@go $fuel, 0, do_while_loop, (__CTL_TRACE, $st, $v));
        true
    }};

    // internal: one expansion slot
    (@slot $idx:expr, $tr:ident, $st:ty, $v:expr) => {{
        const __CTL_IDX: usize = $idx;
        if __CTL_IDX < $tr.len {
            const __CTL_CUR: $st = $tr.vals[__CTL_IDX];
            ($v)(__CTL_CUR);
        }
    }};
}

/// Resolve a stateful loop at compile time and yield its [`crate::Trace`].
///
/// Test-before-step semantics, same grammar as [`while_loop!`] minus `visit`.
///
/// ```rust
/// const fn fib_test(s: (u64, u64, u64)) -> bool { s.0 < s.2 }
/// const fn fib_step(s: (u64, u64, u64)) -> (u64, u64, u64) { (s.1, s.0 + s.1, s.2) }
///
/// let tr = ctl::while_trace!(state: (u64, u64, u64) = (0, 1, 100), test = fib_test, step = fib_step);
/// let firsts: Vec<u64> = tr.visited().iter().map(|s| s.0).collect();
/// assert_eq!(firsts, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
/// ```
#[macro_export]
macro_rules! while_trace {
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path $(,)?) => {
        $crate::while_trace!(state: $st = $init, test = $test, step = $step, fuel = 64)
    };
    (state: $st:ty = $init:expr, test = $test:path, step = $step:path, fuel = $fuel:tt $(,)?) => {{
        const __CTL_TRACE: $crate::Trace<$st, $fuel> =
            $crate::__ctl_while_trace!(@pretest $st, $init, $test, $step, $fuel);
        __CTL_TRACE
    }};
}

/// Trace construction for counter loops: runs the whole loop inside the
/// constant evaluator. Referencing the op `CHECK`s up front makes degenerate
/// parameters a composition error even when zero iterations run.
#[doc(hidden)]
#[macro_export]
macro_rules! __ctl_for_trace {
    ($t:ty, $start:expr, $bound:expr, $u:ty, $c:ty, $fuel:tt) => {{
        let _ = <$u>::CHECK;
        let _ = <$c>::CHECK;
        let mut vals: [$t; $fuel] = [$start; $fuel];
        let mut len = 0usize;
        let mut cur: $t = $start;
        while <$c>::test(cur, $bound) {
            assert!(
                len < $fuel,
                "ctl: loop did not finish within its fuel budget; raise `fuel`"
            );
            vals[len] = cur;
            len += 1;
            cur = <$u>::apply(cur);
        }
        $crate::Trace { vals, len }
    }};
}

/// Trace construction for stateful loops. The `@dowhile` flavor records the
/// initial state unconditionally before consulting the test.
#[doc(hidden)]
#[macro_export]
macro_rules! __ctl_while_trace {
    (@pretest $st:ty, $init:expr, $test:path, $step:path, $fuel:tt) => {{
        let mut vals: [$st; $fuel] = [$init; $fuel];
        let mut len = 0usize;
        let mut cur: $st = $init;
        while $test(cur) {
            assert!(
                len < $fuel,
                "ctl: loop did not finish within its fuel budget; raise `fuel`"
            );
            vals[len] = cur;
            len += 1;
            cur = $step(cur);
        }
        $crate::Trace { vals, len }
    }};
    (@dowhile $st:ty, $init:expr, $test:path, $step:path, $fuel:tt) => {{
        // slot 0 is the unconditional visit; the array fill already wrote it
        let mut vals: [$st; $fuel] = [$init; $fuel];
        let mut len = 1usize;
        let mut cur: $st = $step($init);
        while $test(cur) {
            assert!(
                len < $fuel,
                "ctl: loop did not finish within its fuel budget; raise `fuel`"
            );
            vals[len] = cur;
            len += 1;
            cur = $step(cur);
        }
        $crate::Trace { vals, len }
    }};
}

/// Slot emission by recursive bisection, dispatching on the fuel literal the
/// way fixed-count unrollers do. `$cb` is the calling expander, re-entered on
/// its `@slot` arm once per index.
#[doc(hidden)]
#[macro_export]
macro_rules! __ctl_slots {
    (@go 8, $off:expr, $cb:ident, ($($args:tt)*)) => {
        $crate::$cb!(@slot ($off), $($args)*);
        $crate::$cb!(@slot ($off + 1), $($args)*);
        $crate::$cb!(@slot ($off + 2), $($args)*);
        $crate::$cb!(@slot ($off + 3), $($args)*);
        $crate::$cb!(@slot ($off + 4), $($args)*);
        $crate::$cb!(@slot ($off + 5), $($args)*);
        $crate::$cb!(@slot ($off + 6), $($args)*);
        $crate::$cb!(@slot ($off + 7), $($args)*);
    };
    (@go 16, $off:expr, $cb:ident, $args:tt) => {
        $crate::__ctl_slots!(@go 8, $off, $cb, $args);
        $crate::__ctl_slots!(@go 8, ($off + 8), $cb, $args);
    };
    (@go 32, $off:expr, $cb:ident, $args:tt) => {
        $crate::__ctl_slots!(@go 16, $off, $cb, $args);
        $crate::__ctl_slots!(@go 16, ($off + 16), $cb, $args);
    };
    (@go 64, $off:expr, $cb:ident, $args:tt) => {
        $crate::__ctl_slots!(@go 32, $off, $cb, $args);
        $crate::__ctl_slots!(@go 32, ($off + 32), $cb, $args);
    };
    (@go 128, $off:expr, $cb:ident, $args:tt) => {
        $crate::__ctl_slots!(@go 64, $off, $cb, $args);
        $crate::__ctl_slots!(@go 64, ($off + 64), $cb, $args);
    };
    (@go 256, $off:expr, $cb:ident, $args:tt) => {
        $crate::__ctl_slots!(@go 128, $off, $cb, $args);
        $crate::__ctl_slots!(@go 128, ($off + 128), $cb, $args);
    };
    (@go $n:tt, $off:expr, $cb:ident, $args:tt) => {
        compile_error!(concat!(
            "ctl: unsupported fuel value ",
            stringify!($n),
            " (expected 8, 16, 32, 64, 128 or 256)"
        ));
    };
}
