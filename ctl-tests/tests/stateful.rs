//! Stateful expander: tuple threading, pre-test vs do-while semantics, and
//! the fibonacci recurrence from the original demonstration.

use ctl_tests::model::{do_while_loop_model, while_loop_model};

const fn fib_test(s: (u64, u64, u64)) -> bool {
    s.0 < s.2
}

const fn fib_step(s: (u64, u64, u64)) -> (u64, u64, u64) {
    (s.1, s.0 + s.1, s.2)
}

#[test]
fn fibonacci_recurrence_terminates_at_the_limit() {
    let tr = ctl::while_trace!(
        state: (u64, u64, u64) = (0, 1, 10_000),
        test = fib_test,
        step = fib_step,
    );

    let firsts: Vec<u64> = tr.visited().iter().map(|s| s.0).collect();
    assert_eq!(
        firsts,
        vec![
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
            6765
        ]
    );
    // the first term at or past the limit is never visited
    assert!(firsts.iter().all(|&a| a < 10_000));

    let expected = while_loop_model((0, 1, 10_000), fib_test, fib_step, 64);
    assert_eq!(tr.visited(), expected.as_slice());
}

const fn negative(s: (i64,)) -> bool {
    s.0 < 0
}

const fn halve(s: (i64,)) -> (i64,) {
    (s.0 / 2,)
}

#[test]
fn while_with_failing_initial_test_visits_nothing() {
    let mut seen = Vec::new();
    let ran = ctl::while_loop!(
        state: (i64,) = (42,),
        test = negative,
        step = halve,
        visit = |s: (i64,)| seen.push(s.0),
    );
    assert!(!ran);
    assert!(seen.is_empty());
}

#[test]
fn do_while_visits_the_initial_state_unconditionally() {
    let mut seen = Vec::new();
    let ran = ctl::do_while_loop!(
        state: (i64,) = (42,),
        test = negative,
        step = halve,
        visit = |s: (i64,)| seen.push(s.0),
    );
    assert!(ran);
    assert_eq!(seen, vec![42]);

    let expected: Vec<i64> = do_while_loop_model((42,), negative, halve, 64)
        .into_iter()
        .map(|s| s.0)
        .collect();
    assert_eq!(seen, expected);
}

const fn climbing(s: (i64,)) -> bool {
    s.0 < 40
}

const fn add_ten(s: (i64,)) -> (i64,) {
    (s.0 + 10,)
}

#[test]
fn do_while_then_behaves_like_begin() {
    let mut seen = Vec::new();
    let ran = ctl::do_while_loop!(
        state: (i64,) = (0,),
        test = climbing,
        step = add_ten,
        visit = |s: (i64,)| seen.push(s.0),
    );
    assert!(ran);
    assert_eq!(seen, vec![0, 10, 20, 30]);
    assert_eq!(
        seen,
        do_while_loop_model((0,), climbing, add_ten, 64)
            .into_iter()
            .map(|s| s.0)
            .collect::<Vec<_>>()
    );
}

const fn pair_below(s: (u32, u32)) -> bool {
    s.0 < s.1
}

const fn pair_bump(s: (u32, u32)) -> (u32, u32) {
    (s.0 + 1, s.1)
}

#[test]
fn visit_sees_each_state_in_iteration_order() {
    let mut seen = Vec::new();
    let ran = ctl::while_loop!(
        state: (u32, u32) = (0, 5),
        test = pair_below,
        step = pair_bump,
        visit = |s: (u32, u32)| seen.push(s),
    );
    assert!(ran);
    assert_eq!(seen, vec![(0, 5), (1, 5), (2, 5), (3, 5), (4, 5)]);

    let tr = ctl::while_trace!(state: (u32, u32) = (0, 5), test = pair_below, step = pair_bump);
    assert_eq!(tr.visited(), seen.as_slice());
}

const fn quad_active(s: (u16, u16, u16, u16)) -> bool {
    s.0 != 0
}

const fn quad_shift(s: (u16, u16, u16, u16)) -> (u16, u16, u16, u16) {
    (s.1, s.2, s.3, 0)
}

#[test]
fn wider_state_tuples_thread_through() {
    let tr = ctl::while_trace!(
        state: (u16, u16, u16, u16) = (4, 3, 2, 1),
        test = quad_active,
        step = quad_shift,
    );
    assert_eq!(
        tr.visited(),
        &[(4, 3, 2, 1), (3, 2, 1, 0), (2, 1, 0, 0), (1, 0, 0, 0)]
    );
}

#[test]
fn identical_stateful_compositions_expand_identically() {
    let a = ctl::while_trace!(
        state: (u64, u64, u64) = (0, 1, 10_000),
        test = fib_test,
        step = fib_step,
    );
    let b = ctl::while_trace!(
        state: (u64, u64, u64) = (0, 1, 10_000),
        test = fib_test,
        step = fib_step,
    );
    assert_eq!(a, b);
}

#[test]
fn stateful_fuel_can_be_raised() {
    let tr = ctl::while_trace!(
        state: (u32, u32) = (0, 100),
        test = pair_below,
        step = pair_bump,
        fuel = 128,
    );
    assert_eq!(tr.len(), 100);
}
