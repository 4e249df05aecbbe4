//! Ordinary runtime renditions of the expanders, kept deliberately naive.
//! The compile-time traces must agree with these on every instantiation.

/// Runtime model of the bounded counter loop: the sequence of values the
/// action would see.
pub fn for_loop_model<T: Copy>(
    start: T,
    bound: T,
    update: impl Fn(T) -> T,
    test: impl Fn(T, T) -> bool,
    fuel: usize,
) -> Vec<T> {
    let mut visited = Vec::new();
    let mut cur = start;
    while test(cur, bound) {
        assert!(visited.len() < fuel, "model exceeded fuel");
        visited.push(cur);
        cur = update(cur);
    }
    visited
}

/// Runtime model of the stateful loop with test-before-step semantics.
pub fn while_loop_model<S: Copy>(
    init: S,
    test: impl Fn(S) -> bool,
    step: impl Fn(S) -> S,
    fuel: usize,
) -> Vec<S> {
    let mut visited = Vec::new();
    let mut cur = init;
    while test(cur) {
        assert!(visited.len() < fuel, "model exceeded fuel");
        visited.push(cur);
        cur = step(cur);
    }
    visited
}

/// Runtime model of the stateful loop with do-while semantics: the initial
/// state is visited unconditionally.
pub fn do_while_loop_model<S: Copy>(
    init: S,
    test: impl Fn(S) -> bool,
    step: impl Fn(S) -> S,
    fuel: usize,
) -> Vec<S> {
    let mut visited = vec![init];
    let mut cur = step(init);
    while test(cur) {
        assert!(visited.len() < fuel, "model exceeded fuel");
        visited.push(cur);
        cur = step(cur);
    }
    visited
}
