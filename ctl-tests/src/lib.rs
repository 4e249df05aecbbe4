//! Shared fixtures for the ctl integration tests: a runtime model of both
//! expanders used as an oracle, and a recording action for proving that
//! expanded loops really invoke their actions.

pub mod model;

use std::cell::RefCell;

thread_local! {
    static VISITED: RefCell<Vec<i64>> = const { RefCell::new(Vec::new()) };
}

/// Record one action invocation; drained by [`take_recorded`].
pub fn record(i: i64) {
    VISITED.with(|v| v.borrow_mut().push(i));
}

/// Drain everything recorded on this thread since the last call.
pub fn take_recorded() -> Vec<i64> {
    VISITED.with(|v| std::mem::take(&mut *v.borrow_mut()))
}

ctl::make_action!(pub Record, i64, crate::record);
