//! Compile-time loop expansion.
//!
//! Bounded (for-style) and stateful (while-style) iteration resolved entirely
//! during compilation: the continuation test and update rule run inside the
//! compiler's constant evaluator, the visited states are recorded into a
//! [`Trace`], and per-iteration actions are expanded into straight-line code
//! with no runtime loop.
//!
//! ```rust
//! let tr = ctl::for_trace!(
//!     i64,
//!     start = 0,
//!     bound = 5,
//!     update = ctl::ops::i64::Inc<1>,
//!     test = ctl::ops::i64::LessThan,
//! );
//! assert_eq!(tr.visited(), &[0, 1, 2, 3, 4]);
//! ```
//!
//! The entry points are [`for_loop!`] and [`for_trace!`] for counter loops,
//! and [`while_loop!`] / [`do_while_loop!`] / [`while_trace!`] for loops that
//! thread a whole state tuple between iterations. Ready-made update and test
//! operations live in [`ops`]; [`make_update!`], [`make_test!`] and
//! [`make_action!`] lift ordinary functions into the shapes the expanders
//! require.
//!
//! Every failure mode is a compile error: a degenerate operation parameter or
//! a shape mismatch between an operation and the expander rejects the
//! composition outright, and a loop that fails to settle within its fuel
//! budget fails during constant evaluation. There is no runtime error channel.

mod adapt;
mod expand;
pub mod ops;
mod trace;

pub use trace::Trace;

/// Visitor that ignores every state, used when a stateful loop is expanded
/// purely for its compile-time effect.
#[doc(hidden)]
pub fn __ctl_discard<S>(_state: S) {}
