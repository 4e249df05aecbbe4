//! The record a loop expansion leaves behind.
//!
//! Where the original recursive formulation would re-instantiate itself once
//! per iteration, the expanders here drive the whole loop inside a `const`
//! initializer and write every state that survived the continuation test into
//! a flat, fixed-capacity buffer. The expansion layer then replays actions
//! over that buffer with each slot's state available as a `const`.

/// Record of one fully-resolved loop: the visited states, in order, plus how
/// many iterations survived the continuation test.
///
/// `CAP` is the expansion's fuel budget. Slots at `len..` hold padding (the
/// initial state) and are never acted upon.
///
/// ```rust
/// let tr = ctl::for_trace!(
///     u32,
///     start = 1,
///     bound = 100,
///     update = ctl::ops::u32::Mul<2>,
///     test = ctl::ops::u32::LessThan,
/// );
/// assert_eq!(tr.visited(), &[1, 2, 4, 8, 16, 32, 64]);
/// assert!(tr.ran());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace<T, const CAP: usize> {
    /// Visited states, front-loaded.
    pub vals: [T; CAP],
    /// Number of iterations that survived the continuation test.
    pub len: usize,
}

impl<T, const CAP: usize> Trace<T, CAP> {
    /// The states the loop visited, in iteration order.
    pub fn visited(&self) -> &[T] {
        &self.vals[..self.len]
    }

    /// Number of iterations the loop performed.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the continuation test failed immediately.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if at least one iteration ran.
    pub const fn ran(&self) -> bool {
        self.len != 0
    }
}

#[cfg(test)]
mod tests {
    use super::Trace;

    #[test]
    fn visited_is_the_front_loaded_prefix() {
        let tr = Trace { vals: [7, 8, 9, 0], len: 2 };
        assert_eq!(tr.visited(), &[7, 8]);
        assert_eq!(tr.len(), 2);
        assert!(tr.ran());
        assert!(!tr.is_empty());
    }

    #[test]
    fn empty_trace_reports_no_iterations() {
        let tr: Trace<i64, 4> = Trace { vals: [0; 4], len: 0 };
        assert_eq!(tr.visited(), &[]);
        assert!(tr.is_empty());
        assert!(!tr.ran());
    }
}
