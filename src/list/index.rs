//! Circular index arithmetic shared by every ring operation.
//!
//! All physical positions are in `0..cap`, and `cap` is never zero.

use std::ops::Range;

/// Physical slot of logical index `i` for a run starting at `head`.
#[inline]
pub fn physical(head: usize, i: usize, cap: usize) -> usize {
    debug_assert!(cap > 0);
    // head < cap and i < cap, so this cannot overflow for any valid layout
    let p = head + i;
    if p >= cap {
        p - cap
    } else {
        p
    }
}

/// One step forward, wrapping at `cap`.
#[inline]
pub fn advance(p: usize, cap: usize) -> usize {
    if p + 1 == cap {
        0
    } else {
        p + 1
    }
}

/// One step backward, wrapping at `cap`.
#[inline]
pub fn retreat(p: usize, cap: usize) -> usize {
    if p == 0 {
        cap - 1
    } else {
        p - 1
    }
}

/// Whether the inclusive physical run `start..=end` crosses the end of the
/// buffer, i.e. continues from the last slot at slot 0.
///
/// Both positions must lie in the same occupied (or about to be occupied)
/// run; an end that sits physically before its start can only get there by
/// wrapping.
#[inline]
pub fn is_wrapped(start: usize, end: usize) -> bool {
    end < start
}

/// The occupied region as at most two physical ranges, in logical order.
///
/// The second range is empty unless the run crosses the end of the buffer.
pub fn segments(head: usize, len: usize, cap: usize) -> (Range<usize>, Range<usize>) {
    if len == 0 {
        return (head..head, 0..0);
    }
    let first_end = cap.min(head + len);
    let first = head..first_end;
    let second = 0..len - (first_end - head);
    (first, second)
}
