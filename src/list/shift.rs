//! Gap-shifting strategies for positional insert and remove.
//!
//! Opening or closing a one-slot gap moves the elements between the gap and
//! one end of the run. Either end gives the same logical sequence, so the
//! side with fewer elements is chosen. Each strategy has a plain case and a
//! case where the run being moved crosses the physical end of the buffer;
//! in the latter the element at the seam (slot `cap - 1` or slot `0`) is
//! relocated across the boundary between the two partial shifts.
//!
//! The functions here are pure over `(slots, layout)`: they move slot
//! contents and return the new layout without touching anything else.

use super::index::{advance, is_wrapped, physical, retreat};

/// Head, tail and length of an occupied ring region.
///
/// With `len == 0` the tail sits one slot before the head, so that the
/// next append lands exactly on `head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub head: usize,
    pub tail: usize,
    pub len: usize,
}

impl Layout {
    /// Empty layout anchored at slot 0.
    pub fn empty(cap: usize) -> Self {
        Self {
            head: 0,
            tail: retreat(0, cap),
            len: 0,
        }
    }
}

/// Which end of the run absorbs a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftSide {
    /// Move the elements before the index, adjusting `head`.
    Head,
    /// Move the elements after the index, adjusting `tail`.
    Tail,
}

impl ShiftSide {
    /// Pick the cheaper side for an edit at logical `index` in a run of `len`.
    pub fn choose(index: usize, len: usize) -> Self {
        if index == 0 || index < len.saturating_sub(1) / 2 {
            ShiftSide::Head
        } else {
            ShiftSide::Tail
        }
    }
}

/// Insert `value` before logical `index`, moving the tail side one slot forward.
///
/// Requires `index < layout.len < slots.len()`.
pub fn insert_shift_tail<T>(
    slots: &mut [Option<T>],
    layout: Layout,
    index: usize,
    value: T,
) -> Layout {
    let cap = slots.len();
    debug_assert!(index < layout.len && layout.len < cap);

    let p = physical(layout.head, index, cap);
    let new_tail = advance(layout.tail, cap);

    if !is_wrapped(p, new_tail) {
        slots[p..=new_tail].rotate_right(1);
    } else {
        // gap moves to 0, last slot crosses over into it, then the pre-wrap part shifts
        slots[..=new_tail].rotate_right(1);
        slots.swap(0, cap - 1);
        slots[p..].rotate_right(1);
    }
    slots[p] = Some(value);

    Layout {
        head: layout.head,
        tail: new_tail,
        len: layout.len + 1,
    }
}

/// Insert `value` before logical `index`, moving the head side one slot back.
///
/// Requires `index < layout.len < slots.len()`.
pub fn insert_shift_head<T>(
    slots: &mut [Option<T>],
    layout: Layout,
    index: usize,
    value: T,
) -> Layout {
    let cap = slots.len();
    debug_assert!(index < layout.len && layout.len < cap);

    let new_head = retreat(layout.head, cap);
    let target = retreat(physical(layout.head, index, cap), cap);

    if !is_wrapped(new_head, target) {
        slots[new_head..=target].rotate_left(1);
    } else {
        slots[new_head..].rotate_left(1);
        slots.swap(cap - 1, 0);
        slots[..=target].rotate_left(1);
    }
    slots[target] = Some(value);

    Layout {
        head: new_head,
        tail: layout.tail,
        len: layout.len + 1,
    }
}

/// Remove logical `index`, closing the gap from the tail side.
///
/// Requires `index < layout.len`.
pub fn remove_shift_tail<T>(
    slots: &mut [Option<T>],
    layout: Layout,
    index: usize,
) -> (Option<T>, Layout) {
    let cap = slots.len();
    debug_assert!(index < layout.len);

    let p = physical(layout.head, index, cap);
    let removed = slots[p].take();
    let tail = layout.tail;

    if !is_wrapped(p, tail) {
        slots[p..=tail].rotate_left(1);
    } else {
        slots[p..].rotate_left(1);
        slots.swap(cap - 1, 0);
        slots[..=tail].rotate_left(1);
    }

    let layout = Layout {
        head: layout.head,
        tail: retreat(tail, cap),
        len: layout.len - 1,
    };
    (removed, layout)
}

/// Remove logical `index`, closing the gap from the head side.
///
/// Requires `index < layout.len`.
pub fn remove_shift_head<T>(
    slots: &mut [Option<T>],
    layout: Layout,
    index: usize,
) -> (Option<T>, Layout) {
    let cap = slots.len();
    debug_assert!(index < layout.len);

    let p = physical(layout.head, index, cap);
    let removed = slots[p].take();
    let head = layout.head;

    if !is_wrapped(head, p) {
        slots[head..=p].rotate_right(1);
    } else {
        slots[..=p].rotate_right(1);
        slots.swap(0, cap - 1);
        slots[head..].rotate_right(1);
    }

    let layout = Layout {
        head: advance(head, cap),
        tail: layout.tail,
        len: layout.len - 1,
    };
    (removed, layout)
}
