//! Randomly indexable double-ended list over a single ring buffer.

use std::fmt;
use std::iter::{Chain, FusedIterator};
use std::ops::{Index, IndexMut};
use std::slice;

use tracing::{debug, warn};

use super::index::{advance, physical, retreat, segments};
use super::shift::{self, Layout, ShiftSide};
use crate::config::RingListConfig;
use crate::errors::ListError;

/// Initial capacity used by [`RingList::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A list with O(1) amortized edits at both ends and positional edits that
/// only move the shorter side of the sequence.
///
/// Elements live in one boxed slice of slots. Logical index `i` is stored at
/// physical slot `(head + i) % capacity`, so the run of elements may wrap
/// past the end of the buffer. When the buffer is full it is replaced by one
/// of twice the size, with the elements moved to the front in order.
///
/// The list performs no synchronization. Sharing it across threads requires
/// external locking, as with any `&mut` access in Rust.
///
/// ```
/// use ringlist::RingList;
///
/// let mut list = RingList::new();
/// list.add(3).unwrap();
/// list.add(4).unwrap();
/// list.insert(1, 7).unwrap();
/// assert_eq!(list.index_of(&7), Some(1));
/// assert!(list.remove(&3));
/// assert_eq!(list.to_vec(), vec![7, 4]);
/// ```
#[derive(Clone)]
pub struct RingList<T> {
    slots: Box<[Option<T>]>,
    layout: Layout,
    max_capacity: usize,
}

/// Largest slot count whose allocation stays within `isize::MAX` bytes.
fn default_max_capacity<T>() -> usize {
    isize::MAX as usize / std::mem::size_of::<Option<T>>().max(1)
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(cap).collect()
}

impl<T> RingList<T> {
    /// Create an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        let max_capacity = default_max_capacity::<T>();
        Self::with_parts(DEFAULT_CAPACITY.min(max_capacity), max_capacity)
    }

    /// Create an empty list with room for `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_config(&RingListConfig {
            initial_capacity: capacity,
            max_capacity: None,
        })
    }

    /// Create an empty list from a [`RingListConfig`].
    ///
    /// A zero initial capacity, or one above the growth cap, is rejected
    /// before anything is allocated.
    pub fn with_config(config: &RingListConfig) -> Result<Self, ListError> {
        let limit = default_max_capacity::<T>();
        let max = config.max_capacity.map_or(limit, |m| m.min(limit));
        let requested = config.initial_capacity;
        if requested == 0 || requested > max {
            return Err(ListError::InvalidCapacity { requested, max });
        }
        Ok(Self::with_parts(requested, max))
    }

    fn with_parts(capacity: usize, max_capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            layout: Layout::empty(capacity),
            max_capacity,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.layout.len
    }

    pub fn is_empty(&self) -> bool {
        self.layout.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Capacity beyond which the list refuses to grow.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Always `false`; the list is mutable through every handle that owns it.
    pub fn is_read_only(&self) -> bool {
        false
    }

    fn slot_of(&self, index: usize) -> Result<usize, ListError> {
        let len = self.layout.len;
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(physical(self.layout.head, index, self.capacity()))
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = self.layout.len;
        let p = self.slot_of(index)?;
        self.slots[p]
            .as_ref()
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.layout.len;
        let p = self.slot_of(index)?;
        self.slots[p]
            .as_mut()
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.layout.len;
        let p = self.slot_of(index)?;
        self.slots[p]
            .replace(value)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Append `value` at the logical end.
    pub fn add(&mut self, value: T) -> Result<(), ListError> {
        self.reserve_one()?;
        let tail = advance(self.layout.tail, self.capacity());
        self.slots[tail] = Some(value);
        self.layout.tail = tail;
        self.layout.len += 1;
        Ok(())
    }

    /// Alias of [`RingList::add`].
    pub fn push_back(&mut self, value: T) -> Result<(), ListError> {
        self.add(value)
    }

    pub fn push_front(&mut self, value: T) -> Result<(), ListError> {
        self.insert(0, value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.remove_at(0).ok()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.remove_at(last).ok()
    }

    /// Insert `value` so that it ends up at logical `index`.
    ///
    /// `index == len()` appends. Growth happens before any element moves, so
    /// a capacity error leaves the list untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.layout.len;
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        if index == len {
            return self.add(value);
        }
        self.reserve_one()?;

        self.layout = match ShiftSide::choose(index, len) {
            ShiftSide::Head => shift::insert_shift_head(&mut self.slots, self.layout, index, value),
            ShiftSide::Tail => shift::insert_shift_tail(&mut self.slots, self.layout, index, value),
        };
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.layout.len;
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        let (removed, layout) = match ShiftSide::choose(index, len) {
            ShiftSide::Head => shift::remove_shift_head(&mut self.slots, self.layout, index),
            ShiftSide::Tail => shift::remove_shift_tail(&mut self.slots, self.layout, index),
        };
        self.layout = layout;
        removed.ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Drop every element and re-anchor the ring at slot 0. Capacity is kept.
    pub fn clear(&mut self) {
        let (first, second) = self.segments();
        for p in first.chain(second) {
            self.slots[p] = None;
        }
        self.layout = Layout::empty(self.capacity());
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.segments();
        Iter {
            inner: self.slots[first].iter().chain(self.slots[second].iter()),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.segments();
        // the wrapped segment always ends before the first one starts
        let (low, high) = self.slots.split_at_mut(first.start);
        let first = &mut high[..first.len()];
        let second = &mut low[second];
        IterMut {
            inner: first.iter_mut().chain(second.iter_mut()),
        }
    }

    fn segments(&self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        segments(self.layout.head, self.layout.len, self.capacity())
    }

    fn reserve_one(&mut self) -> Result<(), ListError> {
        if self.layout.len < self.capacity() {
            return Ok(());
        }
        self.grow()
    }

    /// Move every element, in order, to the front of a buffer twice as large.
    fn grow(&mut self) -> Result<(), ListError> {
        let old = self.capacity();
        let new = old.saturating_mul(2).min(self.max_capacity);
        if new <= old {
            warn!(capacity = old, "ring list capacity exhausted");
            return Err(ListError::CapacityExhausted { capacity: old });
        }

        let len = self.layout.len;
        let (first, second) = self.segments();
        let mut slots: Vec<Option<T>> = Vec::with_capacity(new);
        for p in first.chain(second) {
            slots.push(self.slots[p].take());
        }
        slots.resize_with(new, || None);

        self.slots = slots.into_boxed_slice();
        self.layout = Layout {
            head: 0,
            tail: retreat(len, new),
            len,
        };
        debug!(old_capacity = old, new_capacity = new, len, "ring list grew");
        Ok(())
    }
}

impl<T: PartialEq> RingList<T> {
    /// Logical index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> RingList<T> {
    /// Clone the sequence into `dest` starting at `offset`.
    ///
    /// Copies at most two contiguous runs: head to the end of the first
    /// segment, then slot 0 to the tail when the ring wraps. Nothing is
    /// written unless the whole sequence fits.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), ListError> {
        let required = offset.saturating_add(self.len());
        if required > dest.len() {
            return Err(ListError::DestinationTooSmall {
                required,
                available: dest.len(),
            });
        }

        let (first, second) = self.segments();
        let mut at = offset;
        for run in [first, second] {
            let n = run.len();
            for (out, slot) in dest[at..at + n].iter_mut().zip(&self.slots[run]) {
                if let Some(item) = slot {
                    out.clone_from(item);
                }
            }
            at += n;
        }
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingList<T> {}

impl<T> Index<usize> for RingList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for RingList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{}", e),
        }
    }
}

/// # Panics
///
/// Panics if the list cannot grow to hold every element.
impl<T> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(e) = self.add(item) {
                panic!("{}", e);
            }
        }
    }
}

impl<T> FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let max_capacity = default_max_capacity::<T>();
        let capacity = iter.size_hint().0.max(DEFAULT_CAPACITY).min(max_capacity);
        let mut list = Self::with_parts(capacity, max_capacity);
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`RingList`], in logical order.
pub struct Iter<'a, T> {
    inner: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`RingList`], in logical order.
pub struct IterMut<'a, T> {
    inner: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, draining from the front.
pub struct IntoIter<T> {
    list: RingList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
