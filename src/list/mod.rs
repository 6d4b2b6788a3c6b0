//! Ring-buffer list and the linear-list contract it satisfies.
//!
//! - [`RingList`]: the container
//! - [`IndexedList`]: indexed-sequence contract shared with `Vec`, used by
//!   workloads and differential checks to drive either list
//! - `index` / `shift`: circular arithmetic and gap-shifting strategies

pub mod index;
pub mod ring;
pub mod shift;

pub use ring::{IntoIter, Iter, IterMut, RingList, DEFAULT_CAPACITY};

use crate::errors::ListError;

/// Indexed linear list with bounds-checked positional edits.
pub trait IndexedList<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replace the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    fn add(&mut self, value: T) -> Result<(), ListError>;

    /// Insert before `index`; `index == len()` appends.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;

    fn clear(&mut self);

    /// The elements in logical order.
    fn snapshot(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> IndexedList<T> for RingList<T> {
    fn len(&self) -> usize {
        RingList::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        RingList::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        RingList::set(self, index, value)
    }

    fn add(&mut self, value: T) -> Result<(), ListError> {
        RingList::add(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        RingList::insert(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        RingList::remove_at(self, index)
    }

    fn clear(&mut self) {
        RingList::clear(self)
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// The reference list: same contract, plain contiguous storage.
impl<T> IndexedList<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = Vec::len(self);
        self.as_slice()
            .get(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = Vec::len(self);
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    fn add(&mut self, value: T) -> Result<(), ListError> {
        self.push(value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = Vec::len(self);
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = Vec::len(self);
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(Vec::remove(self, index))
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}
