//! ringlist - a randomly indexable, double-ended list on one ring buffer
//!
//! Indexed get/set and edits at either end are O(1) (amortized for
//! appends). An insert or remove at position `i` only moves
//! `min(i, len - i)` elements, because the gap is closed or opened from
//! whichever end is nearer.
//!
//! - **list**: [`RingList`], its index arithmetic and shift strategies, and
//!   the [`IndexedList`] contract shared with `Vec`
//! - **workload**: synthetic workloads, benchmarks and differential checks
//! - **config** / **errors** / **observability**: the ambient stack used by
//!   the `ringlist` binary
//!
//! # Quick Start
//!
//! ```
//! use ringlist::RingList;
//!
//! let mut list = RingList::with_capacity(2)?;
//! for i in 0..8 {
//!     list.add(i)?;
//! }
//! list.remove_at(5)?;
//! list.insert(0, -1)?;
//! assert_eq!(list.to_vec(), vec![-1, 0, 1, 2, 3, 4, 6, 7]);
//! # Ok::<(), ringlist::ListError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod list;
pub mod observability;
pub mod workload;

pub use config::{Config, RingListConfig};
pub use errors::{ListError, RinglistError, WorkloadError};
pub use list::{IndexedList, RingList};
