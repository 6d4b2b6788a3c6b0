//! Synthetic list workloads.
//!
//! Every workload runs against any [`IndexedList`], so the ring list and a
//! plain `Vec` see identical operation streams. Lists are prepared so that
//! the ring buffer has already wrapped before measurement starts: fill,
//! drain half from the front region, refill.

pub mod bench;
pub mod verify;

pub use bench::{benchmark, BenchReport, ListTiming};
pub use verify::{verify, VerifyReport};

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::errors::ListError;
use crate::list::IndexedList;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Workload {
    /// Remove at uniformly random positions
    Remove,
    /// Remove the first element repeatedly
    RemoveHead,
    /// Insert at uniformly random positions
    Insert,
    /// Insert before the first element repeatedly
    InsertHead,
    /// Uniform mix of remove, replace and insert at random positions
    Random,
}

impl Workload {
    pub const ALL: [Workload; 5] = [
        Workload::Remove,
        Workload::RemoveHead,
        Workload::Insert,
        Workload::InsertHead,
        Workload::Random,
    ];

    /// Whether preparation drains from the running index instead of the front.
    fn drains_at_index(self) -> bool {
        matches!(self, Workload::Remove | Workload::Insert)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Workload::Remove => "remove",
            Workload::RemoveHead => "remove-head",
            Workload::Insert => "insert",
            Workload::InsertHead => "insert-head",
            Workload::Random => "random",
        };
        f.write_str(name)
    }
}

/// A single list edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert { index: usize, value: u32 },
    RemoveAt { index: usize },
    Set { index: usize, value: u32 },
}

impl Operation {
    pub fn index(&self) -> usize {
        match *self {
            Operation::Insert { index, .. }
            | Operation::RemoveAt { index }
            | Operation::Set { index, .. } => index,
        }
    }

    pub fn apply<L: IndexedList<u32>>(&self, list: &mut L) -> Result<(), ListError> {
        match *self {
            Operation::Insert { index, value } => list.insert(index, value),
            Operation::RemoveAt { index } => list.remove_at(index).map(drop),
            Operation::Set { index, value } => list.set(index, value).map(drop),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { index, value } => write!(f, "insert({}, {})", index, value),
            Operation::RemoveAt { index } => write!(f, "remove_at({})", index),
            Operation::Set { index, value } => write!(f, "set({}, {})", index, value),
        }
    }
}

/// Counts of what a workload run actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadStats {
    pub applied: usize,
    pub inserts: usize,
    pub removals: usize,
    pub replacements: usize,
    pub final_len: usize,
}

/// Draw the next operation of `workload` for a list currently of length `len`.
///
/// Returns `None` when a removal workload meets an empty list. A random
/// workload on an empty list falls back to inserting at 0.
pub fn next_operation<R: Rng>(
    workload: Workload,
    len: usize,
    step: usize,
    rng: &mut R,
) -> Option<Operation> {
    let op = match workload {
        Workload::Remove if len == 0 => return None,
        Workload::Remove => Operation::RemoveAt {
            index: rng.random_range(0..len),
        },
        Workload::RemoveHead if len == 0 => return None,
        Workload::RemoveHead => Operation::RemoveAt { index: 0 },
        Workload::Insert => Operation::Insert {
            index: random_index(len, rng),
            value: rng.random(),
        },
        Workload::InsertHead => Operation::Insert {
            index: 0,
            value: step as u32,
        },
        Workload::Random => {
            let action = rng.random_range(0..3u8);
            let index = random_index(len, rng);
            let value = rng.random();
            match action {
                _ if len == 0 => Operation::Insert { index: 0, value },
                0 => Operation::RemoveAt { index },
                1 => Operation::Set { index, value },
                _ => Operation::Insert { index, value },
            }
        }
    };
    Some(op)
}

fn random_index<R: Rng>(len: usize, rng: &mut R) -> usize {
    if len == 0 {
        0
    } else {
        rng.random_range(0..len)
    }
}

/// Load `size` random values, drain `size / 2`, then refill `size / 2`.
pub fn prepare<L, R>(
    list: &mut L,
    workload: Workload,
    size: usize,
    rng: &mut R,
) -> Result<(), ListError>
where
    L: IndexedList<u32>,
    R: Rng,
{
    for _ in 0..size {
        list.add(rng.random())?;
    }
    for i in 0..size / 2 {
        let index = if workload.drains_at_index() { i } else { 0 };
        list.remove_at(index)?;
    }
    for _ in 0..size / 2 {
        list.add(rng.random())?;
    }
    Ok(())
}

/// Apply up to `operations` edits of `workload` to `list`.
pub fn run<L, R>(
    list: &mut L,
    workload: Workload,
    operations: usize,
    rng: &mut R,
) -> Result<WorkloadStats, ListError>
where
    L: IndexedList<u32>,
    R: Rng,
{
    let span = info_span!("workload", %workload, operations);
    let _enter = span.enter();

    let mut stats = WorkloadStats::default();
    for step in 0..operations {
        let Some(op) = next_operation(workload, list.len(), step, rng) else {
            debug!(step, "list drained, stopping early");
            break;
        };
        op.apply(list)?;
        match op {
            Operation::Insert { .. } => stats.inserts += 1,
            Operation::RemoveAt { .. } => stats.removals += 1,
            Operation::Set { .. } => stats.replacements += 1,
        }
        stats.applied += 1;
    }
    stats.final_len = list.len();
    Ok(stats)
}
