//! Differential verification against `Vec`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use super::{next_operation, prepare, Workload};
use crate::config::RingListConfig;
use crate::errors::{Result, WorkloadError};
use crate::list::{IndexedList, RingList};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub seed: u64,
    pub size: usize,
    pub operations: usize,
    pub final_len: usize,
    pub final_capacity: usize,
}

/// Run the random workload on a [`RingList`] and a `Vec` in lockstep.
///
/// Both lists start from the same prepared contents. After every operation
/// the full sequences are compared; the first mismatch is reported as
/// [`WorkloadError::Divergence`].
pub fn verify(
    list_config: &RingListConfig,
    seed: u64,
    size: usize,
    operations: usize,
) -> Result<VerifyReport> {
    let mut ring = RingList::with_config(list_config)?;
    let mut reference: Vec<u32> = Vec::with_capacity(size);

    prepare(&mut ring, Workload::Random, size, &mut StdRng::seed_from_u64(seed))?;
    prepare(&mut reference, Workload::Random, size, &mut StdRng::seed_from_u64(seed))?;
    if ring.snapshot() != reference {
        return Err(WorkloadError::Divergence {
            step: 0,
            operation: "prepare".to_string(),
            index: 0,
        }
        .into());
    }

    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    for step in 0..operations {
        let Some(op) = next_operation(Workload::Random, reference.len(), step, &mut rng) else {
            break;
        };
        op.apply(&mut ring)?;
        op.apply(&mut reference)?;

        if ring.len() != reference.len() || !ring.iter().eq(reference.iter()) {
            debug!(step, %op, "ring list diverged from reference");
            return Err(WorkloadError::Divergence {
                step: step + 1,
                operation: op.to_string(),
                index: op.index(),
            }
            .into());
        }
    }

    info!(seed, operations, len = ring.len(), "differential run matched");
    Ok(VerifyReport {
        seed,
        size,
        operations,
        final_len: ring.len(),
        final_capacity: ring.capacity(),
    })
}
