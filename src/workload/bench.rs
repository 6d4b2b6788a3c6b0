//! Wall-clock comparison of the ring list against `Vec`.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use super::{prepare, run, Workload, WorkloadStats};
use crate::config::{BenchConfig, RingListConfig};
use crate::errors::{Result, WorkloadError};
use crate::list::{IndexedList, RingList};

#[derive(Debug, Clone, Serialize)]
pub struct ListTiming {
    pub list: String,
    pub runs: usize,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub stats: WorkloadStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub workload: Workload,
    pub size: usize,
    pub operations: usize,
    pub ring: ListTiming,
    pub vec: ListTiming,
    /// `vec.mean_ms / ring.mean_ms`; above 1.0 the ring list is faster.
    pub speedup: f64,
}

/// Time `bench.iterations` runs of `workload` on each list.
///
/// Every run starts from a freshly prepared list with the same seed, so the
/// two lists execute identical operation streams. Only [`run`] is timed.
pub fn benchmark(
    list_config: &RingListConfig,
    bench: &BenchConfig,
    workload: Workload,
) -> Result<BenchReport> {
    if bench.iterations == 0 {
        return Err(
            WorkloadError::InvalidParameter("iterations must be at least 1".to_string()).into(),
        );
    }

    let ring = time_list(bench, workload, "ring_list", || RingList::with_config(list_config))?;
    let vec = time_list(bench, workload, "vec", || Ok(Vec::new()))?;
    let speedup = if ring.mean_ms > 0.0 {
        vec.mean_ms / ring.mean_ms
    } else {
        0.0
    };

    info!(%workload, ring_ms = ring.mean_ms, vec_ms = vec.mean_ms, "benchmark complete");
    Ok(BenchReport {
        workload,
        size: bench.size,
        operations: bench.operations,
        ring,
        vec,
        speedup,
    })
}

fn time_list<L, F>(
    bench: &BenchConfig,
    workload: Workload,
    name: &str,
    make: F,
) -> Result<ListTiming>
where
    L: IndexedList<u32>,
    F: Fn() -> std::result::Result<L, crate::errors::ListError>,
{
    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut stats = WorkloadStats::default();

    for _ in 0..bench.iterations {
        let mut list = make()?;
        let mut rng = StdRng::seed_from_u64(bench.seed);
        prepare(&mut list, workload, bench.size, &mut rng)?;

        let start = Instant::now();
        stats = run(&mut list, workload, bench.operations, &mut rng)?;
        let elapsed = start.elapsed();

        total += elapsed;
        min = min.min(elapsed);
    }

    Ok(ListTiming {
        list: name.to_string(),
        runs: bench.iterations,
        mean_ms: total.as_secs_f64() * 1000.0 / bench.iterations as f64,
        min_ms: min.as_secs_f64() * 1000.0,
        stats,
    })
}
