use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::RinglistError;
use crate::workload::Workload;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: RingListConfig,

    #[serde(default)]
    pub bench: BenchConfig,
}

/// Sizing of a [`RingList`](crate::RingList) buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingListConfig {
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    /// Upper bound on growth; `None` means the platform limit.
    #[serde(default)]
    pub max_capacity: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Elements loaded into each list before measuring.
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_operations")]
    pub operations: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Timed runs per list and workload.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_workloads")]
    pub workloads: Vec<Workload>,
}

impl Default for RingListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            max_capacity: None,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            operations: default_operations(),
            seed: default_seed(),
            iterations: default_iterations(),
            workloads: default_workloads(),
        }
    }
}

fn default_initial_capacity() -> usize { crate::list::DEFAULT_CAPACITY }
fn default_size() -> usize { 50_000 }
fn default_operations() -> usize { 50_000 }
fn default_seed() -> u64 { 12345 }
fn default_iterations() -> usize { 5 }
fn default_workloads() -> Vec<Workload> { Workload::ALL.to_vec() }

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config: Config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str(&content).context("Failed to parse config")?
            }
            None => {
                let home_config = dirs::home_dir().map(|h| h.join(".config/ringlist/config.toml"));
                let mut candidates = vec![std::path::PathBuf::from("ringlist.toml")];
                candidates.extend(home_config);

                let mut loaded = None;
                for p in &candidates {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        debug!("Loading config from {}", p.display());
                        loaded = Some(toml::from_str(&content).context("Failed to parse config")?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `RINGLIST_*` variables, looked up through `lookup`.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(n) = lookup("RINGLIST_INITIAL_CAPACITY").and_then(|v| v.parse().ok()) {
            self.list.initial_capacity = n;
        }
        if let Some(n) = lookup("RINGLIST_BENCH_SIZE").and_then(|v| v.parse().ok()) {
            self.bench.size = n;
        }
        if let Some(n) = lookup("RINGLIST_BENCH_OPERATIONS").and_then(|v| v.parse().ok()) {
            self.bench.operations = n;
        }
        if let Some(n) = lookup("RINGLIST_SEED").and_then(|v| v.parse().ok()) {
            self.bench.seed = n;
        }
    }

    pub fn validate(&self) -> std::result::Result<(), RinglistError> {
        if self.list.initial_capacity == 0 {
            return Err(RinglistError::Config(
                "list.initial_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.list.max_capacity {
            if max < self.list.initial_capacity {
                return Err(RinglistError::Config(format!(
                    "list.max_capacity ({}) is below list.initial_capacity ({})",
                    max, self.list.initial_capacity
                )));
            }
        }
        if self.bench.iterations == 0 {
            return Err(RinglistError::Config(
                "bench.iterations must be at least 1".to_string(),
            ));
        }
        if self.bench.workloads.is_empty() {
            return Err(RinglistError::Config(
                "bench.workloads must name at least one workload".to_string(),
            ));
        }
        Ok(())
    }
}
