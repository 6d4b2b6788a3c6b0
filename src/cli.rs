//! ringlist - ring-buffer list workloads
//!
//! Benchmarks the ring list against `Vec` and runs differential checks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::Config;
use crate::observability::telemetry::{init_tracing, init_tracing_verbose};
use crate::workload::{self, BenchReport, VerifyReport, Workload};

#[derive(Parser, Debug)]
#[command(name = "ringlist")]
#[command(about = "Ring-buffer list workloads and differential verification")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Verbose mode (info-level logs on stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time workloads on the ring list and on Vec
    #[command(alias = "b")]
    Bench {
        /// Workloads to run (repeatable); defaults to the config list
        #[arg(short = 'w', long = "workload", value_enum)]
        workloads: Vec<Workload>,

        /// Elements loaded before measuring
        #[arg(short, long)]
        size: Option<usize>,

        /// Operations per timed run
        #[arg(short = 'n', long)]
        operations: Option<usize>,

        /// Timed runs per list
        #[arg(short, long)]
        iterations: Option<usize>,

        #[arg(long, value_enum, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Compare the ring list with Vec after every random operation
    #[command(alias = "v")]
    Verify {
        #[arg(long)]
        seed: Option<u64>,

        /// Elements loaded before the random phase
        #[arg(short, long)]
        size: Option<usize>,

        #[arg(short = 'n', long)]
        operations: Option<usize>,

        #[arg(long, value_enum, default_value = "text")]
        output_format: OutputFormat,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)
}

fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing();
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Bench {
            workloads,
            size,
            operations,
            iterations,
            output_format,
        } => {
            if !workloads.is_empty() {
                config.bench.workloads = workloads;
            }
            if let Some(n) = size {
                config.bench.size = n;
            }
            if let Some(n) = operations {
                config.bench.operations = n;
            }
            if let Some(n) = iterations {
                config.bench.iterations = n;
            }
            config.validate()?;

            let mut reports = Vec::with_capacity(config.bench.workloads.len());
            for &w in &config.bench.workloads {
                let report = workload::benchmark(&config.list, &config.bench, w)
                    .with_context(|| format!("Benchmark '{}' failed", w))?;
                if output_format == OutputFormat::Text {
                    print_bench(&report);
                }
                reports.push(report);
            }
            if output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        Commands::Verify {
            seed,
            size,
            operations,
            output_format,
        } => {
            let seed = seed.unwrap_or(config.bench.seed);
            let size = size.unwrap_or(config.bench.size);
            let operations = operations.unwrap_or(config.bench.operations);

            let report = workload::verify(&config.list, seed, size, operations)?;
            match output_format {
                OutputFormat::Text => print_verify(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
    }

    Ok(())
}

fn print_bench(report: &BenchReport) {
    println!(
        "{} {} (size {}, {} ops)",
        "▸".cyan(),
        report.workload.to_string().bold(),
        report.size,
        report.operations
    );
    for timing in [&report.ring, &report.vec] {
        println!(
            "    {:<10} mean {:>10.3} ms   min {:>10.3} ms",
            timing.list, timing.mean_ms, timing.min_ms
        );
    }
    let speedup = format!("{:.2}x", report.speedup);
    let speedup = if report.speedup >= 1.0 {
        speedup.green()
    } else {
        speedup.yellow()
    };
    println!("    speedup    {}", speedup);
}

fn print_verify(report: &VerifyReport) {
    println!(
        "{} {} operations matched Vec (seed {}, size {}, final len {}, capacity {})",
        "✓".green(),
        report.operations,
        report.seed,
        report.size,
        report.final_len,
        report.final_capacity
    );
}
