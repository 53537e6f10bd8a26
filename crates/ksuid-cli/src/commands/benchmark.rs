use std::{collections::HashSet, io::Write, thread, time::Instant};

use anyhow::anyhow;
use ksuid::Ksuid;
use tracing::instrument;

use crate::config::BenchmarkConfig;

/// Result of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    pub generated: usize,
    pub unique: usize,
    pub elapsed_secs: f64,
}

impl BenchmarkReport {
    pub fn rate(&self) -> f64 {
        self.generated as f64 / self.elapsed_secs.max(f64::MIN_POSITIVE)
    }

    pub fn collision_pct(&self) -> f64 {
        (self.generated - self.unique) as f64 / self.generated as f64 * 100.0
    }
}

/// Generates `config.count` KSUIDs across `config.threads` workers, each on
/// its own thread-local generator, and checks the results for duplicates.
#[instrument(level = "debug", skip(out))]
pub fn benchmark<W: Write>(config: &BenchmarkConfig, out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "Benchmarking KSUID generation ({} ids, {} threads)...",
        config.count, config.threads
    )?;

    let report = run_benchmark(config)?;
    tracing::info!(?report, "benchmark finished");

    writeln!(
        out,
        "Generated {} KSUIDs in {:.4} seconds",
        report.generated, report.elapsed_secs
    )?;
    writeln!(out, "Rate: {:.0} KSUIDs/second", report.rate())?;
    writeln!(
        out,
        "Uniqueness: {} / {} ({:.6}% collisions)",
        report.unique,
        report.generated,
        report.collision_pct()
    )?;
    Ok(())
}

pub fn run_benchmark(config: &BenchmarkConfig) -> anyhow::Result<BenchmarkReport> {
    let BenchmarkConfig { count, threads } = *config;

    let start = Instant::now();
    let batches = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let n = count / threads + usize::from(t < count % threads);
                s.spawn(move || {
                    (0..n)
                        .map(|_| ksuid::try_generate())
                        .collect::<Result<Vec<Ksuid>, _>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .map_err(|_| anyhow!("benchmark worker panicked"))?
                    .map_err(anyhow::Error::from)
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;
    let elapsed_secs = start.elapsed().as_secs_f64();

    let unique: HashSet<&Ksuid> = batches.iter().flatten().collect();
    Ok(BenchmarkReport {
        generated: batches.iter().map(Vec::len).sum(),
        unique: unique.len(),
        elapsed_secs,
    })
}
