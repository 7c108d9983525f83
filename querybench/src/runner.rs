//! Benchmark matrix execution.
use crate::clients::QueryClient;
use querybench_core::{aggregate, BenchPlan, RunRecord, TestResult};
use std::fmt::Write;
use std::time::Instant;
use time::OffsetDateTime;
#[allow(unused_imports)]
use tracing::{debug, info, instrument, warn};

/// Drives the scale x client x repetition matrix and collects a
/// [`TestResult`].
///
/// Execution is strictly sequential. Overlapping queries would contend
/// for shared connection capacity and distort the very latencies being
/// compared, so cells never run in parallel.
pub struct BenchRunner {
    plan: BenchPlan,
    clients: Vec<Box<dyn QueryClient>>,
}

impl BenchRunner {
    pub fn new(plan: BenchPlan, clients: Vec<Box<dyn QueryClient>>) -> Self {
        Self { plan, clients }
    }

    /// Run every cell of the matrix to completion.
    ///
    /// A failing attempt never aborts the run: it contributes one line
    /// to the accumulated error message, no [`RunRecord`], and the
    /// matrix moves on. An empty plan or client list yields an empty,
    /// successful result; validating inputs is the caller's concern.
    ///
    /// Statistics are computed once, after the whole matrix has run.
    #[instrument(name = "bench", skip_all)]
    pub async fn run(self) -> TestResult {
        let started_at = OffsetDateTime::now_utc();
        let total = self.plan.scales.len() * self.clients.len() * self.plan.repetitions as usize;

        let mut runs: Vec<RunRecord> = Vec::with_capacity(total);
        let mut errors = String::new();
        let mut attempt = 0usize;

        for &scale in &self.plan.scales {
            for client in &self.clients {
                for repetition in 1..=self.plan.repetitions {
                    attempt += 1;
                    let start = Instant::now();
                    match client.execute_query(scale).await {
                        Ok(rows) => {
                            let record = RunRecord::new(
                                scale,
                                repetition,
                                client.name(),
                                start.elapsed(),
                                rows.len() as u64,
                            );
                            info!(
                                "[{attempt}/{total}] {} scale={scale} rep={repetition}: {} rows in {}ms",
                                client.name(),
                                record.row_count,
                                record.elapsed_millis,
                            );
                            runs.push(record);
                        }
                        Err(err) => {
                            warn!(
                                "[{attempt}/{total}] {} scale={scale} rep={repetition} failed: {err}",
                                client.name(),
                            );
                            let _ = writeln!(errors, "{} rep {repetition}: {err}", client.name());
                        }
                    }
                }
            }
        }

        let stats = aggregate(&runs);
        TestResult {
            success: errors.is_empty(),
            error_message: errors,
            runs,
            stats,
            started_at,
            ended_at: OffsetDateTime::now_utc(),
        }
    }
}
