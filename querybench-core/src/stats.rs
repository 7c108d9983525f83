use crate::RunRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics for one (scale, client) partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationStats {
    pub scale: u64,
    pub client_name: String,
    /// Elapsed-time samples in milliseconds, sorted ascending.
    /// Percentiles index into this sequence.
    pub raw_latencies: Vec<u64>,
    /// Arithmetic mean truncated to whole milliseconds.
    pub mean: u64,
    /// Population standard deviation centered on the truncated mean.
    /// Zero for fewer than two samples.
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub total_rows: u64,
    pub total_payload_bytes: u64,
    pub throughput_rows_per_sec: f64,
}

/// Partition runs by (scale, client) and reduce each partition.
///
/// Output is ordered scale ascending, then client name ascending, which
/// is the presentation order the reporting sinks rely on. Pure function
/// of its input: recomputing over the same records yields identical
/// output.
pub fn aggregate(runs: &[RunRecord]) -> Vec<IterationStats> {
    let mut partitions: BTreeMap<(u64, &str), Vec<&RunRecord>> = BTreeMap::new();
    for run in runs {
        partitions
            .entry((run.scale, run.client_name.as_str()))
            .or_default()
            .push(run);
    }

    partitions
        .into_iter()
        .map(|((scale, client_name), group)| summarize(scale, client_name, &group))
        .collect()
}

/// Reduce one partition. An empty group yields all-zero statistics
/// rather than an error, so a cell whose every repetition failed stays
/// representable.
pub fn summarize(scale: u64, client_name: &str, group: &[&RunRecord]) -> IterationStats {
    let mut latencies: Vec<u64> = group.iter().map(|r| r.elapsed_millis).collect();
    latencies.sort_unstable();

    let total_elapsed: u64 = latencies.iter().sum();
    // Integer division truncates, matching the millisecond domain.
    let mean = if latencies.is_empty() {
        0
    } else {
        total_elapsed / latencies.len() as u64
    };

    let total_rows: u64 = group.iter().map(|r| r.row_count).sum();

    IterationStats {
        scale,
        client_name: client_name.to_string(),
        mean,
        std_dev: population_std_dev(&latencies, mean),
        min: latencies.first().copied().unwrap_or(0),
        max: latencies.last().copied().unwrap_or(0),
        p50: nearest_rank(&latencies, 50.0),
        p95: nearest_rank(&latencies, 95.0),
        p99: nearest_rank(&latencies, 99.0),
        total_rows,
        total_payload_bytes: group.iter().map(|r| r.payload_bytes).sum(),
        throughput_rows_per_sec: throughput(total_rows, total_elapsed),
        raw_latencies: latencies,
    }
}

/// Nearest-rank percentile with round-up rank selection: the sample at
/// index `ceil(p/100 * n) - 1`, clamped to the sequence. Always returns
/// an actual sample, never an interpolated value; on small sample sets
/// the upper percentiles degenerate to the maximum, which is intended.
pub fn nearest_rank(sorted: &[u64], percentile: f64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = (percentile / 100.0 * sorted.len() as f64).ceil() as usize;
    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

/// Population standard deviation over all samples, centered on the
/// integer-truncated mean rather than a full-precision one. The
/// truncated center is observable in reported output and must not be
/// swapped for a float mean.
fn population_std_dev(samples: &[u64], mean: u64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let center = mean as f64;
    let variance = samples
        .iter()
        .map(|&s| {
            let dev = s as f64 - center;
            dev * dev
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

/// Rows per second over the whole partition. Zero when no time was
/// observed, which guards the all-zero-latency degenerate input.
fn throughput(total_rows: u64, total_elapsed_millis: u64) -> f64 {
    if total_elapsed_millis == 0 {
        return 0.0;
    }
    total_rows as f64 / (total_elapsed_millis as f64 / 1000.0)
}
