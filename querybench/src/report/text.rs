use querybench_core::{IterationStats, TestResult};
use std::fmt::Write;

/// Human-readable run summary: a header, one line per partition, and
/// the accumulated errors when any attempt failed.
pub fn render(result: &TestResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "querybench: {} runs across {} partitions",
        result.runs.len(),
        result.stats.len(),
    );
    let _ = writeln!(
        out,
        "status: {}",
        if result.success {
            "ok"
        } else {
            "completed with errors"
        },
    );
    for stats in &result.stats {
        let _ = writeln!(out, "  {}", stats_line(stats));
    }
    if !result.success {
        let _ = writeln!(out, "errors:");
        for line in result.error_message.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

pub fn stats_line(s: &IterationStats) -> String {
    format!(
        "scale={} client={} mean={}ms stddev={:.2} min={}ms max={}ms p50={}ms p95={}ms p99={}ms tput={:.2} rows/s rows={} bytes={}",
        s.scale,
        s.client_name,
        s.mean,
        s.std_dev,
        s.min,
        s.max,
        s.p50,
        s.p95,
        s.p99,
        s.throughput_rows_per_sec,
        s.total_rows,
        s.total_payload_bytes,
    )
}
