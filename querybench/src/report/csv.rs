use querybench_core::{IterationStats, RunRecord};
use time::format_description::well_known::Rfc3339;

/// Raw per-attempt export: a header row plus one data row per record,
/// in execution order.
pub fn export_runs(runs: &[RunRecord]) -> String {
    let mut out = String::new();
    out.push_str("scale,repetition,client,elapsed_ms,row_count,payload_bytes,executed_at\n");
    for r in runs {
        let executed_at = r.executed_at.format(&Rfc3339).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            r.scale,
            r.repetition,
            csv_escape(&r.client_name),
            r.elapsed_millis,
            r.row_count,
            r.payload_bytes,
            executed_at,
        ));
    }
    out
}

/// Aggregate export: one data row per (scale, client) partition, in
/// presentation order. Raw latencies are `;`-joined in the last column.
pub fn export_stats(stats: &[IterationStats]) -> String {
    let mut out = String::new();
    out.push_str(
        "scale,client,mean_ms,std_dev_ms,min_ms,max_ms,p50_ms,p95_ms,p99_ms,\
         throughput_rows_per_sec,total_rows,total_payload_bytes,raw_latencies_ms\n",
    );
    for s in stats {
        let latencies = s
            .raw_latencies
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(";");
        out.push_str(&format!(
            "{},{},{},{:.3},{},{},{},{},{},{:.3},{},{},{}\n",
            s.scale,
            csv_escape(&s.client_name),
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
            latencies,
        ));
    }
    out
}

/// Quote a field when it carries a delimiter, doubling embedded quotes.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
