mod utils;
#[allow(unused)]
use utils::*;

use futures_util::future::BoxFuture;
use querybench::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

fn make_rows(count: u64) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let mut row = Row::new();
            row.insert("id".to_string(), serde_json::json!(i));
            row.insert("name".to_string(), serde_json::json!(format!("record-{i}")));
            row
        })
        .collect()
}

struct FixedRows {
    name: &'static str,
}

impl QueryClient for FixedRows {
    fn name(&self) -> &str {
        self.name
    }

    fn execute_query(&self, row_bound: u64) -> BoxFuture<'_, Result<Vec<Row>, QueryError>> {
        Box::pin(async move { Ok(make_rows(row_bound)) })
    }
}

struct AlwaysFails {
    name: &'static str,
    calls: AtomicU32,
}

impl QueryClient for AlwaysFails {
    fn name(&self) -> &str {
        self.name
    }

    fn execute_query(&self, _row_bound: u64) -> BoxFuture<'_, Result<Vec<Row>, QueryError>> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        Box::pin(async move { Err(QueryError::Endpoint(format!("connection refused (#{call})"))) })
    }
}

#[tokio::test]
async fn full_pipeline_happy_path() {
    init();

    let plan = BenchPlan::new(vec![10, 100], 3);
    let clients: Vec<Box<dyn QueryClient>> = vec![
        Box::new(FixedRows { name: "alpha" }),
        Box::new(FixedRows { name: "beta" }),
    ];
    let result = BenchRunner::new(plan, clients).run().await;

    assert!(result.success, "{}", result.error_message);
    assert_eq!(result.runs.len(), 12);
    assert_eq!(result.stats.len(), 4);

    // Presentation order: scale ascending, then client name ascending.
    let keys: Vec<(u64, &str)> = result
        .stats
        .iter()
        .map(|s| (s.scale, s.client_name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![(10, "alpha"), (10, "beta"), (100, "alpha"), (100, "beta")]
    );

    for s in &result.stats {
        assert_eq!(s.raw_latencies.len(), 3);
        assert_eq!(s.total_rows, s.scale * 3);
        assert_eq!(s.total_payload_bytes, s.total_rows * 250);
        assert!(s.min <= s.p50 && s.p50 <= s.p95 && s.p95 <= s.p99 && s.p99 <= s.max);
    }

    // Every sink accepts the finished result.
    let text = querybench::report::text::render(&result);
    assert!(text.contains("status: ok"));
    assert!(text.contains("client=beta"));

    let raw_csv = querybench::report::csv::export_runs(&result.runs);
    assert_eq!(raw_csv.lines().count(), 13);

    let stats_csv = querybench::report::csv::export_stats(&result.stats);
    assert_eq!(stats_csv.lines().count(), 5);

    // Stats are a pure function of the immutable run collection.
    assert_eq!(querybench_core::aggregate(&result.runs), result.stats);

    let json = querybench::report::json::export(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["runs"].as_array().unwrap().len(), 12);
    assert_eq!(value["stats"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn dead_endpoint_is_reported_not_fatal() {
    init();

    let plan = BenchPlan::new(vec![10], 3);
    let clients: Vec<Box<dyn QueryClient>> = vec![
        Box::new(AlwaysFails {
            name: "dead",
            calls: AtomicU32::new(0),
        }),
        Box::new(FixedRows { name: "alive" }),
    ];
    let result = BenchRunner::new(plan, clients).run().await;

    assert!(!result.success);
    assert_eq!(result.error_message.lines().count(), 3);
    assert!(result.error_message.contains("dead rep 1:"));
    assert!(result.error_message.contains("connection refused"));

    // The surviving client still produced a full partition.
    assert_eq!(result.runs.len(), 3);
    assert_eq!(result.stats.len(), 1);
    assert_eq!(result.stats[0].client_name, "alive");
    assert_eq!(result.stats[0].total_rows, 30);

    let text = querybench::report::text::render(&result);
    assert!(text.contains("completed with errors"));
    assert!(text.contains("dead rep 2:"));
}
