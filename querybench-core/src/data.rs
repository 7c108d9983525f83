use crate::{IterationStats, PAYLOAD_BYTES_PER_ROW};
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;

/// One successful (scale, client, repetition) attempt.
///
/// Failed attempts never produce a record; they only contribute a line
/// to [`TestResult::error_message`]. Records are append-only and never
/// mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// Requested row bound for this attempt.
    pub scale: u64,
    /// 1-based ordinal within the (scale, client) group.
    pub repetition: u32,
    pub client_name: String,
    pub elapsed_millis: u64,
    /// Rows actually returned; may be lower than `scale`.
    pub row_count: u64,
    /// `row_count * PAYLOAD_BYTES_PER_ROW`, an estimate.
    pub payload_bytes: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub executed_at: OffsetDateTime,
}

impl RunRecord {
    pub fn new(
        scale: u64,
        repetition: u32,
        client_name: &str,
        elapsed: Duration,
        row_count: u64,
    ) -> Self {
        Self {
            scale,
            repetition,
            client_name: client_name.to_string(),
            elapsed_millis: elapsed.as_millis() as u64,
            row_count,
            payload_bytes: row_count * PAYLOAD_BYTES_PER_ROW,
            executed_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Root aggregate for a full matrix run.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Every successful attempt, in strict execution order.
    pub runs: Vec<RunRecord>,
    /// One entry per (scale, client) partition, scale ascending then
    /// client name ascending.
    pub stats: Vec<IterationStats>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    /// True iff every attempt in the matrix succeeded.
    pub success: bool,
    /// Concatenated per-attempt failure descriptions, one per line.
    /// Empty iff `success`.
    pub error_message: String,
}
