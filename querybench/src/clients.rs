//! The query-client capability the runner drives.
pub mod http;

pub use http::HttpQueryClient;

use crate::error::QueryError;
use futures_util::future::BoxFuture;

/// A single result row: column name to loosely-typed value.
///
/// The harness is schema-agnostic. Nothing past the client adapters
/// looks inside a row; the runner only takes `rows.len()`.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// A named endpoint adapter.
///
/// `name` is the grouping key for statistics and must stay constant for
/// the adapter's lifetime. Object-safe so the runner can hold a
/// heterogeneous list of endpoints.
pub trait QueryClient: Send + Sync {
    fn name(&self) -> &str;

    /// Execute the benchmark query bounded to `row_bound` rows.
    fn execute_query(&self, row_bound: u64) -> BoxFuture<'_, Result<Vec<Row>, QueryError>>;
}
