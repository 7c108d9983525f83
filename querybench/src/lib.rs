//! A query-latency benchmarking harness.
//!
//! `querybench` issues the same logical query against multiple
//! data-access endpoints at several row-count scales, repeats each
//! (scale, endpoint) cell a configurable number of times, and reduces
//! the latency samples into comparable statistics (mean, standard
//! deviation, percentiles, throughput, payload estimate).
//!
//! The pieces:
//! - [`clients::QueryClient`]: the capability an endpoint adapter
//!   implements. [`clients::HttpQueryClient`] is the bundled HTTP one.
//! - [`runner::BenchRunner`]: walks the scale x client x repetition
//!   matrix, strictly sequentially, isolating per-attempt failures.
//! - `querybench_core`: the data model and the statistics aggregator.
//! - [`report`]: text / CSV / JSON renderers over the finished result.

pub mod clients;
pub mod report;
pub mod runner;

mod error;

pub use clients::{QueryClient, Row};
pub use error::QueryError;
pub use runner::BenchRunner;

pub mod prelude {
    pub use crate::clients::{HttpQueryClient, QueryClient, Row};
    pub use crate::error::QueryError;
    pub use crate::runner::BenchRunner;
    pub use querybench_core::{aggregate, BenchPlan, IterationStats, RunRecord, TestResult};
}
