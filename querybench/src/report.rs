//! Rendering sinks over a finished [`TestResult`].
//!
//! Renderers return `String`s; where the output goes (stdout, files,
//! an upload) is the caller's concern. The result is read-only by the
//! time it gets here, so every renderer is a pure function.
//!
//! [`TestResult`]: querybench_core::TestResult
pub mod csv;
pub mod json;
pub mod text;
