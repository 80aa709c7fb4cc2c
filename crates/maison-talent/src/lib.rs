//! Rule-based decision core for luxury retail talent matching.
//!
//! [`scoring`] holds the three pure engines (assessment, career projection and
//! match scoring). [`pipeline`] wires them to a repository and an HTTP router
//! for callers that batch-recompute and persist results.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod telemetry;
