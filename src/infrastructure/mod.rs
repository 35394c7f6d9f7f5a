//! Infrastructure Layer
//!
//! Process-level collaborators: Prometheus metrics.

pub mod metrics;
