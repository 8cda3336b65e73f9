//! Observability module for monitoring and metrics.
//!
//! This module provides in-process counters for submissions and listings,
//! plus a small timer that reports durations through `tracing`.

pub mod metrics;

pub use metrics::{MetricsSummary, MetricsTracker, Timer};
