//! Observability: store-traffic counters and the sink abstraction.
//!
//! Logging goes through `tracing` at the call sites; this module only
//! carries structured counters.

pub(crate) mod metrics;
pub(crate) mod sink;

#[cfg(test)]
mod tests;

// re-exports
pub use metrics::{CollectionCounters, EventOps, EventState, PlanCounters};
pub use sink::{
    MetricsEvent, MetricsSink, MetricsSinkGuard, PlanKind, WriteKind, install_metrics_sink,
    metrics_report, metrics_reset_all, record,
};
