//! Metrics sink boundary.
//!
//! Engine logic never touches `obs::metrics` directly. All instrumentation
//! flows through `MetricsEvent` and `MetricsSink`.
use crate::obs::metrics::{self, EventState};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// PlanKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlanKind {
    FirstPage,
    LastPage,
    ForwardJump,
    BackwardJump,
    OffsetScan,
}

///
/// WriteKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteKind {
    Insert,
    Update,
    Delete,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent<'a> {
    Count {
        collection: &'a str,
    },
    RangeRead {
        collection: &'a str,
        rows: u64,
    },
    PointRead {
        collection: &'a str,
    },
    Write {
        collection: &'a str,
        kind: WriteKind,
    },
    Plan {
        kind: PlanKind,
    },
    StaleResponseDiscarded,
    OrphanedObject,
    LookupCacheHit,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent<'_>);
}

/// GlobalMetricsSink
/// Default sink writing into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent<'_>) {
        match event {
            MetricsEvent::Count { collection } => metrics::with_state_mut(|m| {
                m.ops.count_calls = m.ops.count_calls.saturating_add(1);
                let entry = metrics::collection_entry(m, collection);
                entry.count_calls = entry.count_calls.saturating_add(1);
            }),

            MetricsEvent::RangeRead { collection, rows } => metrics::with_state_mut(|m| {
                m.ops.range_reads = m.ops.range_reads.saturating_add(1);
                m.ops.rows_read = m.ops.rows_read.saturating_add(rows);
                let entry = metrics::collection_entry(m, collection);
                entry.range_reads = entry.range_reads.saturating_add(1);
                entry.rows_read = entry.rows_read.saturating_add(rows);
            }),

            MetricsEvent::PointRead { collection } => metrics::with_state_mut(|m| {
                m.ops.point_reads = m.ops.point_reads.saturating_add(1);
                let entry = metrics::collection_entry(m, collection);
                entry.point_reads = entry.point_reads.saturating_add(1);
            }),

            MetricsEvent::Write { collection, kind } => metrics::with_state_mut(|m| {
                match kind {
                    WriteKind::Insert => m.ops.inserts = m.ops.inserts.saturating_add(1),
                    WriteKind::Update => m.ops.updates = m.ops.updates.saturating_add(1),
                    WriteKind::Delete => m.ops.deletes = m.ops.deletes.saturating_add(1),
                }
                let entry = metrics::collection_entry(m, collection);
                entry.writes = entry.writes.saturating_add(1);
            }),

            MetricsEvent::Plan { kind } => metrics::with_state_mut(|m| {
                let counter = match kind {
                    PlanKind::FirstPage => &mut m.plans.first_page,
                    PlanKind::LastPage => &mut m.plans.last_page,
                    PlanKind::ForwardJump => &mut m.plans.forward_jump,
                    PlanKind::BackwardJump => &mut m.plans.backward_jump,
                    PlanKind::OffsetScan => &mut m.plans.offset_scan,
                };
                *counter = counter.saturating_add(1);
            }),

            MetricsEvent::StaleResponseDiscarded => metrics::with_state_mut(|m| {
                m.ops.stale_responses_discarded = m.ops.stale_responses_discarded.saturating_add(1);
            }),

            MetricsEvent::OrphanedObject => metrics::with_state_mut(|m| {
                m.ops.orphaned_objects = m.ops.orphaned_objects.saturating_add(1);
            }),

            MetricsEvent::LookupCacheHit => metrics::with_state_mut(|m| {
                m.ops.lookup_cache_hits = m.ops.lookup_cache_hits.saturating_add(1);
            }),
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

/// Route one event to the scoped override, or the global counters.
pub fn record(event: MetricsEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> EventState {
    metrics::with_state(Clone::clone)
}

/// Reset the current thread's counters.
pub fn metrics_reset_all() {
    metrics::reset();
}

///
/// MetricsSinkGuard
/// Restores the previous sink override when dropped.
///

#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct MetricsSinkGuard {
    previous: Option<Rc<dyn MetricsSink>>,
}

impl Drop for MetricsSinkGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SINK_OVERRIDE.with(|cell| *cell.borrow_mut() = previous);
    }
}

/// Install a sink override for the current thread until the guard drops.
pub fn install_metrics_sink(sink: Rc<dyn MetricsSink>) -> MetricsSinkGuard {
    let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));

    MetricsSinkGuard { previous }
}
