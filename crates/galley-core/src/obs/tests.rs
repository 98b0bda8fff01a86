use super::*;
use std::{cell::RefCell, rc::Rc};

#[derive(Default)]
struct CaptureSink {
    events: RefCell<Vec<String>>,
}

impl MetricsSink for CaptureSink {
    fn record(&self, event: MetricsEvent<'_>) {
        self.events.borrow_mut().push(format!("{event:?}"));
    }
}

#[test]
fn global_sink_aggregates_per_collection() {
    metrics_reset_all();

    record(MetricsEvent::Count { collection: "users" });
    record(MetricsEvent::RangeRead {
        collection: "users",
        rows: 15,
    });
    record(MetricsEvent::RangeRead {
        collection: "menus",
        rows: 3,
    });

    let report = metrics_report();
    assert_eq!(report.ops.count_calls, 1);
    assert_eq!(report.ops.range_reads, 2);
    assert_eq!(report.ops.rows_read, 18);
    assert_eq!(report.collections["users"].rows_read, 15);
    assert_eq!(report.collections["menus"].range_reads, 1);
}

#[test]
fn override_captures_events_until_guard_drops() {
    metrics_reset_all();
    let sink = Rc::new(CaptureSink::default());

    {
        let _guard = install_metrics_sink(sink.clone());
        record(MetricsEvent::Plan {
            kind: PlanKind::LastPage,
        });
    }
    record(MetricsEvent::Plan {
        kind: PlanKind::LastPage,
    });

    assert_eq!(sink.events.borrow().len(), 1);
    assert_eq!(metrics_report().plans.last_page, 1);
}
