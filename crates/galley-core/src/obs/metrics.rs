use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for store traffic and page planning.
/// Thread-local: each UI/runtime thread observes its own traffic.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventState {
    pub ops: EventOps,
    pub plans: PlanCounters,
    pub collections: BTreeMap<String, CollectionCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventOps {
    // Remote reads
    pub count_calls: u64,
    pub range_reads: u64,
    pub rows_read: u64,
    pub point_reads: u64,

    // Remote writes
    pub inserts: u64,
    pub updates: u64,
    pub deletes: u64,

    // Request hygiene
    pub stale_responses_discarded: u64,
    pub orphaned_objects: u64,
    pub lookup_cache_hits: u64,
}

///
/// PlanCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlanCounters {
    pub first_page: u64,
    pub last_page: u64,
    pub forward_jump: u64,
    pub backward_jump: u64,
    pub offset_scan: u64,
}

///
/// CollectionCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CollectionCounters {
    pub count_calls: u64,
    pub range_reads: u64,
    pub rows_read: u64,
    pub point_reads: u64,
    pub writes: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = EventState::default());
}

/// Per-collection counters, created on first touch.
pub(crate) fn collection_entry<'a>(
    state: &'a mut EventState,
    collection: &str,
) -> &'a mut CollectionCounters {
    state
        .collections
        .entry(collection.to_string())
        .or_default()
}
