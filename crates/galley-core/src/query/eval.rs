use crate::{
    document::{FieldPresence, Row},
    query::{
        constraint::ConstraintSet,
        predicate::{CompareOp, FilterClause},
    },
    value::{Value, canonical_cmp, canonical_rank},
};
use std::cmp::Ordering;

/// Evaluate every filter of `constraints` against one row.
///
/// Order clauses are ignored here; the store applies them separately.
/// A missing field never matches.
#[must_use]
pub fn matches<R: Row + ?Sized>(row: &R, constraints: &ConstraintSet) -> bool {
    constraints.filters().all(|filter| eval_filter(row, filter))
}

/// Evaluate one filter clause against one row.
#[must_use]
pub fn eval_filter<R: Row + ?Sized>(row: &R, filter: &FilterClause) -> bool {
    let FieldPresence::Present(actual) = row.field(&filter.field) else {
        return false;
    };

    match filter.op {
        CompareOp::Eq => actual.canonical_eq(&filter.value),
        CompareOp::Lt => compare_range(&actual, &filter.value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_range(&actual, &filter.value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_range(&actual, &filter.value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_range(&actual, &filter.value).is_some_and(Ordering::is_ge),
        CompareOp::In => match &filter.value {
            Value::List(candidates) => candidates.iter().any(|c| actual.canonical_eq(c)),
            _ => false,
        },
    }
}

// Range filters only match values of the bound's own type family, the way
// the remote store scopes range scans to one index segment.
fn compare_range(actual: &Value, bound: &Value) -> Option<Ordering> {
    if canonical_rank(actual) != canonical_rank(bound) {
        return None;
    }

    Some(canonical_cmp(actual, bound))
}
