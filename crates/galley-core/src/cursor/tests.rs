use super::*;
use crate::{
    CREATED_AT, ID_FIELD,
    query::{ConstraintSet, OrderClause},
    value::{Timestamp, Value},
};
use std::cmp::Ordering;

fn row(id: &str, created: i64) -> Document {
    Document::new(id).with(CREATED_AT, Timestamp::from_seconds(created))
}

#[test]
fn boundary_captures_sort_key_values_and_id() {
    let ordering = ConstraintSet::new().effective_ordering();
    let boundary = CursorBoundary::from_row(&row("r1", 10), &ordering);

    assert_eq!(
        boundary.slots,
        vec![
            CursorBoundarySlot::Present(Value::Timestamp(Timestamp::from_seconds(10))),
            CursorBoundarySlot::Present(Value::Text("r1".to_string())),
        ]
    );
}

#[test]
fn descending_scan_places_newer_rows_first() {
    let ordering = ConstraintSet::new().effective_ordering();
    let boundary = CursorBoundary::from_row(&row("mid", 10), &ordering);

    assert_eq!(
        compare_row_to_boundary(&row("new", 20), &boundary, &ordering),
        Ordering::Less
    );
    assert_eq!(
        compare_row_to_boundary(&row("old", 5), &boundary, &ordering),
        Ordering::Greater
    );
    assert_eq!(
        compare_row_to_boundary(&row("mid", 10), &boundary, &ordering),
        Ordering::Equal
    );
}

#[test]
fn id_tiebreak_separates_equal_timestamps() {
    let ordering = vec![OrderClause::asc(CREATED_AT), OrderClause::asc(ID_FIELD)];
    let boundary = CursorBoundary::from_row(&row("b", 10), &ordering);

    assert_eq!(
        compare_row_to_boundary(&row("a", 10), &boundary, &ordering),
        Ordering::Less
    );
    assert_eq!(
        compare_row_to_boundary(&row("c", 10), &boundary, &ordering),
        Ordering::Greater
    );
}

#[test]
fn missing_slots_sort_first() {
    assert_eq!(
        compare_boundary_slots(
            &CursorBoundarySlot::Missing,
            &CursorBoundarySlot::Present(Value::Null)
        ),
        Ordering::Less
    );
}

#[test]
fn cursor_page_is_one_based() {
    assert_eq!(CursorState::new(2, row("x", 1)).page(), 3);
}
