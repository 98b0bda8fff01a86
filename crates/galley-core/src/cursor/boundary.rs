use crate::{
    document::{FieldPresence, Row},
    query::OrderClause,
    value::canonical_cmp,
};
use std::cmp::Ordering;

///
/// CursorBoundarySlot
/// Slot value used for deterministic cursor boundaries.
///

#[derive(Clone, Debug, PartialEq)]
pub enum CursorBoundarySlot {
    Missing,
    Present(crate::value::Value),
}

///
/// CursorBoundary
/// Ordered boundary tuple: one slot per effective order clause.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CursorBoundary {
    pub slots: Vec<CursorBoundarySlot>,
}

impl CursorBoundary {
    /// Capture the sort-key values of `row` under `ordering`.
    ///
    /// The boundary holds values, not a reference to the stored row, so a
    /// scan can still be positioned after the anchor row is deleted.
    #[must_use]
    pub fn from_row<R: Row + ?Sized>(row: &R, ordering: &[OrderClause]) -> Self {
        let slots = ordering
            .iter()
            .map(|clause| match row.field(&clause.field) {
                FieldPresence::Present(value) => CursorBoundarySlot::Present(value),
                FieldPresence::Missing => CursorBoundarySlot::Missing,
            })
            .collect();

        Self { slots }
    }
}

/// Compare two slots ascending; `Missing` sorts before every present value.
#[must_use]
pub fn compare_boundary_slots(left: &CursorBoundarySlot, right: &CursorBoundarySlot) -> Ordering {
    match (left, right) {
        (CursorBoundarySlot::Missing, CursorBoundarySlot::Missing) => Ordering::Equal,
        (CursorBoundarySlot::Missing, CursorBoundarySlot::Present(_)) => Ordering::Less,
        (CursorBoundarySlot::Present(_), CursorBoundarySlot::Missing) => Ordering::Greater,
        (CursorBoundarySlot::Present(l), CursorBoundarySlot::Present(r)) => canonical_cmp(l, r),
    }
}

/// Position of `row` relative to `boundary` in scan order under `ordering`.
///
/// `Less` means the row is scanned before the boundary, `Greater` after.
#[must_use]
pub fn compare_row_to_boundary<R: Row + ?Sized>(
    row: &R,
    boundary: &CursorBoundary,
    ordering: &[OrderClause],
) -> Ordering {
    let row_boundary = CursorBoundary::from_row(row, ordering);

    compare_boundaries(&row_boundary, boundary, ordering)
}

/// Compare two boundaries in scan order under `ordering`.
#[must_use]
pub fn compare_boundaries(
    left: &CursorBoundary,
    right: &CursorBoundary,
    ordering: &[OrderClause],
) -> Ordering {
    for ((l, r), clause) in left.slots.iter().zip(&right.slots).zip(ordering) {
        let cmp = clause.direction.apply(compare_boundary_slots(l, r));
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    Ordering::Equal
}
