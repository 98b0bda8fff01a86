//! Module: page
//! Responsibility: serve "jump to page N" on top of a store that only
//! supports anchored, limited range scans.
//! Does not own: counting (callers pass `total_count`) or facet assembly.
//! Boundary: the store is borrowed per fetcher; cursor state stays with the caller.

mod plan;

#[cfg(test)]
mod tests;

pub use plan::{JumpDirection, PagePlan, PageRequest};

use crate::{
    cursor::CursorState,
    document::Document,
    error::Error,
    obs::{self, MetricsEvent},
    query::ConstraintSet,
    store::{DocumentStore, RangeQuery},
};
use tracing::debug;

///
/// Page
///
/// Rows in display order plus the cursor to pass into the next fetch.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub rows: Vec<Document>,
    pub cursor: Option<CursorState>,
    pub plan: PagePlan,
}

impl Page {
    /// Empty result that keeps the caller's cursor.
    #[must_use]
    pub fn empty(cursor: Option<CursorState>, plan: PagePlan) -> Self {
        Self {
            rows: Vec::new(),
            cursor,
            plan,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// PageFetcher
///

#[derive(Clone, Copy, Debug)]
pub struct PageFetcher<'a, S> {
    store: &'a S,
}

impl<'a, S: DocumentStore> PageFetcher<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fetch one page of `collection`.
    ///
    /// `constraints` defaults to the `createdAt desc` scan. The returned
    /// cursor anchors on the first displayed row; when nothing came back the
    /// caller's cursor is handed back unchanged.
    pub async fn fetch_page(
        &self,
        collection: &str,
        cursor: Option<&CursorState>,
        request: &PageRequest,
        constraints: Option<&ConstraintSet>,
    ) -> Result<Page, Error> {
        let plan = PagePlan::resolve(request, cursor)?;
        debug!(
            collection,
            page = request.page,
            page_size = request.page_size,
            total = request.total_count,
            ?plan,
            "page plan resolved"
        );
        obs::record(MetricsEvent::Plan { kind: plan.kind() });

        let default_constraints = ConstraintSet::new();
        let forward = constraints.unwrap_or(&default_constraints);
        let backward = forward.reversed();
        let size = request.page_size as usize;

        let (rows, anchor) = match plan {
            PagePlan::FirstPage => {
                let rows = self
                    .store
                    .fetch_range(&RangeQuery::new(collection, forward, size))
                    .await?;
                let anchor = rows.first().cloned();
                (rows, anchor)
            }

            PagePlan::LastPage { len } => {
                let raw = self
                    .store
                    .fetch_range(&RangeQuery::new(collection, &backward, len as usize))
                    .await?;
                let anchor = raw.last().cloned();
                (raw.into_iter().rev().collect(), anchor)
            }

            PagePlan::RelativeJump {
                direction: JumpDirection::Forward,
                distance,
            } => {
                let from = cursor.map(|c| &c.anchor);
                let Some(from) = from else {
                    return Ok(Page::empty(None, plan));
                };
                let distance = distance as usize;
                let raw = self
                    .store
                    .fetch_range(
                        &RangeQuery::new(collection, forward, (distance + 1) * size).start_at(from),
                    )
                    .await?;
                let rows: Vec<Document> =
                    raw.into_iter().skip(distance * size).take(size).collect();
                let anchor = rows.first().cloned();
                (rows, anchor)
            }

            PagePlan::RelativeJump {
                direction: JumpDirection::Backward,
                distance,
            } => {
                let from = cursor.map(|c| &c.anchor);
                let Some(from) = from else {
                    return Ok(Page::empty(None, plan));
                };
                let raw = self
                    .store
                    .fetch_range(
                        &RangeQuery::new(collection, &backward, distance as usize * size)
                            .start_after(from),
                    )
                    .await?;
                let anchor = raw.last().cloned();
                let keep_from = raw.len().saturating_sub(size);
                let rows = raw.into_iter().skip(keep_from).rev().collect();
                (rows, anchor)
            }

            PagePlan::OffsetScan { skip } => {
                let skip = usize::try_from(skip).unwrap_or(usize::MAX);
                let raw = self
                    .store
                    .fetch_range(&RangeQuery::new(
                        collection,
                        forward,
                        skip.saturating_add(size),
                    ))
                    .await?;
                let rows: Vec<Document> = raw.into_iter().skip(skip).take(size).collect();
                let anchor = rows.first().cloned();
                (rows, anchor)
            }
        };

        let cursor = match anchor {
            Some(anchor) => Some(CursorState::new(request.page_index(), anchor)),
            None => cursor.cloned(),
        };

        Ok(Page { rows, cursor, plan })
    }
}
