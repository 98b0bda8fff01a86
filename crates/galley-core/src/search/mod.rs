//! Module: search
//! Responsibility: turn UI facets into a validated constraint set, count
//! it, and fetch the requested page.
//! Does not own: page arithmetic (see `page`) or row joins (see `project`).

mod facet;

#[cfg(test)]
mod tests;

pub use facet::{EqualityFacet, ForeignKeyFacet, PrefixFacet, RangeFacet, SearchFacets};

use crate::{
    IN_FILTER_LIMIT,
    cursor::CursorState,
    error::{Error, QueryError},
    page::{Page, PageFetcher, PagePlan, PageRequest},
    query::{FieldRef, FilterClause},
    store::{DocumentStore, RangeQuery},
};
use tracing::debug;

///
/// SearchPage
///

#[derive(Clone, Debug, PartialEq)]
pub struct SearchPage {
    pub page: Page,
    pub total_count: u64,
}

///
/// SearchOrchestrator
///
/// Every search is two round trips: a fresh count, then the page fetch.
///

#[derive(Clone, Copy, Debug)]
pub struct SearchOrchestrator<'a, S> {
    store: &'a S,
    in_limit: usize,
}

impl<'a, S: DocumentStore> SearchOrchestrator<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            in_limit: IN_FILTER_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_in_filter_limit(mut self, in_limit: usize) -> Self {
        self.in_limit = in_limit;
        self
    }

    pub async fn search(
        &self,
        collection: &str,
        facets: &SearchFacets,
        cursor: Option<&CursorState>,
        page: u32,
        page_size: u32,
    ) -> Result<SearchPage, Error> {
        let foreign_filter = match facets.active_foreign() {
            Some(foreign) => {
                let Some(filter) = self.resolve_foreign(foreign).await? else {
                    let request = PageRequest::new(page, page_size, 0);
                    let plan = PagePlan::resolve(&request, None)?;
                    debug!(
                        collection,
                        reference = %foreign.reference_collection,
                        "foreign search matched nothing"
                    );
                    return Ok(SearchPage {
                        page: Page::empty(None, plan),
                        total_count: 0,
                    });
                };
                Some(filter)
            }
            None => None,
        };

        let constraints = facets.constraints_with(foreign_filter);
        constraints.validate(self.in_limit)?;

        let total_count = self.store.count(collection, &constraints).await?;
        let request = PageRequest::new(page, page_size, total_count);
        let page = PageFetcher::new(self.store)
            .fetch_page(collection, cursor, &request, Some(&constraints))
            .await?;

        Ok(SearchPage { page, total_count })
    }

    /// Resolve a joined text search into an `in` filter over matched ids.
    ///
    /// Returns `None` when nothing matched. More matches than the `in`
    /// limit fail with `TooManyMatches` rather than truncating.
    pub async fn resolve_foreign(
        &self,
        foreign: &ForeignKeyFacet,
    ) -> Result<Option<FilterClause>, Error> {
        let constraints = foreign.reference_constraints();
        let matches = self
            .store
            .count(&foreign.reference_collection, &constraints)
            .await?;
        let matches = usize::try_from(matches).unwrap_or(usize::MAX);

        if matches == 0 {
            return Ok(None);
        }
        if matches > self.in_limit {
            return Err(
                QueryError::too_many_matches(&foreign.foreign_field, matches, self.in_limit).into(),
            );
        }

        let rows = self
            .store
            .fetch_range(&RangeQuery::new(
                &foreign.reference_collection,
                &constraints,
                self.in_limit,
            ))
            .await?;
        if rows.is_empty() {
            return Ok(None);
        }
        debug!(
            reference = %foreign.reference_collection,
            matched = rows.len(),
            "foreign search resolved"
        );

        let ids = rows.into_iter().map(|row| row.id.to_string());

        Ok(Some(FieldRef::new(&foreign.foreign_field).in_list(ids)))
    }
}
