use crate::{config::GalleyConfig, screens::Screen};
use galley_core::{
    cursor::CursorState,
    document::{DocId, Document},
    error::Error,
    page::PageRequest,
    project::{Join, LookupCache, Projector},
    search::{SearchFacets, SearchOrchestrator, SearchPage},
    sequence::{RequestSequencer, Ticket},
    store::DocumentStore,
};
use tracing::{debug, error};

///
/// ScreenSession
///
/// Caller-local state of one table screen: its facets, the cursor, the
/// current page and total, and the rows on display.
///
/// Changing any facet resets the cursor and returns to page 1. Page changes
/// reuse the cursor. Every fetch is ticketed so a slow response can never
/// overwrite the result of a newer request.
///

#[derive(Debug)]
pub struct ScreenSession<Sc> {
    screen: Sc,
    page_size: u32,
    in_limit: usize,
    page: u32,
    total_count: u64,
    cursor: Option<CursorState>,
    rows: Vec<Document>,
    sequencer: RequestSequencer,
    cache: LookupCache,
}

impl<Sc: Screen> ScreenSession<Sc> {
    #[must_use]
    pub fn new(screen: Sc, config: &GalleyConfig) -> Self {
        Self {
            screen,
            page_size: config.page_size,
            in_limit: config.in_filter_limit,
            page: 1,
            total_count: 0,
            cursor: None,
            rows: Vec::new(),
            sequencer: RequestSequencer::new(),
            cache: LookupCache::new(),
        }
    }

    #[must_use]
    pub const fn screen(&self) -> &Sc {
        &self.screen
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub fn last_page(&self) -> u32 {
        PageRequest::new(1, self.page_size, self.total_count).last_page()
    }

    #[must_use]
    pub fn rows(&self) -> &[Document] {
        &self.rows
    }

    #[must_use]
    pub const fn cursor(&self) -> Option<&CursorState> {
        self.cursor.as_ref()
    }

    /// Edit the screen's facets. Resets paging and supersedes any request
    /// still in flight.
    pub fn update(&mut self, edit: impl FnOnce(&mut Sc)) {
        edit(&mut self.screen);
        self.cursor = None;
        self.page = 1;
        self.sequencer.begin();
        debug!(collection = self.screen.collection(), "facets changed, paging reset");
    }

    /// Forget a cached join target after writing it.
    pub fn invalidate_lookup(&mut self, collection: &str, id: &DocId) {
        self.cache.invalidate(collection, id);
    }

    /// Snapshot everything needed to fetch `page`, under a new ticket.
    #[must_use]
    pub fn begin(&self, page: u32) -> PendingFetch {
        PendingFetch {
            ticket: self.sequencer.begin(),
            collection: self.screen.collection(),
            facets: self.screen.facets(),
            joins: self.screen.joins(),
            cursor: self.cursor.clone(),
            page,
            page_size: self.page_size,
            in_limit: self.in_limit,
        }
    }

    /// Apply a finished fetch.
    ///
    /// Returns `Ok(false)` when the fetch was superseded and discarded; its
    /// rows or error are dropped. Failures of the current request are
    /// logged and returned for the caller to show.
    pub fn apply(&mut self, fetched: Fetched) -> Result<bool, Error> {
        let Some(outcome) = self.sequencer.accept(fetched.ticket, fetched.outcome) else {
            return Ok(false);
        };

        match outcome {
            Ok(result) => {
                self.total_count = result.total_count;
                self.cursor = result.page.cursor;
                self.rows = result.page.rows;
                self.page = fetched.page;

                Ok(true)
            }
            Err(err) => {
                error!(
                    collection = self.screen.collection(),
                    origin = %err.origin(),
                    error = %err,
                    "screen fetch failed"
                );

                Err(err)
            }
        }
    }

    /// Fetch and apply `page` with the session's lookup cache.
    pub async fn load<S: DocumentStore>(&mut self, store: &S, page: u32) -> Result<(), Error> {
        let pending = self.begin(page);
        let fetched = pending.run(store, Some(&mut self.cache)).await;
        self.apply(fetched)?;

        Ok(())
    }

    /// Reload the current page.
    pub async fn refresh<S: DocumentStore>(&mut self, store: &S) -> Result<(), Error> {
        self.load(store, self.page).await
    }
}

///
/// PendingFetch
///
/// An issued but unfinished fetch. Owns its inputs so several can be in
/// flight at once.
///

#[derive(Clone, Debug)]
pub struct PendingFetch {
    ticket: Ticket,
    collection: &'static str,
    facets: SearchFacets,
    joins: Vec<Join>,
    cursor: Option<CursorState>,
    page: u32,
    page_size: u32,
    in_limit: usize,
}

impl PendingFetch {
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Count, fetch, and project one page.
    pub async fn run<S: DocumentStore>(self, store: &S, cache: Option<&mut LookupCache>) -> Fetched {
        let outcome = self.fetch(store, cache).await;

        Fetched {
            ticket: self.ticket,
            page: self.page,
            outcome,
        }
    }

    async fn fetch<S: DocumentStore>(
        &self,
        store: &S,
        cache: Option<&mut LookupCache>,
    ) -> Result<SearchPage, Error> {
        let mut result = SearchOrchestrator::new(store)
            .with_in_filter_limit(self.in_limit)
            .search(
                self.collection,
                &self.facets,
                self.cursor.as_ref(),
                self.page,
                self.page_size,
            )
            .await?;

        if !self.joins.is_empty() {
            let rows = std::mem::take(&mut result.page.rows);
            result.page.rows = Projector::new(store).project(rows, &self.joins, cache).await?;
        }

        Ok(result)
    }
}

///
/// Fetched
///

#[derive(Debug)]
pub struct Fetched {
    ticket: Ticket,
    page: u32,
    outcome: Result<SearchPage, Error>,
}

impl Fetched {
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }
}
