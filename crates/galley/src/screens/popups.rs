use crate::{collections::POPUPS, screens::Screen};
use galley_core::search::SearchFacets;

/// Popups page by creation date only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PopupsScreen;

impl Screen for PopupsScreen {
    fn collection(&self) -> &'static str {
        POPUPS
    }

    fn facets(&self) -> SearchFacets {
        SearchFacets::new()
    }
}
