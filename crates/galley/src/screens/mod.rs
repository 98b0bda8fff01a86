//! Module: screens
//! Responsibility: the back-office table screens, each one a set of facet
//! inputs mapped onto a collection search, and the session that pages it.
//! Does not own: constraint ordering or pagination arithmetic; those live
//! in `galley_core::search` and `galley_core::page`.

mod faqs;
mod menus;
mod orders;
mod payments;
mod popups;
mod reviews;
mod session;
mod users;


pub use faqs::FaqsScreen;
pub use menus::MenusScreen;
pub use orders::{OrderSearchField, OrdersScreen};
pub use payments::PaymentsScreen;
pub use popups::PopupsScreen;
pub use reviews::ReviewsScreen;
pub use session::{Fetched, PendingFetch, ScreenSession};
pub use users::{Audience, UserSearchField, UsersScreen};

use crate::collections::CATEGORY_ALL;
use galley_core::{
    project::Join,
    search::{EqualityFacet, SearchFacets},
};

///
/// Screen
///
/// One table screen: the collection it lists and the facets its current
/// inputs select.
///

pub trait Screen {
    fn collection(&self) -> &'static str;

    fn facets(&self) -> SearchFacets;

    /// Related documents merged into each displayed row.
    fn joins(&self) -> Vec<Join> {
        Vec::new()
    }
}

/// Category selector facet; the "all" entry and a blank selection disable it.
pub(crate) fn category_facet(field: &str, selected: &str) -> Option<EqualityFacet> {
    let selected = selected.trim();
    if selected.is_empty() || selected == CATEGORY_ALL {
        return None;
    }

    Some(EqualityFacet::new(field, selected))
}
