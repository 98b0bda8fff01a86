use crate::{collections::REVIEWS, screens::Screen};
use galley_core::search::{PrefixFacet, SearchFacets};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReviewsScreen {
    pub email: String,
}

impl Screen for ReviewsScreen {
    fn collection(&self) -> &'static str {
        REVIEWS
    }

    fn facets(&self) -> SearchFacets {
        SearchFacets::new().with_prefix(PrefixFacet::new("email", self.email.as_str()))
    }
}
