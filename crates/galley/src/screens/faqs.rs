use crate::{
    collections::{CATEGORY_ALL, FAQS},
    screens::{Screen, category_facet},
};
use galley_core::search::{PrefixFacet, SearchFacets};

///
/// FaqsScreen
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaqsScreen {
    pub category: String,
    pub title: String,
}

impl Default for FaqsScreen {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            title: String::new(),
        }
    }
}

impl Screen for FaqsScreen {
    fn collection(&self) -> &'static str {
        FAQS
    }

    fn facets(&self) -> SearchFacets {
        let mut facets =
            SearchFacets::new().with_prefix(PrefixFacet::new("title", self.title.as_str()));
        if let Some(category) = category_facet("categoryId", &self.category) {
            facets = facets.with_category(category);
        }

        facets
    }
}
