use crate::{
    collections::{CATEGORY_ALL, MENUS},
    screens::{Screen, category_facet},
};
use galley_core::search::{PrefixFacet, SearchFacets};

///
/// MenusScreen
///
/// Category selector plus a name search.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenusScreen {
    pub category: String,
    pub name: String,
}

impl Default for MenusScreen {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            name: String::new(),
        }
    }
}

impl Screen for MenusScreen {
    fn collection(&self) -> &'static str {
        MENUS
    }

    fn facets(&self) -> SearchFacets {
        let mut facets =
            SearchFacets::new().with_prefix(PrefixFacet::new("name", self.name.as_str()));
        if let Some(category) = category_facet("categoryId", &self.category) {
            facets = facets.with_category(category);
        }

        facets
    }
}
