use crate::{collections::ORDERS, screens::Screen};
use galley_core::{
    CREATED_AT,
    search::{PrefixFacet, RangeFacet, SearchFacets},
    value::Timestamp,
};

///
/// PaymentsScreen
///
/// Orders as payments: order-date window, edited-only toggle, and an
/// orderer-name search.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PaymentsScreen {
    pub order_start: Option<Timestamp>,
    pub order_end: Option<Timestamp>,
    pub only_modified: bool,
    pub orderer_name: String,
}

impl Screen for PaymentsScreen {
    fn collection(&self) -> &'static str {
        ORDERS
    }

    fn facets(&self) -> SearchFacets {
        SearchFacets::new()
            .with_range(RangeFacet::days(CREATED_AT, self.order_start, self.order_end))
            .with_only_modified(self.only_modified)
            .with_prefix(PrefixFacet::new("ordererName", self.orderer_name.as_str()))
    }
}
