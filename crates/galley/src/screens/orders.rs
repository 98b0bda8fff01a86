use crate::{
    collections::{CATEGORY_ALL, MENUS, ORDER_ITEMS, ORDERS},
    screens::{Screen, category_facet},
};
use galley_core::{
    CREATED_AT,
    project::Join,
    search::{ForeignKeyFacet, PrefixFacet, RangeFacet, SearchFacets},
    value::Timestamp,
};

const DELIVERY_DATE: &str = "deliveryDate";

///
/// OrderSearchField
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OrderSearchField {
    /// Prefix over the orderer name copied onto each line.
    #[default]
    OrdererName,
    /// Prefix over menu names, resolved to the lines ordering them.
    MenuName,
}

///
/// OrdersScreen
///
/// Lists order lines. Each line is joined with its parent order for the
/// status columns.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrdersScreen {
    pub category: String,
    pub search_field: OrderSearchField,
    pub search_text: String,
    pub order_start: Option<Timestamp>,
    pub order_end: Option<Timestamp>,
    pub delivery_start: Option<Timestamp>,
    pub delivery_end: Option<Timestamp>,
    pub only_modified: bool,
}

impl Default for OrdersScreen {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            search_field: OrderSearchField::default(),
            search_text: String::new(),
            order_start: None,
            order_end: None,
            delivery_start: None,
            delivery_end: None,
            only_modified: false,
        }
    }
}

impl Screen for OrdersScreen {
    fn collection(&self) -> &'static str {
        ORDER_ITEMS
    }

    fn facets(&self) -> SearchFacets {
        let mut facets = SearchFacets::new()
            .with_range(RangeFacet::days(CREATED_AT, self.order_start, self.order_end))
            .with_range(RangeFacet::days(
                DELIVERY_DATE,
                self.delivery_start,
                self.delivery_end,
            ))
            .with_only_modified(self.only_modified);

        if let Some(category) = category_facet("categoryId", &self.category) {
            facets = facets.with_category(category);
        }

        match self.search_field {
            OrderSearchField::OrdererName => {
                facets.with_prefix(PrefixFacet::new("ordererName", self.search_text.as_str()))
            }
            OrderSearchField::MenuName => facets.with_foreign(ForeignKeyFacet::new(
                MENUS,
                "name",
                self.search_text.as_str(),
                "menuId",
            )),
        }
    }

    fn joins(&self) -> Vec<Join> {
        vec![
            Join::new(ORDERS, "orderId")
                .keep("orderStatus")
                .keep("paymentMethod")
                .keep("stickerFile")
                .keep("stickerPhrase")
                .keep("heating"),
        ]
    }
}
