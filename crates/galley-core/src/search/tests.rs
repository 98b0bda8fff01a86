use super::*;
use crate::{
    CREATED_AT, UPDATED_AT,
    document::Document,
    error::QueryError,
    query::{CompareOp, Constraint, ConstraintSet, OrderClause},
    store::MemoryStore,
    test_support::ids,
    value::{Timestamp, Value},
};

fn clause_shape(set: &ConstraintSet) -> Vec<String> {
    set.clauses()
        .iter()
        .map(|clause| match clause {
            Constraint::Filter(f) => format!("{} {}", f.field, f.op.symbol()),
            Constraint::Order(o) => format!("order {} {:?}", o.field, o.direction),
        })
        .collect()
}

fn menu(id: &str, name: &str, category: &str, created: i64) -> Document {
    Document::new(id)
        .with("name", name)
        .with("categoryId", category)
        .with(CREATED_AT, Timestamp::from_seconds(created))
}

fn menus() -> MemoryStore {
    MemoryStore::new().with_documents(
        "menus",
        [
            menu("m1", "Kimchi stew", "soup", 10),
            menu("m2", "Kimbap", "rice", 20),
            menu("m3", "Bibimbap", "rice", 30),
            menu("m4", "Kimchi fried rice", "rice", 40),
            menu("m5", "Seaweed soup", "soup", 50),
        ],
    )
}

//
// Constraint assembly
//

#[test]
fn empty_facets_fall_back_to_default_sort() {
    let set = SearchFacets::new().constraints();

    assert_eq!(clause_shape(&set), vec!["order createdAt Desc"]);
    assert!(SearchFacets::new().is_empty());
}

#[test]
fn blank_prefix_is_ignored() {
    let facets = SearchFacets::new().with_prefix(PrefixFacet::new("name", "  "));

    assert!(facets.is_empty());
    assert_eq!(facets.constraints(), SearchFacets::new().constraints());
}

#[test]
fn category_and_date_range_put_range_sort_first() {
    let start = Timestamp::from_seconds(1_709_251_200);
    let end = Timestamp::from_seconds(1_709_596_800);
    let facets = SearchFacets::new()
        .with_category(EqualityFacet::new("categoryId", "rice"))
        .with_range(RangeFacet::days(CREATED_AT, Some(start), Some(end)))
        .with_prefix(PrefixFacet::new("ordererName", "Kim"));

    let set = facets.constraints();

    assert_eq!(
        clause_shape(&set),
        vec![
            "createdAt >=",
            "createdAt <=",
            "order createdAt Asc",
            "categoryId ==",
            "order categoryId Asc",
            "ordererName >=",
            "ordererName <=",
            "order ordererName Asc",
        ]
    );
    assert_eq!(set.validate(30), Ok(()));
}

#[test]
fn two_date_windows_sort_in_declaration_order() {
    let day = Timestamp::from_seconds(1_709_251_200);
    let facets = SearchFacets::new()
        .with_range(RangeFacet::days(CREATED_AT, Some(day), None))
        .with_range(RangeFacet::days("deliveryDate", None, Some(day)));

    let orders: Vec<OrderClause> = facets.constraints().order_clauses().cloned().collect();

    assert_eq!(
        orders,
        vec![OrderClause::asc(CREATED_AT), OrderClause::asc("deliveryDate")]
    );
}

#[test]
fn only_modified_filters_after_epoch() {
    let set = SearchFacets::new().with_only_modified(true).constraints();
    let filter = set.filters().next().expect("filter");

    assert_eq!(filter.field, UPDATED_AT);
    assert_eq!(filter.op, CompareOp::Gt);
    assert_eq!(filter.value, Value::Timestamp(Timestamp::UNIX_EPOCH));
    assert_eq!(set.validate(30), Ok(()));
}

#[test]
fn day_window_spans_whole_days() {
    let noon = Timestamp::from_seconds(1_709_640_000);
    let range = RangeFacet::days(CREATED_AT, Some(noon), Some(noon));

    assert_eq!(
        range.start,
        Some(Value::Timestamp(Timestamp::from_seconds(1_709_596_800)))
    );
    assert_eq!(
        range.end,
        Some(Value::Timestamp(Timestamp::new(1_709_683_199, 999_999_999)))
    );
}

//
// Orchestration
//

#[tokio::test]
async fn search_recounts_and_fetches() {
    let store = menus();
    let facets = SearchFacets::new().with_prefix(PrefixFacet::new("name", "Kim"));

    let result = SearchOrchestrator::new(&store)
        .search("menus", &facets, None, 1, 15)
        .await
        .expect("search");

    assert_eq!(result.total_count, 3);
    assert_eq!(ids(&result.page.rows), vec!["m2", "m4", "m1"]);
}

#[tokio::test]
async fn category_and_prefix_combine() {
    let store = menus();
    let facets = SearchFacets::new()
        .with_category(EqualityFacet::new("categoryId", "rice"))
        .with_prefix(PrefixFacet::new("name", "Kim"));

    let result = SearchOrchestrator::new(&store)
        .search("menus", &facets, None, 1, 15)
        .await
        .expect("search");

    assert_eq!(result.total_count, 2);
    assert_eq!(ids(&result.page.rows), vec!["m2", "m4"]);
}

fn order_items() -> MemoryStore {
    let items = [("i1", "m1"), ("i2", "m3"), ("i3", "m4"), ("i4", "m5")]
        .into_iter()
        .enumerate()
        .map(|(n, (id, menu_id))| {
            Document::new(id)
                .with("menuId", menu_id)
                .with(CREATED_AT, Timestamp::from_seconds(100 + i64::try_from(n).unwrap_or(0)))
        });

    menus().with_documents("orderItems", items)
}

#[tokio::test]
async fn foreign_search_injects_matched_ids() {
    let store = order_items();
    let facets = SearchFacets::new().with_foreign(ForeignKeyFacet::new(
        "menus", "name", "Kimchi", "menuId",
    ));

    let result = SearchOrchestrator::new(&store)
        .search("orderItems", &facets, None, 1, 15)
        .await
        .expect("search");

    assert_eq!(result.total_count, 2);
    assert_eq!(ids(&result.page.rows), vec!["i3", "i1"]);
}

#[tokio::test]
async fn foreign_search_without_matches_is_empty() {
    let store = order_items();
    let facets = SearchFacets::new().with_foreign(ForeignKeyFacet::new(
        "menus", "name", "Pizza", "menuId",
    ));

    let result = SearchOrchestrator::new(&store)
        .search("orderItems", &facets, None, 1, 15)
        .await
        .expect("search");

    assert_eq!(result.total_count, 0);
    assert!(result.page.rows.is_empty());
    assert!(result.page.cursor.is_none());
}

#[tokio::test]
async fn foreign_search_over_limit_fails_closed() {
    let store = order_items();
    let facets = SearchFacets::new().with_foreign(ForeignKeyFacet::new(
        "menus", "name", "Kim", "menuId",
    ));

    let err = SearchOrchestrator::new(&store)
        .with_in_filter_limit(2)
        .search("orderItems", &facets, None, 1, 15)
        .await
        .expect_err("too many matches");

    assert!(matches!(
        err,
        Error::Query(QueryError::TooManyMatches {
            matches: 3,
            limit: 2,
            ..
        })
    ));
    assert!(err.user_message().contains("narrow your search"));
}

#[tokio::test]
async fn store_failure_propagates_without_retry() {
    let store = menus();
    store
        .fail_next(crate::store::StoreError::unavailable("offline"))
        .await;

    let err = SearchOrchestrator::new(&store)
        .search("menus", &SearchFacets::new(), None, 1, 15)
        .await
        .expect_err("count fails");

    assert_eq!(err.origin(), crate::error::ErrorOrigin::Store);
    let retried = SearchOrchestrator::new(&store)
        .search("menus", &SearchFacets::new(), None, 1, 15)
        .await;
    assert!(retried.is_ok());
}
