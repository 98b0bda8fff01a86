use super::*;
use crate::{
    CREATED_AT,
    query::FieldRef,
    test_support::{expected_ids, ids, numbered_rows, seeded_store},
    value::Timestamp,
};

const COLLECTION: &str = "users";

#[tokio::test]
async fn fetch_range_orders_by_default_sort_and_limits() {
    let store = seeded_store(COLLECTION, 20);
    let constraints = ConstraintSet::new();

    let rows = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 5))
        .await
        .expect("fetch");

    assert_eq!(ids(&rows), expected_ids(0..5));
}

#[tokio::test]
async fn reversed_constraints_scan_oldest_first() {
    let store = seeded_store(COLLECTION, 10);
    let constraints = ConstraintSet::new().reversed();

    let rows = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 3))
        .await
        .expect("fetch");

    assert_eq!(ids(&rows), vec!["r009", "r008", "r007"]);
}

#[tokio::test]
async fn start_at_is_inclusive_and_start_after_is_exclusive() {
    let rows = numbered_rows(10);
    let store = MemoryStore::new().with_documents(COLLECTION, rows.clone());
    let constraints = ConstraintSet::new();

    let at = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 2).start_at(&rows[4]))
        .await
        .expect("start at");
    let after = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 2).start_after(&rows[4]))
        .await
        .expect("start after");

    assert_eq!(ids(&at), vec!["r004", "r005"]);
    assert_eq!(ids(&after), vec!["r005", "r006"]);
}

#[tokio::test]
async fn deleted_anchor_still_positions_the_scan() {
    let rows = numbered_rows(10);
    let store = MemoryStore::new().with_documents(COLLECTION, rows.clone());
    let constraints = ConstraintSet::new();

    store.delete(COLLECTION, &rows[4].id).await.expect("delete");
    let resumed = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 2).start_at(&rows[4]))
        .await
        .expect("fetch");

    assert_eq!(ids(&resumed), vec!["r005", "r006"]);
}

#[tokio::test]
async fn rows_missing_a_sort_field_are_excluded() {
    let store = seeded_store(COLLECTION, 3).with_documents(
        COLLECTION,
        [Document::new("undated").with("name", "no timestamp")],
    );
    let constraints = ConstraintSet::new();

    let total = store.count(COLLECTION, &constraints).await.expect("count");
    let rows = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 10))
        .await
        .expect("fetch");

    assert_eq!(total, 3);
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn count_applies_filters() {
    let store = MemoryStore::new().with_documents(
        COLLECTION,
        ["Kim", "Kimberly", "AKim", "Lee"].into_iter().enumerate().map(|(i, name)| {
            Document::new(format!("u{i}"))
                .with("name", name)
                .with(CREATED_AT, Timestamp::from_seconds(i64::try_from(i).unwrap_or(0)))
        }),
    );

    let total = store
        .count(COLLECTION, &FieldRef::new("name").prefix_search("Kim"))
        .await
        .expect("count");

    assert_eq!(total, 2);
}

#[tokio::test]
async fn index_rule_violation_is_rejected() {
    let store = seeded_store(COLLECTION, 3);
    let constraints = ConstraintSet::new().filter(FieldRef::new("name").gte("a"));

    let err = store
        .fetch_range(&RangeQuery::new(COLLECTION, &constraints, 3))
        .await
        .expect_err("inequality without order");

    assert!(matches!(err, StoreError::Rejected { .. }));
}

#[tokio::test]
async fn queued_fault_fails_exactly_one_operation() {
    let store = seeded_store(COLLECTION, 3);
    store
        .fail_next(StoreError::unavailable("connection reset"))
        .await;

    let first = store.count(COLLECTION, &ConstraintSet::new()).await;
    let second = store.count(COLLECTION, &ConstraintSet::new()).await;

    assert_eq!(first, Err(StoreError::unavailable("connection reset")));
    assert_eq!(second, Ok(3));
}

#[tokio::test]
async fn point_operations_follow_store_contract() {
    let store = MemoryStore::new();
    let doc = Document::new("m1").with("name", "Bibimbap");

    store.insert("menus", doc.clone()).await.expect("insert");
    let duplicate = store.insert("menus", doc.clone()).await;
    assert!(matches!(duplicate, Err(StoreError::AlreadyExists { .. })));

    store
        .update("menus", Document::new("m1").with("price", 9000))
        .await
        .expect("update");
    let stored = store
        .get("menus", &DocId::new("m1"))
        .await
        .expect("get")
        .expect("present");
    assert_eq!(stored.text("name"), Some("Bibimbap"));
    assert_eq!(stored.get("price").and_then(crate::value::Value::as_int), Some(9000));

    let missing = store.update("menus", Document::new("m2")).await;
    assert!(missing.as_ref().is_err_and(StoreError::is_not_found));

    store.delete("menus", &DocId::new("m1")).await.expect("delete");
    store.delete("menus", &DocId::new("m1")).await.expect("idempotent delete");
    assert!(!store.contains("menus", &DocId::new("m1")).await);
}

#[tokio::test]
async fn objects_round_trip_by_path() {
    let store = MemoryStore::new();

    store
        .upload("menus/m1_0", vec![1, 2, 3])
        .await
        .expect("upload");
    assert_eq!(store.download("menus/m1_0").await, Ok(vec![1, 2, 3]));

    store.delete_object("menus/m1_0").await.expect("delete");
    assert!(
        store
            .delete_object("menus/m1_0")
            .await
            .is_err_and(|err| err.is_not_found())
    );
    assert!(store.object_paths().await.is_empty());
}
