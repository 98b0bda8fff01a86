use super::*;
use crate::{
    error::QueryError,
    obs::{metrics_report, metrics_reset_all},
    query::FieldRef,
    store::MemoryStore,
    test_support::{expected_ids, ids, numbered_rows, seeded_store},
};
use proptest::prelude::*;

const COLLECTION: &str = "orders";

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
}

fn expected_page(total: usize, size: usize, page: usize) -> Vec<String> {
    let start = ((page - 1) * size).min(total);
    let end = (page * size).min(total);

    expected_ids(start..end)
}

async fn fetch(
    store: &MemoryStore,
    cursor: Option<&CursorState>,
    page: u32,
    size: u32,
    total: u64,
) -> Page {
    PageFetcher::new(store)
        .fetch_page(COLLECTION, cursor, &PageRequest::new(page, size, total), None)
        .await
        .expect("fetch page")
}

//
// Plan resolution
//

#[test]
fn last_page_len_handles_exact_multiple() {
    let exact = PageRequest::new(2, 15, 30);
    let short = PageRequest::new(3, 15, 37);

    assert_eq!(exact.last_page(), 2);
    assert_eq!(exact.last_page_len(), 15);
    assert_eq!(short.last_page(), 3);
    assert_eq!(short.last_page_len(), 7);
    assert_eq!(PageRequest::new(1, 15, 0).last_page(), 0);
}

#[test]
fn resolve_covers_every_case() {
    let cursor = CursorState::new(3, numbered_rows(1).remove(0));

    let first = PagePlan::resolve(&PageRequest::new(1, 15, 100), Some(&cursor));
    let last = PagePlan::resolve(&PageRequest::new(7, 15, 100), Some(&cursor));
    let forward = PagePlan::resolve(&PageRequest::new(6, 15, 100), Some(&cursor));
    let backward = PagePlan::resolve(&PageRequest::new(2, 15, 100), Some(&cursor));
    let same = PagePlan::resolve(&PageRequest::new(4, 15, 100), Some(&cursor));
    let deep_link = PagePlan::resolve(&PageRequest::new(5, 15, 100), None);

    assert_eq!(first, Ok(PagePlan::FirstPage));
    assert_eq!(last, Ok(PagePlan::LastPage { len: 10 }));
    assert_eq!(
        forward,
        Ok(PagePlan::RelativeJump {
            direction: JumpDirection::Forward,
            distance: 2,
        })
    );
    assert_eq!(
        backward,
        Ok(PagePlan::RelativeJump {
            direction: JumpDirection::Backward,
            distance: 2,
        })
    );
    assert_eq!(
        same,
        Ok(PagePlan::RelativeJump {
            direction: JumpDirection::Forward,
            distance: 0,
        })
    );
    assert_eq!(deep_link, Ok(PagePlan::OffsetScan { skip: 60 }));
}

#[test]
fn single_page_collection_always_takes_first_page_path() {
    let plan = PagePlan::resolve(&PageRequest::new(1, 15, 7), None);

    assert_eq!(plan, Ok(PagePlan::FirstPage));
}

#[test]
fn zero_page_and_zero_size_are_rejected() {
    assert_eq!(
        PagePlan::resolve(&PageRequest::new(0, 15, 10), None),
        Err(QueryError::InvalidPage {
            page: 0,
            page_size: 15,
        })
    );
    assert!(PagePlan::resolve(&PageRequest::new(1, 0, 10), None).is_err());
}

//
// Fetching
//

#[tokio::test]
async fn thirty_seven_rows_first_last_then_middle() {
    let store = seeded_store(COLLECTION, 37);

    let page1 = fetch(&store, None, 1, 15, 37).await;
    assert_eq!(ids(&page1.rows), expected_ids(0..15));

    let page3 = fetch(&store, page1.cursor.as_ref(), 3, 15, 37).await;
    assert_eq!(page3.plan, PagePlan::LastPage { len: 7 });
    assert_eq!(ids(&page3.rows), expected_ids(30..37));

    let page2 = fetch(&store, page1.cursor.as_ref(), 2, 15, 37).await;
    assert!(matches!(page2.plan, PagePlan::RelativeJump { .. }));
    assert_eq!(ids(&page2.rows), expected_ids(15..30));
    assert_eq!(page2.cursor.as_ref().map(CursorState::page), Some(2));
}

#[tokio::test]
async fn exact_multiple_last_page_is_full() {
    let store = seeded_store(COLLECTION, 30);

    let page2 = fetch(&store, None, 2, 15, 30).await;

    assert_eq!(page2.rows.len(), 15);
    assert_eq!(ids(&page2.rows), expected_ids(15..30));
}

#[tokio::test]
async fn backward_jump_from_last_page_lands_on_page_boundary() {
    let store = seeded_store(COLLECTION, 50);

    let last = fetch(&store, None, 4, 15, 50).await;
    let page2 = fetch(&store, last.cursor.as_ref(), 2, 15, 50).await;
    let page3 = fetch(&store, page2.cursor.as_ref(), 3, 15, 50).await;

    assert_eq!(ids(&last.rows), expected_ids(45..50));
    assert_eq!(ids(&page2.rows), expected_ids(15..30));
    assert_eq!(ids(&page3.rows), expected_ids(30..45));
}

#[tokio::test]
async fn deep_link_without_cursor_uses_offset_scan() {
    let store = seeded_store(COLLECTION, 100);

    let page5 = fetch(&store, None, 5, 15, 100).await;

    assert_eq!(page5.plan, PagePlan::OffsetScan { skip: 60 });
    assert_eq!(ids(&page5.rows), expected_ids(60..75));
}

#[tokio::test]
async fn deleted_anchor_degrades_gracefully() {
    let rows = numbered_rows(60);
    let store = MemoryStore::new().with_documents(COLLECTION, rows);

    let page1 = fetch(&store, None, 1, 15, 60).await;
    let page2 = fetch(&store, page1.cursor.as_ref(), 2, 15, 60).await;
    let anchor = page2.cursor.clone().expect("cursor");
    store
        .delete(COLLECTION, &anchor.anchor.id)
        .await
        .expect("delete anchor");

    let refetched = fetch(&store, Some(&anchor), 2, 15, 59).await;
    assert_eq!(ids(&refetched.rows), expected_ids(16..31));

    // Next page from the deleted anchor drifts by the one missing row.
    let page3 = fetch(&store, Some(&anchor), 3, 15, 59).await;
    assert_eq!(
        page3.plan,
        PagePlan::RelativeJump {
            direction: JumpDirection::Forward,
            distance: 1,
        }
    );
    assert_eq!(ids(&page3.rows), expected_ids(31..46));
    assert_eq!(page3.cursor.as_ref().map(CursorState::page), Some(3));
}

#[tokio::test]
async fn empty_result_keeps_previous_cursor() {
    let store = seeded_store(COLLECTION, 20);
    let page1 = fetch(&store, None, 1, 15, 20).await;

    // Beyond the last page: resolves relative to the cursor and finds nothing.
    let beyond = fetch(&store, page1.cursor.as_ref(), 5, 15, 20).await;

    assert!(beyond.is_empty());
    assert_eq!(beyond.cursor, page1.cursor);
}

#[tokio::test]
async fn custom_constraints_drive_the_scan() {
    let store = seeded_store(COLLECTION, 12);
    let by_name = ConstraintSet::new().order(FieldRef::new("name").asc());

    let page = PageFetcher::new(&store)
        .fetch_page(
            COLLECTION,
            None,
            &PageRequest::new(1, 3, 12),
            Some(&by_name),
        )
        .await
        .expect("fetch page");

    // "row 0" < "row 1" < "row 10" < "row 11" lexicographically.
    assert_eq!(ids(&page.rows), vec!["r000", "r001", "r010"]);
}

#[tokio::test]
async fn plans_are_counted() {
    metrics_reset_all();
    let store = seeded_store(COLLECTION, 37);

    let page1 = fetch(&store, None, 1, 15, 37).await;
    fetch(&store, page1.cursor.as_ref(), 2, 15, 37).await;
    fetch(&store, None, 3, 15, 37).await;

    let report = metrics_report();
    assert_eq!(report.plans.first_page, 1);
    assert_eq!(report.plans.forward_jump, 1);
    assert_eq!(report.plans.last_page, 1);
    assert_eq!(report.collections[COLLECTION].range_reads, 3);
}

//
// Properties
//

proptest! {
    #[test]
    fn last_page_has_remainder_or_full_length(total in 1usize..120, size in 1u32..20) {
        let store = seeded_store(COLLECTION, total);
        let request = PageRequest::new(1, size, total as u64);
        let last = request.last_page();

        let page = runtime().block_on(fetch(&store, None, last, size, total as u64));

        let expected = total - (last as usize - 1) * size as usize;
        prop_assert_eq!(page.rows.len(), expected);
        prop_assert_eq!(ids(&page.rows), expected_page(total, size as usize, last as usize));
    }

    #[test]
    fn forward_walk_concatenates_to_full_scan(total in 0usize..90, size in 1u32..16) {
        let store = seeded_store(COLLECTION, total);
        let last = PageRequest::new(1, size, total as u64).last_page().max(1);

        let collected = runtime().block_on(async {
            let mut cursor = None;
            let mut collected = Vec::new();
            for page in 1..=last {
                let result = fetch(&store, cursor.as_ref(), page, size, total as u64).await;
                collected.extend(ids(&result.rows));
                cursor = result.cursor;
            }
            collected
        });

        prop_assert_eq!(collected, expected_ids(0..total));
    }

    #[test]
    fn any_navigation_path_yields_the_same_pages(
        total in 1usize..80,
        size in 1u32..12,
        path in prop::collection::vec(1u32..12, 1..8),
    ) {
        let store = seeded_store(COLLECTION, total);
        let last = PageRequest::new(1, size, total as u64).last_page();

        runtime().block_on(async {
            let mut cursor = None;
            for step in path {
                let page = (step - 1) % last + 1;
                let result = fetch(&store, cursor.as_ref(), page, size, total as u64).await;
                assert_eq!(
                    ids(&result.rows),
                    expected_page(total, size as usize, page as usize),
                    "page {page} of {last}"
                );
                cursor = result.cursor;
            }
        });
    }
}
