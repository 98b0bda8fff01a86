//! Object-store paths for record attachments.
//!
//! Paths are keyed by the owning document id plus a purpose suffix, so a
//! record's files can be found and removed without listing the store.

use crate::collections;
use galley_core::document::DocId;

/// `menus/<id>_<n>`: the `n`th menu photo (zero-based).
#[must_use]
pub fn menu_image(id: &DocId, index: usize) -> String {
    format!("{}/{id}_{index}", collections::MENUS)
}

/// `reviews/<id>_<n>`: the `n`th review photo (zero-based).
#[must_use]
pub fn review_image(id: &DocId, index: usize) -> String {
    format!("{}/{id}_{index}", collections::REVIEWS)
}

/// `popups/<id>`
#[must_use]
pub fn popup_image(id: &DocId) -> String {
    format!("{}/{id}", collections::POPUPS)
}

/// `FAQs/<id>`
#[must_use]
pub fn faq_image(id: &DocId) -> String {
    format!("{}/{id}", collections::FAQS)
}

/// `stickers/<id>`: customer-supplied sticker artwork for an order.
#[must_use]
pub fn sticker(id: &DocId) -> String {
    format!("stickers/{id}")
}

/// Paths for `count` numbered images under `collection`.
#[must_use]
pub fn numbered(collection: &str, id: &DocId, count: usize) -> Vec<String> {
    (0..count).map(|n| format!("{collection}/{id}_{n}")).collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_collection_layout() {
        let id = DocId::new("abc");

        assert_eq!(menu_image(&id, 0), "menus/abc_0");
        assert_eq!(review_image(&id, 2), "reviews/abc_2");
        assert_eq!(popup_image(&id), "popups/abc");
        assert_eq!(faq_image(&id), "FAQs/abc");
        assert_eq!(sticker(&id), "stickers/abc");
        assert_eq!(
            numbered(collections::MENUS, &id, 2),
            vec!["menus/abc_0", "menus/abc_1"]
        );
    }
}
