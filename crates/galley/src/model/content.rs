use crate::{attachment, collections, model::Record};
use galley_core::{document::DocId, value::Timestamp};
use serde::{Deserialize, Serialize};

///
/// Popup
/// Home-screen banner shown between `start_date` and `end_date`.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for Popup {
    const COLLECTION: &'static str = collections::POPUPS;
    const REQUIRED: &'static [&'static str] = &["title", "startDate", "endDate"];

    fn attachments(&self, id: &DocId) -> Vec<String> {
        self.image_path
            .as_ref()
            .map(|_| attachment::popup_image(id))
            .into_iter()
            .collect()
    }
}

///
/// Faq
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub title: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for Faq {
    const COLLECTION: &'static str = collections::FAQS;
    const REQUIRED: &'static [&'static str] = &["title", "categoryId"];

    fn attachments(&self, id: &DocId) -> Vec<String> {
        self.image_path
            .as_ref()
            .map(|_| attachment::faq_image(id))
            .into_iter()
            .collect()
    }
}

///
/// FaqCategory
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FaqCategory {
    pub name: String,
}

impl Record for FaqCategory {
    const COLLECTION: &'static str = collections::FAQ_CATEGORIES;
    const REQUIRED: &'static [&'static str] = &["name"];
}

///
/// Review
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub email: String,
    pub comment: String,
    /// Stored object paths, `reviews/<id>_<n>`.
    #[serde(default)]
    pub image_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for Review {
    const COLLECTION: &'static str = collections::REVIEWS;
    const REQUIRED: &'static [&'static str] = &["email", "comment"];

    fn attachments(&self, _id: &DocId) -> Vec<String> {
        self.image_paths.clone()
    }
}
