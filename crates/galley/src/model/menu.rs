use crate::{collections, model::Record};
use galley_core::{document::DocId, value::Timestamp};
use serde::{Deserialize, Serialize};

///
/// Menu
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub name: String,
    pub category_id: String,
    pub description: String,
    pub price: i64,
    /// Stored object paths, `menus/<id>_<n>`.
    #[serde(default)]
    pub image_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for Menu {
    const COLLECTION: &'static str = collections::MENUS;
    const REQUIRED: &'static [&'static str] = &["name", "categoryId", "description", "price"];

    fn attachments(&self, _id: &DocId) -> Vec<String> {
        self.image_paths.clone()
    }
}

///
/// MenuCategory
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MenuCategory {
    pub name: String,
}

impl Record for MenuCategory {
    const COLLECTION: &'static str = collections::MENU_CATEGORIES;
    const REQUIRED: &'static [&'static str] = &["name"];
}
