use crate::{collections, model::Record};
use galley_core::value::Timestamp;
use serde::{Deserialize, Serialize};

///
/// User
/// Registered customer.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_agree: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for User {
    const COLLECTION: &'static str = collections::USERS;
    const REQUIRED: &'static [&'static str] = &["name", "email", "phone"];
}

///
/// Guest
/// Customer who ordered without registering.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for Guest {
    const COLLECTION: &'static str = collections::GUESTS;
    const REQUIRED: &'static [&'static str] = &["name", "phone"];
}
