use crate::{attachment, collections, model::Record};
use derive_more::Display;
use galley_core::{document::DocId, value::Timestamp};
use serde::{Deserialize, Serialize};

///
/// OrderStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[display("Paid")]
    Paid,
    #[default]
    #[display("Awaiting confirmation")]
    Ready,
    #[display("Payment failed")]
    Failed,
    #[display("Cancelled")]
    Cancelled,
    #[display("Payment expired")]
    Expired,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Paid,
        Self::Ready,
        Self::Failed,
        Self::Cancelled,
        Self::Expired,
    ];

    /// Stored wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

///
/// PaymentMethod
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    #[display("On-site payment")]
    Offline,
    #[display("Virtual account")]
    Vbank,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Vbank => "vbank",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        [Self::Offline, Self::Vbank]
            .into_iter()
            .find(|method| method.as_str() == raw)
    }
}

///
/// OrdererType
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdererType {
    #[display("user")]
    User,
    #[default]
    #[display("guest")]
    Guest,
}

impl OrdererType {
    /// Collection holding the orderer's profile.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::User => collections::USERS,
            Self::Guest => collections::GUESTS,
        }
    }
}

///
/// Order
///
/// One checkout. Payments are listed from this collection.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub orderer_id: String,
    pub orderer_type: OrdererType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderer_name: Option<String>,
    pub order_status: OrderStatus,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub sticker_file: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<bool>,

    // Virtual-account details, set for `vbank` payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vbank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vbank_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vbank_holder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vbank_exp_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for Order {
    const COLLECTION: &'static str = collections::ORDERS;
    const REQUIRED: &'static [&'static str] =
        &["ordererId", "ordererType", "orderStatus", "paymentMethod"];

    fn attachments(&self, id: &DocId) -> Vec<String> {
        if self.sticker_file {
            vec![attachment::sticker(id)]
        } else {
            Vec::new()
        }
    }
}

///
/// OrderItem
///
/// One menu line of an order; denormalizes the orderer and menu names so
/// the orders screen can prefix-search them directly.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_id: String,
    pub menu_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub orderer_name: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub menu_name: String,
    #[serde(default)]
    pub menu_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<Timestamp>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Record for OrderItem {
    const COLLECTION: &'static str = collections::ORDER_ITEMS;
    const REQUIRED: &'static [&'static str] = &["orderId", "menuId", "quantity"];
}
