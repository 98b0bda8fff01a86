//! Remote collection names.

pub const USERS: &str = "users";
pub const GUESTS: &str = "guests";
pub const MENUS: &str = "menus";
pub const MENU_CATEGORIES: &str = "menuCategories";
pub const ORDERS: &str = "orders";
pub const ORDER_ITEMS: &str = "orderItems";
pub const POPUPS: &str = "popups";
pub const FAQS: &str = "FAQs";
pub const FAQ_CATEGORIES: &str = "FAQCategories";
pub const REVIEWS: &str = "reviews";

pub const ALL: [&str; 10] = [
    USERS,
    GUESTS,
    MENUS,
    MENU_CATEGORIES,
    ORDERS,
    ORDER_ITEMS,
    POPUPS,
    FAQS,
    FAQ_CATEGORIES,
    REVIEWS,
];

/// Category selector value meaning "no category filter".
pub const CATEGORY_ALL: &str = "all";
