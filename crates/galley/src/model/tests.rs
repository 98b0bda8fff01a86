use super::*;
use galley_core::value::{Timestamp, Value};

fn menu() -> Menu {
    Menu {
        name: "Bulgogi bowl".to_string(),
        category_id: "rice".to_string(),
        description: "Soy-marinated beef over rice".to_string(),
        price: 9500,
        image_paths: vec!["menus/m1_0".to_string()],
        created_at: Some(Timestamp::from_seconds(1_709_596_800)),
        updated_at: None,
    }
}

#[test]
fn record_encodes_camel_case_fields() {
    let document = menu().to_document(DocId::new("m1")).expect("encode");

    assert_eq!(document.id, DocId::new("m1"));
    assert_eq!(document.text("categoryId"), Some("rice"));
    assert_eq!(document.get("price"), Some(&Value::Int(9500)));
    assert_eq!(
        document.created_at(),
        Some(Timestamp::from_seconds(1_709_596_800))
    );
    assert!(document.get("updatedAt").is_none());
}

#[test]
fn record_decodes_from_document() {
    let document = menu().to_document(DocId::new("m1")).expect("encode");

    let stored = Stored::<Menu>::from_document(&document).expect("decode");

    assert_eq!(stored.id, DocId::new("m1"));
    assert_eq!(stored.record, menu());
}

#[test]
fn order_enums_use_wire_values() {
    let order = Order {
        orderer_id: "g1".to_string(),
        order_status: OrderStatus::Paid,
        payment_method: PaymentMethod::Vbank,
        ..Order::default()
    };

    let document = order.to_document(DocId::new("o1")).expect("encode");

    assert_eq!(document.text("orderStatus"), Some("paid"));
    assert_eq!(document.text("paymentMethod"), Some("vbank"));
    assert_eq!(document.text("ordererType"), Some("guest"));
    assert_eq!(OrderStatus::parse("expired"), Some(OrderStatus::Expired));
    assert_eq!(OrderStatus::Ready.to_string(), "Awaiting confirmation");
    assert_eq!(PaymentMethod::Offline.to_string(), "On-site payment");
}

#[test]
fn blank_required_field_is_rejected() {
    let user = User {
        name: "Kim Minji".to_string(),
        email: "   ".to_string(),
        phone: "010-1234-5678".to_string(),
        ..User::default()
    };

    assert_eq!(
        user.validate(),
        Err(ValidationError::MissingField {
            collection: "users".to_string(),
            field: "email".to_string(),
        })
    );
}

#[test]
fn empty_required_list_counts_as_missing() {
    let document = Document::new("p1")
        .with("title", "Spring sale")
        .with("tags", Value::List(Vec::new()));

    let err = validate_required("popups", &["title", "tags"], &document);

    assert!(matches!(err, Err(ValidationError::MissingField { field, .. }) if field == "tags"));
}

#[test]
fn attachments_are_derived_from_record_state() {
    let id = DocId::new("o9");
    let with_sticker = Order {
        sticker_file: true,
        ..Order::default()
    };
    let popup = Popup {
        title: "Banner".to_string(),
        image_path: Some("popups/p1".to_string()),
        ..Popup::default()
    };

    assert_eq!(with_sticker.attachments(&id), vec!["stickers/o9"]);
    assert!(Order::default().attachments(&id).is_empty());
    assert_eq!(popup.attachments(&DocId::new("p1")), vec!["popups/p1"]);
}
