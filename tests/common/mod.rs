#![allow(dead_code)]

use chrono::NaiveDate;
use spa_backoffice::domain::gift_card::{GiftCard, GiftCardStatus, NewGiftCard};
use spa_backoffice::domain::order::{NewOrder, OrderItem};
use spa_backoffice::domain::product::NewProduct;
use spa_backoffice::domain::types::{EntityKey, GiftCardCode};
use spa_backoffice::gateway::memory::MemoryGateway;
use spa_backoffice::gateway::resources::GiftCards;

pub fn key(value: &str) -> EntityKey {
    EntityKey::new(value).expect("valid key")
}

pub fn gift_card(id: &str, name: &str, code: &str, description: &str) -> GiftCard {
    GiftCard {
        id: key(id),
        name: name.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        amount_cents: 10_000,
        status: GiftCardStatus::Active,
        expires_at: None,
    }
}

/// The two cards from the search scenarios: a match for "amz" and a decoy.
pub fn amazon_and_itunes() -> Vec<GiftCard> {
    vec![
        gift_card("1", "Amazon Gift Card", "AMZ-100", "Redeemable online"),
        gift_card("2", "iTunes Gift Card", "ITN-50", "Music and apps"),
    ]
}

/// Twenty-five sequentially named cards for the pagination scenarios.
pub fn twenty_five_cards() -> Vec<GiftCard> {
    (1..=25)
        .map(|n| {
            gift_card(
                &format!("gc-{n}"),
                &format!("Card {n:02}"),
                &format!("CRD-{n}"),
                "Store credit",
            )
        })
        .collect()
}

pub fn seeded_gift_cards(records: Vec<GiftCard>) -> MemoryGateway<GiftCards> {
    MemoryGateway::with_records(records)
}

pub fn new_gift_card(name: &str, code: &str) -> NewGiftCard {
    NewGiftCard::new(
        name.to_string(),
        GiftCardCode::new(code).expect("valid code"),
        "Store credit".to_string(),
        5_000,
        Some(NaiveDate::from_ymd_opt(2027, 1, 31).expect("valid date")),
    )
}

pub fn new_product(name: &str, category: &str) -> NewProduct {
    NewProduct::new(
        name.to_string(),
        format!("{name} description"),
        1_250,
        category.to_string(),
        10,
        None,
    )
}

pub fn new_order(customer: &str, email: &str) -> NewOrder {
    NewOrder::new(
        customer.to_string(),
        email.to_string(),
        vec![
            OrderItem {
                product_id: "p-1".to_string(),
                name: "Lavender oil".to_string(),
                quantity: 2,
                unit_price_cents: 1_250,
            },
            OrderItem {
                product_id: "p-2".to_string(),
                name: "Bath salts".to_string(),
                quantity: 1,
                unit_price_cents: 800,
            },
        ],
    )
}
