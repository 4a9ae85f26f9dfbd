use spa_backoffice::domain::order::{OrderStatus, UpdateOrder};
use spa_backoffice::domain::product::UpdateProduct;
use spa_backoffice::gateway::memory::MemoryGateway;
use spa_backoffice::gateway::resources::{Orders, Products};
use spa_backoffice::gateway::{CollectionGateway, CollectionQuery, GatewayError};

mod common;

#[tokio::test]
async fn create_materializes_server_side_defaults() {
    let gateway: MemoryGateway<Orders> = MemoryGateway::new();

    let order = gateway
        .create(&common::new_order("Dana Reeve", "Dana@Example.com"))
        .await
        .expect("create succeeds");

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_cents, 3_300);
    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.customer_email, "dana@example.com");
    assert!(!order.id.as_str().is_empty());
}

#[tokio::test]
async fn filter_applies_before_search_and_pagination() {
    let gateway: MemoryGateway<Orders> = MemoryGateway::new();
    for n in 0..30 {
        let order = gateway
            .create(&common::new_order(&format!("Customer {n:02}"), "c@example.com"))
            .await
            .expect("create succeeds");
        // Move every other order out of `pending`.
        if n % 2 == 0 {
            gateway
                .update(
                    &order.id,
                    &UpdateOrder {
                        status: Some(OrderStatus::Processing),
                    },
                )
                .await
                .expect("update succeeds");
        }
    }

    let query = CollectionQuery::new()
        .paginate(2, 10)
        .search("customer")
        .filter("processing");
    let page = gateway.list(&query).await.expect("list succeeds");

    assert_eq!(page.total_items, 15);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 5);
    assert!(
        page.items
            .iter()
            .all(|order| order.status == OrderStatus::Processing)
    );
}

#[tokio::test]
async fn pages_beyond_the_collection_come_back_empty() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let page = gateway
        .list(&CollectionQuery::new().paginate(5, 10))
        .await
        .expect("list succeeds");
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn update_merges_only_populated_fields() {
    let gateway: MemoryGateway<Products> = MemoryGateway::new();
    let product = gateway
        .create(&common::new_product("Lavender Oil", "Aromatherapy"))
        .await
        .expect("create succeeds");
    assert!(product.active);
    assert_eq!(product.category, "aromatherapy");

    let updated = gateway
        .update(
            &product.id,
            &UpdateProduct {
                price_cents: Some(1_500),
                active: Some(false),
                ..UpdateProduct::default()
            },
        )
        .await
        .expect("update succeeds");

    assert_eq!(updated.price_cents, 1_500);
    assert!(!updated.active);
    assert_eq!(updated.name, "Lavender Oil");
    assert_eq!(updated.stock, 10);
}

#[tokio::test]
async fn mutations_on_unknown_keys_are_not_found() {
    let gateway: MemoryGateway<Products> = MemoryGateway::new();

    let result = gateway
        .update(&common::key("missing"), &UpdateProduct::default())
        .await;
    assert!(matches!(result, Err(GatewayError::NotFound)));

    let result = gateway.delete(&common::key("missing")).await;
    assert!(matches!(result, Err(GatewayError::NotFound)));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    gateway
        .delete(&common::key("1"))
        .await
        .expect("delete succeeds");

    let page = gateway
        .list(&CollectionQuery::new())
        .await
        .expect("list succeeds");
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id.as_str(), "2");
}

#[tokio::test]
async fn search_scans_code_and_description_too() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());

    let by_code = gateway
        .list(&CollectionQuery::new().search("itn-5"))
        .await
        .expect("list succeeds");
    assert_eq!(by_code.items.len(), 1);
    assert_eq!(by_code.items[0].name, "iTunes Gift Card");

    let by_description = gateway
        .list(&CollectionQuery::new().search("redeemable"))
        .await
        .expect("list succeeds");
    assert_eq!(by_description.items.len(), 1);
    assert_eq!(by_description.items[0].name, "Amazon Gift Card");
}
