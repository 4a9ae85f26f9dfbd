//! Mock gateway implementations for isolating the controller in tests.

use mockall::mock;

use crate::domain::gift_card::{GiftCard, NewGiftCard, UpdateGiftCard};
use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::domain::types::EntityKey;
use crate::gateway::{CollectionGateway, CollectionQuery, GatewayResult, Page};

mock! {
    pub OrderGateway {}

    impl CollectionGateway for OrderGateway {
        type Entity = Order;
        type Create = NewOrder;
        type Update = UpdateOrder;

        async fn list(&self, query: &CollectionQuery) -> GatewayResult<Page<Order>>;
        async fn create(&self, payload: &NewOrder) -> GatewayResult<Order>;
        async fn update(&self, id: &EntityKey, updates: &UpdateOrder) -> GatewayResult<Order>;
        async fn delete(&self, id: &EntityKey) -> GatewayResult<()>;
    }
}

mock! {
    pub GiftCardGateway {}

    impl CollectionGateway for GiftCardGateway {
        type Entity = GiftCard;
        type Create = NewGiftCard;
        type Update = UpdateGiftCard;

        async fn list(&self, query: &CollectionQuery) -> GatewayResult<Page<GiftCard>>;
        async fn create(&self, payload: &NewGiftCard) -> GatewayResult<GiftCard>;
        async fn update(&self, id: &EntityKey, updates: &UpdateGiftCard) -> GatewayResult<GiftCard>;
        async fn delete(&self, id: &EntityKey) -> GatewayResult<()>;
    }
}
