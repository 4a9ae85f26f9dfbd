use spa_backoffice::controller::{CollectionController, LoadState};
use spa_backoffice::domain::gift_card::GiftCard;
use spa_backoffice::gateway::CollectionGateway;

mod common;

fn controller() -> CollectionController<GiftCard> {
    CollectionController::new(10)
}

#[tokio::test]
async fn refetch_loads_the_first_page() {
    let gateway = common::seeded_gift_cards(common::twenty_five_cards());
    let mut controller = controller();

    controller.refetch(&gateway).await.expect("fetch succeeds");

    assert_eq!(controller.state(), &LoadState::Ready);
    assert_eq!(controller.items().len(), 10);
    assert_eq!(controller.total_items(), 25);
    assert_eq!(controller.total_pages(), 3);
    assert_eq!(controller.items()[0].name, "Card 01");
}

#[tokio::test]
async fn the_last_page_holds_the_remainder() {
    let gateway = common::seeded_gift_cards(common::twenty_five_cards());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    let moved = controller
        .goto_page(&gateway, 3)
        .await
        .expect("page 3 is in range");
    assert!(moved);
    assert_eq!(controller.items().len(), 5);
    assert_eq!(controller.items()[0].name, "Card 21");
    assert_eq!(controller.items()[4].name, "Card 25");

    // Page 4 does not exist; the request is rejected without touching state.
    let moved = controller
        .goto_page(&gateway, 4)
        .await
        .expect("out-of-range navigation is not an error");
    assert!(!moved);
    assert_eq!(controller.query_state().page(), 3);
    assert_eq!(controller.items().len(), 5);
}

#[tokio::test]
async fn search_matches_case_insensitively_across_fields() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    controller
        .search(&gateway, "amz")
        .await
        .expect("search succeeds");

    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].name, "Amazon Gift Card");
    assert_eq!(controller.total_items(), 1);
}

#[tokio::test]
async fn search_resets_to_the_first_page() {
    let gateway = common::seeded_gift_cards(common::twenty_five_cards());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");
    controller
        .goto_page(&gateway, 3)
        .await
        .expect("page 3 is in range");

    controller
        .search(&gateway, "card")
        .await
        .expect("search succeeds");

    assert_eq!(controller.query_state().page(), 1);
    assert_eq!(controller.total_items(), 25);
}

#[tokio::test]
async fn clearing_the_search_restores_the_full_collection() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller
        .search(&gateway, "amz")
        .await
        .expect("search succeeds");
    assert_eq!(controller.total_items(), 1);

    controller.search(&gateway, "").await.expect("clear succeeds");
    assert_eq!(controller.total_items(), 2);
}

#[tokio::test]
async fn status_filter_narrows_the_list() {
    use spa_backoffice::domain::gift_card::GiftCardStatus;

    let mut cards = common::amazon_and_itunes();
    cards[1].status = GiftCardStatus::Redeemed;
    let gateway = common::seeded_gift_cards(cards);
    let mut controller = controller();

    controller
        .filter(&gateway, Some("redeemed"))
        .await
        .expect("filter succeeds");

    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].name, "iTunes Gift Card");
}

#[tokio::test]
async fn cancelled_delete_changes_nothing() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    let before_items: Vec<String> = controller
        .items()
        .iter()
        .map(|card| card.name.clone())
        .collect();
    let before_total = controller.total_items();

    controller.request_delete(common::key("2"), "iTunes Gift Card");
    assert!(controller.pending_delete().is_some());
    controller.cancel_delete();

    assert!(controller.pending_delete().is_none());
    let after_items: Vec<String> = controller
        .items()
        .iter()
        .map(|card| card.name.clone())
        .collect();
    assert_eq!(before_items, after_items);
    assert_eq!(before_total, controller.total_items());
    assert_eq!(
        gateway.records().expect("store intact").len(),
        2,
        "the backing collection must be untouched"
    );
}

#[tokio::test]
async fn confirmed_delete_removes_exactly_one_item() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    controller.request_delete(common::key("2"), "iTunes Gift Card");
    let deleted = controller
        .confirm_delete(&gateway)
        .await
        .expect("delete succeeds");

    assert!(deleted);
    assert!(controller.pending_delete().is_none());
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].id.as_str(), "1");
    assert_eq!(controller.total_items(), 1);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(gateway.records().expect("store intact").len(), 1);
}

#[tokio::test]
async fn failed_delete_leaves_the_list_in_place() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    // The record vanished server-side between fetch and delete.
    controller.request_delete(common::key("missing"), "Ghost");
    let outcome = controller.confirm_delete(&gateway).await;

    assert!(outcome.is_err());
    assert!(controller.pending_delete().is_none());
    assert_eq!(controller.items().len(), 2);
    assert_eq!(controller.total_items(), 2);
}

#[tokio::test]
async fn confirm_without_a_pending_request_is_a_no_op() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    let deleted = controller
        .confirm_delete(&gateway)
        .await
        .expect("nothing to do");
    assert!(!deleted);
    assert_eq!(controller.items().len(), 2);
}

#[tokio::test]
async fn create_reloads_the_list() {
    let gateway = common::seeded_gift_cards(vec![]);
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    let created = controller
        .create(&gateway, &common::new_gift_card("Spa Day", "SPA-25"))
        .await
        .expect("create succeeds");

    assert_eq!(created.code, "SPA-25");
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.total_items(), 1);
    assert_eq!(controller.state(), &LoadState::Ready);
}

#[tokio::test]
async fn update_reloads_the_list() {
    use spa_backoffice::domain::gift_card::UpdateGiftCard;

    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");

    let updates = UpdateGiftCard {
        name: Some("Amazon Card".to_string()),
        ..UpdateGiftCard::default()
    };
    let updated = controller
        .update(&gateway, &common::key("1"), &updates)
        .await
        .expect("update succeeds");

    assert_eq!(updated.name, "Amazon Card");
    assert_eq!(controller.items()[0].name, "Amazon Card");
    // Fields not present in the update are preserved.
    assert_eq!(controller.items()[0].code, "AMZ-100");
}

#[tokio::test]
async fn list_screen_data_reflects_the_controller() {
    use spa_backoffice::dto::screen::ListScreenData;

    let gateway = common::seeded_gift_cards(common::twenty_five_cards());
    let mut controller = controller();
    controller.refetch(&gateway).await.expect("fetch succeeds");
    controller
        .goto_page(&gateway, 2)
        .await
        .expect("page 2 is in range");

    let screen = ListScreenData::from_controller(&controller);
    assert_eq!(screen.list.page, 2);
    assert_eq!(screen.list.items.len(), 10);
    assert_eq!(screen.total_items, 25);
    assert_eq!(screen.list.pages, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(screen.search_query, None);
    assert_eq!(screen.state, &LoadState::Ready);
}

#[tokio::test]
async fn late_responses_from_an_older_query_are_dropped() {
    let gateway = common::seeded_gift_cards(common::amazon_and_itunes());
    let mut controller = controller();

    // First request issued, then superseded before its response lands.
    let stale_ticket = controller.begin_fetch();
    let stale_page = gateway.list(stale_ticket.query()).await.expect("list succeeds");

    controller.set_search_term("amz");
    let fresh_ticket = controller.begin_fetch();
    let fresh_page = gateway.list(fresh_ticket.query()).await.expect("list succeeds");

    assert!(controller.complete_fetch(&fresh_ticket, fresh_page));
    assert!(!controller.complete_fetch(&stale_ticket, stale_page));

    // The narrowed result set won, despite the older response arriving last.
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].name, "Amazon Gift Card");
}
