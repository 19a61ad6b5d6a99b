use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use std::sync::Arc;
use table_order::clients::{SessionClient, TableClient};
use table_order::model::{
    CategoryId, DiningTable, Food, FoodId, Money, RestaurantId, SessionPhase, TableId,
    TableStatus, TaxRate,
};
use table_order::ports::{ChannelNotifier, StaticMenu};
use table_order::session_actor::SessionError;
use table_order::table_actor::{TableActionResult, TableError};

fn menu() -> Arc<StaticMenu> {
    Arc::new(StaticMenu::new(vec![Food {
        id: FoodId(1),
        restaurant_id: RestaurantId(1),
        category_id: CategoryId(1),
        name: "Crispy Calamari".into(),
        description: "Lightly fried calamari".into(),
        price: Money::from_minor(1299),
        image: "calamari.jpg".into(),
    }]))
}

/// Real Session actor with a mocked Table dependency: opening occupies, closing releases.
#[tokio::test]
async fn session_claims_and_frees_its_table() {
    let mut table_mock = MockClient::<DiningTable>::new();
    table_mock
        .expect_action(TableId(3))
        .return_ok(TableActionResult::Occupy(()));
    table_mock
        .expect_action(TableId(3))
        .return_ok(TableActionResult::Release(()));
    let tables = TableClient::new(table_mock.client());

    let (session_actor, session_client) = table_order::session_actor::new(8);
    let (notifier, _notes) = ChannelNotifier::new(8);
    let sessions = SessionClient::new(
        session_client,
        menu(),
        Arc::new(notifier),
        TaxRate::default(),
    );
    let handle = tokio::spawn(session_actor.run(tables));

    let id = sessions
        .open_session(RestaurantId(1), TableId(3))
        .await
        .unwrap();
    assert_eq!(sessions.phase(id).await.unwrap(), SessionPhase::Empty);

    sessions.add_item(id, FoodId(1), 3).await.unwrap();
    let totals = sessions.totals(id).await.unwrap();
    assert_eq!(totals.subtotal, Money::from_minor(3897));

    sessions.close_session(id).await.unwrap();
    assert!(sessions.get(id).await.unwrap().is_none());

    table_mock.verify();
    drop(sessions);
    handle.await.unwrap();
}

#[tokio::test]
async fn occupied_table_refuses_a_new_session() {
    let mut table_mock = MockClient::<DiningTable>::new();
    table_mock
        .expect_action(TableId(2))
        .return_err(FrameworkError::EntityError(Box::new(TableError::NotAvailable {
            number: 2,
            status: TableStatus::Occupied,
        })));
    let tables = TableClient::new(table_mock.client());

    let (session_actor, session_client) = table_order::session_actor::new(8);
    let (notifier, _notes) = ChannelNotifier::new(8);
    let sessions = SessionClient::new(
        session_client,
        menu(),
        Arc::new(notifier),
        TaxRate::default(),
    );
    let handle = tokio::spawn(session_actor.run(tables));

    let err = sessions
        .open_session(RestaurantId(1), TableId(2))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::Table(TableError::NotAvailable {
            number: 2,
            status: TableStatus::Occupied
        })
    );
    assert_eq!(err.to_string(), "Table #2 is occupied");
    assert!(sessions.list().await.unwrap().is_empty());

    table_mock.verify();
    drop(sessions);
    handle.await.unwrap();
}
