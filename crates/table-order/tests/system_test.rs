use actor_framework::ActorClient;
use std::sync::Arc;
use table_order::config::Config;
use table_order::food_actor::FoodError;
use table_order::lifecycle::TableOrderSystem;
use table_order::model::{
    CategoryId, FoodCreate, FoodId, FoodUpdate, Money, RestaurantId, SessionPhase, TableCreate,
    TableId, TableStatus,
};
use table_order::ports::ChannelNotifier;
use table_order::session_actor::SessionError;
use table_order::table_actor::TableError;

fn config() -> Config {
    Config {
        channel_buffer: 8,
        ..Config::default()
    }
}

#[tokio::test]
async fn fixtures_load_into_a_searchable_directory() {
    let system = TableOrderSystem::new(&config());
    let home = system.seed_fixtures().await.unwrap();
    assert_eq!(home, RestaurantId(1));

    let found = system.restaurants.search("RUSTIC").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "The Rustic Plate");
    assert_eq!(system.restaurants.search("sushi").await.unwrap()[0].name, "Sakura Garden");
    assert_eq!(system.restaurants.search("").await.unwrap().len(), 4);

    let menu = system.foods.menu_of(home).await.unwrap();
    assert_eq!(menu.len(), 7);
    assert_eq!(menu[3].id, FoodId(4));
    assert_eq!(menu[3].name, "Grilled Salmon");
    assert!(system.foods.menu_of(RestaurantId(2)).await.unwrap().is_empty());

    let appetizers = system.foods.search("", Some(CategoryId(1))).await.unwrap();
    assert_eq!(appetizers.len(), 3);
    let cakes = system.foods.search("molten", None).await.unwrap();
    assert_eq!(cakes[0].name, "Chocolate Lava Cake");

    let overview = system.category_overview().await.unwrap();
    let counts: Vec<(&str, usize)> = overview
        .iter()
        .map(|s| (s.category.name.as_str(), s.item_count))
        .collect();
    assert_eq!(
        counts,
        vec![("Appetizers", 3), ("Main Courses", 2), ("Desserts", 1), ("Drinks", 1)]
    );

    let free: Vec<u32> = system
        .tables
        .available_tables(home)
        .await
        .unwrap()
        .iter()
        .map(|t| t.number)
        .collect();
    assert_eq!(free, vec![1, 3, 5, 6, 8]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn sessions_hold_their_table_until_closed() {
    let system = TableOrderSystem::new(&config());
    let home = system.seed_fixtures().await.unwrap();

    let session = system.sessions.open_session(home, TableId(1)).await.unwrap();
    let table = system.tables.get(TableId(1)).await.unwrap().unwrap();
    assert_eq!(table.status, TableStatus::Occupied);

    // A second party cannot take the same table.
    let err = system
        .sessions
        .open_session(home, TableId(1))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::Table(TableError::NotAvailable {
            number: 1,
            status: TableStatus::Occupied
        })
    );

    let err = system
        .sessions
        .open_session(home, TableId(4))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Table #4 is reserved");

    let err = system
        .sessions
        .open_session(RestaurantId(2), TableId(3))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Table(TableError::WrongRestaurant { .. })
    ));

    system.sessions.close_session(session).await.unwrap();
    let table = system.tables.get(TableId(1)).await.unwrap().unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert!(system.sessions.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cart_edits_notify_the_table() {
    let (notifier, mut notes) = ChannelNotifier::new(16);
    let system = TableOrderSystem::with_notifier(&config(), Arc::new(notifier));
    let home = system.seed_fixtures().await.unwrap();
    let session = system.sessions.open_session(home, TableId(3)).await.unwrap();

    system.sessions.add_item(session, FoodId(1), 1).await.unwrap();
    system.sessions.add_item(session, FoodId(4), 1).await.unwrap();
    let merged = system.sessions.add_item(session, FoodId(4), 1).await.unwrap();
    assert_eq!(merged.quantity, 2);

    let totals = system.sessions.totals(session).await.unwrap();
    assert_eq!(totals.subtotal.to_string(), "62.97");
    assert_eq!(totals.tax.to_string(), "5.04");
    assert_eq!(totals.total.to_string(), "68.01");

    // Quantity never drops below one.
    let line = system
        .sessions
        .set_quantity(session, FoodId(1), -3)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(line.quantity, 1);

    assert!(system.sessions.remove_item(session, FoodId(1)).await.unwrap());
    assert!(!system.sessions.remove_item(session, FoodId(1)).await.unwrap());

    let err = system
        .sessions
        .add_item(session, FoodId(99), 1)
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::UnknownItem("food_99".into()));

    let mut messages = Vec::new();
    while let Ok(note) = notes.try_recv() {
        assert_eq!(note.table_id(), TableId(3));
        messages.push(note.message());
    }
    assert_eq!(
        messages,
        vec![
            "1 x Crispy Calamari added to your order.",
            "1 x Grilled Salmon added to your order.",
            "1 x Grilled Salmon added to your order.",
            "Crispy Calamari has been removed from your cart.",
        ]
    );

    system.sessions.clear_cart(session).await.unwrap();
    assert_eq!(
        system.sessions.phase(session).await.unwrap(),
        SessionPhase::Empty
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn menu_changes_do_not_reprice_carts() {
    let system = TableOrderSystem::new(&config());
    let home = system.seed_fixtures().await.unwrap();
    let session = system.sessions.open_session(home, TableId(5)).await.unwrap();

    system.sessions.add_item(session, FoodId(7), 1).await.unwrap();
    system
        .foods
        .update_food(
            FoodId(7),
            FoodUpdate {
                price: Some(Money::from_minor(999)),
                ..FoodUpdate::default()
            },
        )
        .await
        .unwrap();
    let line = system.sessions.add_item(session, FoodId(7), 1).await.unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(line.unit_price, Money::from_minor(799));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn admin_rules_are_enforced() {
    let system = TableOrderSystem::new(&config());
    let home = system.seed_fixtures().await.unwrap();

    let err = system
        .tables
        .add_table(TableCreate {
            restaurant_id: home,
            number: 3,
            seats: 4,
        })
        .await
        .unwrap_err();
    match err {
        TableError::Validation(errors) => {
            assert_eq!(errors.get("number"), Some("Table number already exists"))
        }
        other => panic!("unexpected error: {other}"),
    }

    // Numbers are unique per restaurant only.
    system
        .tables
        .add_table(TableCreate {
            restaurant_id: RestaurantId(2),
            number: 3,
            seats: 4,
        })
        .await
        .unwrap();

    let err = system
        .foods
        .add_food(FoodCreate {
            restaurant_id: home,
            category_id: CategoryId(42),
            name: "Tiramisu".into(),
            description: "Coffee-soaked ladyfingers".into(),
            price: Money::from_minor(899),
            image: "tiramisu.jpg".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FoodError::UnknownCategory(_)));

    let err = system
        .foods
        .add_food(FoodCreate {
            restaurant_id: home,
            category_id: CategoryId(3),
            name: "Tiramisu".into(),
            description: String::new(),
            price: Money::ZERO,
            image: "tiramisu.jpg".into(),
        })
        .await
        .unwrap_err();
    match err {
        FoodError::Validation(errors) => {
            assert_eq!(errors.get("description"), Some("Description is required"));
            assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
        }
        other => panic!("unexpected error: {other}"),
    }

    system.shutdown().await.unwrap();
}

