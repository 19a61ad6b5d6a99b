use actor_framework::tracing::setup_tracing;
use table_order::config::Config;
use table_order::lifecycle::TableOrderSystem;
use table_order::model::{FoodId, TableId};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::load().map_err(|e| e.to_string())?;
    let system = TableOrderSystem::new(&config);
    let restaurant = system.seed_fixtures().await.map_err(|e| e.to_string())?;

    let found = system
        .restaurants
        .search("rustic")
        .await
        .map_err(|e| e.to_string())?;
    for r in &found {
        info!(id = %r.id, name = %r.name, rating = r.rating, "Found restaurant");
    }

    let free = system
        .tables
        .available_tables(restaurant)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = free.len(), "Tables available");

    let table = TableId(1);
    let sink = system.order_sink();
    let span = tracing::info_span!("dinner", %table);
    let receipt = async {
        let session = system
            .sessions
            .open_session(restaurant, table)
            .await
            .map_err(|e| e.to_string())?;

        // Crispy Calamari, then two Grilled Salmon
        for (dish, quantity) in [(FoodId(1), 1), (FoodId(4), 2)] {
            system
                .sessions
                .add_item(session, dish, quantity)
                .await
                .map_err(|e| e.to_string())?;
        }

        let totals = system
            .sessions
            .totals(session)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            subtotal = %totals.subtotal,
            tax = %totals.tax,
            total = %totals.total,
            "Cart ready"
        );

        let receipt = system
            .sessions
            .place_order(session, &sink, None)
            .await
            .map_err(|e| e.to_string())?;

        system
            .sessions
            .close_session(session)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(receipt)
    }
    .instrument(span)
    .await?;
    info!(order = %receipt.order_id, total = %receipt.totals.total, "Order placed");

    let stats = system.dashboard().await.map_err(|e| e.to_string())?;
    info!(
        orders = stats.total_orders,
        revenue = %stats.revenue,
        average = %stats.average_order_value,
        available = stats.tables.available,
        occupied = stats.tables.occupied,
        reserved = stats.tables.reserved,
        "Dashboard"
    );
    for item in &stats.top_items {
        info!(name = %item.name, quantity = item.quantity, revenue = %item.revenue, "Top item");
    }

    drop(sink);
    system.shutdown().await.map_err(|e| e.to_string())
}
