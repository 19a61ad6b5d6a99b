use crate::category_actor::CategoryError;
use crate::clients::{
    CategoryClient, FoodClient, OrderClient, RestaurantClient, SessionClient, TableClient,
};
use crate::config::Config;
use crate::dashboard::DashboardStats;
use crate::fixtures::{CATEGORIES, FLOOR_PLAN, MENU, RESTAURANTS};
use crate::food_actor::FoodError;
use crate::model::{
    summarize_categories, CategoryId, CategorySummary, FoodCreate, Money, RestaurantId,
    TableCreate, TableStatus,
};
use crate::order_actor::OrderError;
use crate::ports::{MenuCatalog, Notifier, OrderBookSink, TracingNotifier};
use crate::restaurant_actor::RestaurantError;
use crate::session_actor::SessionError;
use crate::table_actor::TableError;
use actor_framework::ActorClient;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Food(#[from] FoodError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The running restaurant system: one actor per resource and a typed client for each.
///
/// ```ignore
/// let system = TableOrderSystem::new(&Config::load()?);
/// system.seed_fixtures().await?;
///
/// let session = system.sessions.open_session(restaurant, table).await?;
/// system.sessions.add_item(session, salmon, 2).await?;
/// let receipt = system.sessions.place_order(session, &system.order_sink(), None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct TableOrderSystem {
    pub restaurants: RestaurantClient,
    pub tables: TableClient,
    pub categories: CategoryClient,
    pub foods: FoodClient,
    pub orders: OrderClient,
    pub sessions: SessionClient,
    config: Config,
    handles: Vec<JoinHandle<()>>,
}

impl TableOrderSystem {
    /// Starts every actor. Diner notifications go to the log.
    pub fn new(config: &Config) -> Self {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    pub fn with_notifier(config: &Config, notifier: Arc<dyn Notifier>) -> Self {
        let buffer = config.channel_buffer;
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(buffer);
        let (table_actor, table_client) = crate::table_actor::new(buffer);
        let (category_actor, category_client) = crate::category_actor::new(buffer);
        let (food_actor, food_client) = crate::food_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);
        let (session_actor, session_client) = crate::session_actor::new(buffer);

        let restaurants = RestaurantClient::new(restaurant_client);
        let tables = TableClient::new(table_client);
        let categories = CategoryClient::new(category_client);
        let foods = FoodClient::new(food_client);
        let orders = OrderClient::new(order_client);

        let catalog: Arc<dyn MenuCatalog> = Arc::new(foods.clone());
        let sessions = SessionClient::new(session_client, catalog, notifier, config.tax_rate);

        let handles = vec![
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(table_actor.run(())),
            tokio::spawn(category_actor.run(())),
            tokio::spawn(food_actor.run(categories.clone())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(session_actor.run(tables.clone())),
        ];

        info!(tax = %config.tax_rate, buffer, "Table order system started");
        Self {
            restaurants,
            tables,
            categories,
            foods,
            orders,
            sessions,
            config: config.clone(),
            handles,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A sink that records into this system's order book after the configured delay.
    pub fn order_sink(&self) -> OrderBookSink {
        OrderBookSink::new(self.orders.clone(), self.config.submit_delay)
    }

    /// Loads the fixture directory, categories, menu and floor plan.
    ///
    /// The menu and tables go to the first restaurant, whose id is returned. Tables that
    /// start occupied or reserved are moved there after creation.
    #[instrument(skip(self))]
    pub async fn seed_fixtures(&self) -> Result<RestaurantId, SystemError> {
        let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
        for restaurant in RESTAURANTS {
            restaurant_ids.push(self.restaurants.add_restaurant(restaurant.to_create()).await?);
        }
        let Some(&home) = restaurant_ids.first() else {
            return Err(SystemError::Restaurant(RestaurantError::NotFound(
                "no restaurant fixtures".into(),
            )));
        };

        let mut category_ids: HashMap<&str, CategoryId> = HashMap::new();
        for category in CATEGORIES {
            let id = self.categories.add_category(category.to_create()).await?;
            category_ids.insert(category.name, id);
        }

        for food in MENU {
            let category_id = category_ids
                .get(food.category)
                .copied()
                .ok_or_else(|| FoodError::UnknownCategory(food.category.to_string()))?;
            self.foods
                .add_food(FoodCreate {
                    restaurant_id: home,
                    category_id,
                    name: food.name.to_string(),
                    description: food.description.to_string(),
                    price: Money::from_minor(food.price_cents),
                    image: food.image.to_string(),
                })
                .await?;
        }

        for table in FLOOR_PLAN {
            let id = self
                .tables
                .add_table(TableCreate {
                    restaurant_id: home,
                    number: table.number,
                    seats: table.seats,
                })
                .await?;
            if table.status != TableStatus::Available {
                self.tables.set_status(id, table.status).await?;
            }
        }

        info!(
            restaurants = RESTAURANTS.len(),
            dishes = MENU.len(),
            tables = FLOOR_PLAN.len(),
            "Fixtures loaded"
        );
        Ok(home)
    }

    /// Current dashboard figures across every restaurant.
    pub async fn dashboard(&self) -> Result<DashboardStats, SystemError> {
        let orders = self.orders.list().await?;
        let tables = self.tables.list().await?;
        let foods = self.foods.list().await?;
        let categories = self.categories.list().await?;
        Ok(DashboardStats::from_parts(
            &orders,
            &tables,
            &foods,
            &categories,
            self.config.top_items,
        ))
    }

    /// Categories with the number of dishes filed under each.
    pub async fn category_overview(&self) -> Result<Vec<CategorySummary>, SystemError> {
        let categories = self.categories.list().await?;
        let foods = self.foods.list().await?;
        Ok(summarize_categories(&categories, &foods))
    }

    /// Drops the system's clients and waits for every actor to stop.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down table order system");
        let Self {
            restaurants,
            tables,
            categories,
            foods,
            orders,
            sessions,
            handles,
            ..
        } = self;
        // Sessions first: the catalog inside holds a food client.
        drop(sessions);
        drop(foods);
        drop(orders);
        drop(tables);
        drop(categories);
        drop(restaurants);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }
        info!("Table order system stopped");
        Ok(())
    }
}
