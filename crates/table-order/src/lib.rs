//! # Table Order
//!
//! Table-side ordering for restaurants: diners pick a table, browse the menu, build a
//! cart and place the order from their seat.
//!
//! - **[model]**: restaurants, tables, categories, dishes, sessions and orders, plus
//!   [`Money`](model::Money) and [`TaxRate`](model::TaxRate).
//! - **[cart]**: the cart aggregate and its totals.
//! - **Actors**: one per resource ([`table_actor`], [`session_actor`], ...), each a
//!   [`ResourceActor`](actor_framework::ResourceActor).
//! - **[clients]**: typed wrappers around the actors.
//! - **[ports]**: menu lookup, order submission, diner notifications and cancellation.
//! - **[lifecycle]**: [`TableOrderSystem`](lifecycle::TableOrderSystem) wires it all up.
//! - **[dashboard]**, **[fixtures]**, **[config]**.
//!
//! ```ignore
//! let system = TableOrderSystem::new(&Config::load()?);
//! let restaurant = system.seed_fixtures().await?;
//! let session = system.sessions.open_session(restaurant, TableId(1)).await?;
//! system.sessions.add_item(session, FoodId(4), 2).await?;
//! let receipt = system.sessions.place_order(session, &system.order_sink(), None).await?;
//! ```

pub mod cart;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod fixtures;
pub mod food_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod ports;
pub mod restaurant_actor;
pub mod session_actor;
pub mod table_actor;
