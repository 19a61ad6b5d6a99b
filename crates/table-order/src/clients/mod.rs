//! # Typed Clients
//!
//! One wrapper per actor over [`ResourceClient`](actor_framework::ResourceClient).
//! `get`, `list` and `delete` come from [`ActorClient`](actor_framework::ActorClient);
//! the wrappers add the domain operations and turn [`FrameworkError`]s back into the
//! resource's own error, so callers can match on `TableError::NotAvailable` rather than
//! on a boxed error.
//!
//! [`FrameworkError`]: actor_framework::FrameworkError

pub mod category_client;
pub mod food_client;
pub mod order_client;
pub mod restaurant_client;
pub mod session_client;
pub mod table_client;

pub use category_client::CategoryClient;
pub use food_client::FoodClient;
pub use order_client::OrderClient;
pub use restaurant_client::RestaurantClient;
pub use session_client::SessionClient;
pub use table_client::TableClient;
