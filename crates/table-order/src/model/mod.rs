//! # Domain Model
//!
//! Plain data for every resource plus the money types. Entities implement
//! [`ActorEntity`](actor_framework::ActorEntity) in their `*_actor` modules; this module
//! only holds the structs, their create/update payloads and pure helpers.

/// Declares a `u32` newtype id. The actor assigns the number; `Display` prefixes the
/// resource name so log lines read `id=table_3`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod category;
pub mod food;
pub mod money;
pub mod order;
pub mod restaurant;
pub mod session;
pub mod table;
pub mod validation;

pub use category::*;
pub use food::*;
pub use money::*;
pub use order::*;
pub use restaurant::*;
pub use session::*;
pub use table::*;
pub use validation::*;
