use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for Restaurants.
    RestaurantId,
    "restaurant"
);

/// A restaurant a diner can search for.
///
/// Restaurants are seeded at start-up; there is no admin screen for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub rating: f32,
}

impl Restaurant {
    /// Case-insensitive substring match on name, cuisine or location. An empty term
    /// matches every restaurant.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || [&self.name, &self.cuisine, &self.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rustic_plate() -> Restaurant {
        Restaurant {
            id: RestaurantId(1),
            name: "The Rustic Plate".into(),
            location: "123 Main St, Anytown".into(),
            cuisine: "American, Contemporary".into(),
            rating: 4.7,
        }
    }

    #[test]
    fn search_covers_name_cuisine_and_location() {
        let r = rustic_plate();
        assert!(r.matches("rustic"));
        assert!(r.matches("CONTEMPORARY"));
        assert!(r.matches("anytown"));
        assert!(r.matches("  "));
        assert!(!r.matches("sushi"));
    }
}
