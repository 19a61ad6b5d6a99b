use crate::model::{CategoryId, Money, RestaurantId, ValidationErrors};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for menu items.
    FoodId,
    "food"
);

/// A dish on a restaurant's menu.
///
/// The cart copies `name` and `price` when a dish is first added, so later edits here do
/// not reach carts that already hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub restaurant_id: RestaurantId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
}

impl Food {
    /// Case-insensitive substring match on name or description, optionally limited to
    /// one category. An empty term matches everything in scope.
    pub fn matches(&self, term: &str, category: Option<CategoryId>) -> bool {
        if category.is_some_and(|c| c != self.category_id) {
            return false;
        }
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name, "Name is required");
        errors.require_text("description", &self.description, "Description is required");
        if !self.price.is_positive() {
            errors.add("price", "Price must be greater than 0");
        }
        errors.require_text("image", &self.image, "Image URL is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub restaurant_id: RestaurantId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
}

#[derive(Debug, Clone, Default)]
pub struct FoodUpdate {
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub image: Option<String>,
}
