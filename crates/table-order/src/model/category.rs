use crate::model::{Food, ValidationErrors};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for menu categories.
    CategoryId,
    "category"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

impl Category {
    pub(crate) fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name, "Name is required");
        errors.require_text("image", &self.image, "Image URL is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// A category row on the admin screen. The count is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub item_count: usize,
}

/// Pairs each category with the number of foods filed under it.
pub fn summarize_categories(categories: &[Category], foods: &[Food]) -> Vec<CategorySummary> {
    categories
        .iter()
        .map(|category| CategorySummary {
            item_count: foods
                .iter()
                .filter(|food| food.category_id == category.id)
                .count(),
            category: category.clone(),
        })
        .collect()
}
