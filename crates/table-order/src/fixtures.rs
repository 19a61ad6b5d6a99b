//! Seed data loaded by [`TableOrderSystem::seed_fixtures`](crate::lifecycle::TableOrderSystem::seed_fixtures).
//!
//! The first restaurant gets the menu and the floor plan; the others are searchable only.

use crate::model::{CategoryCreate, RestaurantCreate, TableStatus};

pub struct RestaurantFixture {
    pub name: &'static str,
    pub location: &'static str,
    pub cuisine: &'static str,
    pub rating: f32,
}

pub struct CategoryFixture {
    pub name: &'static str,
    pub image: &'static str,
}

pub struct FoodFixture {
    /// Name of a [`CATEGORIES`] entry.
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: i64,
    pub image: &'static str,
}

pub struct TableFixture {
    pub number: u32,
    pub seats: u32,
    pub status: TableStatus,
}

pub const RESTAURANTS: &[RestaurantFixture] = &[
    RestaurantFixture {
        name: "The Rustic Plate",
        location: "123 Main St, Anytown",
        cuisine: "American, Contemporary",
        rating: 4.7,
    },
    RestaurantFixture {
        name: "Sapore Italiano",
        location: "456 Oak Ave, Somewhere",
        cuisine: "Italian, Pizza",
        rating: 4.5,
    },
    RestaurantFixture {
        name: "Sakura Garden",
        location: "789 Elm St, Elsewhere",
        cuisine: "Japanese, Sushi",
        rating: 4.8,
    },
    RestaurantFixture {
        name: "Spice Route",
        location: "101 Pine Dr, Nowhere",
        cuisine: "Indian, Curry",
        rating: 4.6,
    },
];

pub const CATEGORIES: &[CategoryFixture] = &[
    CategoryFixture {
        name: "Appetizers",
        image: "https://images.unsplash.com/photo-1626200423672-b4d52bf541a6",
    },
    CategoryFixture {
        name: "Main Courses",
        image: "https://images.unsplash.com/photo-1544025162-d76694265947",
    },
    CategoryFixture {
        name: "Desserts",
        image: "https://images.unsplash.com/photo-1551024506-0bccd828d307",
    },
    CategoryFixture {
        name: "Drinks",
        image: "https://images.unsplash.com/photo-1544145945-f90425340c7e",
    },
];

pub const MENU: &[FoodFixture] = &[
    FoodFixture {
        category: "Appetizers",
        name: "Crispy Calamari",
        description: "Lightly fried calamari served with marinara sauce and lemon wedges.",
        price_cents: 1299,
        image: "https://images.unsplash.com/photo-1603073163308-9654c3fb70b5",
    },
    FoodFixture {
        category: "Appetizers",
        name: "Bruschetta",
        description: "Toasted bread topped with diced tomatoes, fresh basil, garlic, and olive oil.",
        price_cents: 999,
        image: "https://images.unsplash.com/photo-1572695157366-5e585ab2b69f",
    },
    FoodFixture {
        category: "Appetizers",
        name: "Spinach & Artichoke Dip",
        description: "Creamy blend of spinach, artichokes, and cheeses served with tortilla chips.",
        price_cents: 1099,
        image: "https://images.unsplash.com/photo-1576506295286-5cda18df43e7",
    },
    FoodFixture {
        category: "Main Courses",
        name: "Grilled Salmon",
        description: "Fresh salmon fillet grilled to perfection, served with seasonal vegetables and rice pilaf.",
        price_cents: 2499,
        image: "https://images.unsplash.com/photo-1519708227418-c8fd9a32b7a2",
    },
    FoodFixture {
        category: "Main Courses",
        name: "Ribeye Steak",
        description: "12oz ribeye steak cooked to your preference, with mashed potatoes and asparagus.",
        price_cents: 3299,
        image: "https://images.unsplash.com/photo-1600891964092-4316c288032e",
    },
    FoodFixture {
        category: "Desserts",
        name: "Chocolate Lava Cake",
        description: "Warm chocolate cake with a molten center, served with vanilla ice cream.",
        price_cents: 899,
        image: "https://images.unsplash.com/photo-1606313564200-e75d5e30476c",
    },
    FoodFixture {
        category: "Drinks",
        name: "Craft Beer",
        description: "Selection of local craft beers. Ask your server for today's options.",
        price_cents: 799,
        image: "https://images.unsplash.com/photo-1566633806327-68e152aaf26d",
    },
];

pub const FLOOR_PLAN: &[TableFixture] = &[
    TableFixture { number: 1, seats: 2, status: TableStatus::Available },
    TableFixture { number: 2, seats: 4, status: TableStatus::Occupied },
    TableFixture { number: 3, seats: 2, status: TableStatus::Available },
    TableFixture { number: 4, seats: 6, status: TableStatus::Reserved },
    TableFixture { number: 5, seats: 4, status: TableStatus::Available },
    TableFixture { number: 6, seats: 2, status: TableStatus::Available },
    TableFixture { number: 7, seats: 8, status: TableStatus::Occupied },
    TableFixture { number: 8, seats: 2, status: TableStatus::Available },
];

impl RestaurantFixture {
    pub fn to_create(&self) -> RestaurantCreate {
        RestaurantCreate {
            name: self.name.to_string(),
            location: self.location.to_string(),
            cuisine: self.cuisine.to_string(),
            rating: self.rating,
        }
    }
}

impl CategoryFixture {
    pub fn to_create(&self) -> CategoryCreate {
        CategoryCreate {
            name: self.name.to_string(),
            image: self.image.to_string(),
        }
    }
}
