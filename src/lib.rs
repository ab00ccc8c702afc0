pub mod config;
pub mod dataset;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod mealdb;
pub mod model;
pub mod render;
pub mod service;

pub use config::AppConfig;
pub use error::RecipeError;
pub use favorites::FavoritesStore;
pub use listing::{ListingQuery, SortKey};
pub use model::{Category, Difficulty, Recipe};
pub use service::{RecipeService, RecipeSource};
