//! Data models
//!
//! Rust structs for session ingredients and nutrition API payloads.

mod ingredient;
mod nutrition;

pub use ingredient::IngredientEntry;
pub use nutrition::{codes, NutrientInfo, NutritionResult};
