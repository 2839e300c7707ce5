//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod business_profile;
pub mod fixed_expense;
pub mod ingredient;
pub mod packaging;
pub mod recipe;
pub mod recipe_ingredient;

// Re-export specific types to avoid conflicts
pub use business_profile::{
    Column as BusinessProfileColumn, Entity as BusinessProfile, Model as BusinessProfileModel,
};
pub use fixed_expense::{
    Column as FixedExpenseColumn, Entity as FixedExpense, Model as FixedExpenseModel,
};
pub use ingredient::{
    Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel, Unit,
};
pub use packaging::{Column as PackagingColumn, Entity as Packaging, Model as PackagingModel};
pub use recipe::{Column as RecipeColumn, Entity as Recipe, Model as RecipeModel};
pub use recipe_ingredient::{
    Column as RecipeIngredientColumn, Entity as RecipeIngredient, Model as RecipeIngredientModel,
};
