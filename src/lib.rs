pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::Catalog;
pub use error::{PlannerError, Result};
pub use models::{FoodItem, Meal, MealTargets, NutritionProfile, SelectedItem};
pub use state::PlanSession;
