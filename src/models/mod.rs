pub mod food;
pub mod meal;
pub mod nutrition;
pub mod plan;
pub mod targets;

pub use food::{Category, FoodItem, Serving};
pub use meal::{
    Difficulty, Meal, MealComponent, MealType, RecipeDetail, RecipeIngredient, RecipeStep,
};
pub use nutrition::{Macro, NutritionProfile};
pub use plan::{FoodSelection, SelectedItem};
pub use targets::{MealTargets, PRESETS, TargetPreset, find_preset, parse_target_input};
