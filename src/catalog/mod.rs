mod loader;
mod search;

use std::path::Path;

pub use loader::{load_foods, load_meals, parse_foods, parse_meals};
pub use search::{FUZZY_MATCH_THRESHOLD, closest_names, foods_by_category, search};

use crate::error::{PlannerError, Result};
use crate::models::{Category, FoodItem, Meal, MealType};

/// Read-only food table and meal templates, validated on construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    meals: Vec<Meal>,
}

impl Catalog {
    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(loader::BUILTIN_FOODS, loader::BUILTIN_MEALS)
    }

    pub fn from_json(foods_json: &str, meals_json: &str) -> Result<Self> {
        Ok(Self::new(parse_foods(foods_json)?, parse_meals(meals_json)?))
    }

    /// Load a food table from disk, with meal templates from disk or the
    /// built-in set.
    pub fn load(foods_path: &Path, meals_path: Option<&Path>) -> Result<Self> {
        let foods = load_foods(foods_path)?;
        let meals = match meals_path {
            Some(path) => load_meals(path)?,
            None => parse_meals(loader::BUILTIN_MEALS)?,
        };
        Ok(Self::new(foods, meals))
    }

    fn new(foods: Vec<FoodItem>, meals: Vec<Meal>) -> Self {
        tracing::info!(
            foods = foods.len(),
            meal_templates = meals.len(),
            "catalog loaded"
        );
        Self { foods, meals }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn meal_templates(&self) -> &[Meal] {
        &self.meals
    }

    pub fn food(&self, id: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Look up a food by id or by name, ignoring case.
    pub fn food_by_name(&self, name: &str) -> Option<&FoodItem> {
        let wanted = name.trim().to_lowercase();
        self.foods
            .iter()
            .find(|f| f.id == wanted || f.name.to_lowercase() == wanted)
    }

    /// Like [`Catalog::food_by_name`] but an unknown name is an error.
    pub fn require_food(&self, name: &str) -> Result<&FoodItem> {
        self.food_by_name(name)
            .ok_or_else(|| PlannerError::FoodNotFound(name.to_string()))
    }

    /// Look up a meal template by id or by name, ignoring case.
    pub fn meal_template(&self, name: &str) -> Option<&Meal> {
        let wanted = name.trim().to_lowercase();
        self.meals
            .iter()
            .find(|m| m.id == wanted || m.name.to_lowercase() == wanted)
    }

    pub fn require_meal(&self, name: &str) -> Result<&Meal> {
        self.meal_template(name)
            .ok_or_else(|| PlannerError::MealNotFound(name.to_string()))
    }

    pub fn search(&self, query: &str) -> Vec<&FoodItem> {
        search(&self.foods, query)
    }

    pub fn foods_by_category(&self, category: Category) -> Vec<&FoodItem> {
        foods_by_category(&self.foods, category)
    }

    pub fn templates_for(&self, meal_type: MealType) -> Vec<&Meal> {
        self.meals
            .iter()
            .filter(|m| m.meal_type == meal_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
