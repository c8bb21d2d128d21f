use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, Meal};

pub(crate) const BUILTIN_FOODS: &str = include_str!("../../data/foods.json");
pub(crate) const BUILTIN_MEALS: &str = include_str!("../../data/meals.json");

/// Parse and validate a food table.
///
/// Ids must be unique and every entry must have a positive reference amount,
/// a positive common serving and non-negative nutrition.
pub fn parse_foods(json: &str) -> Result<Vec<FoodItem>> {
    let foods: Vec<FoodItem> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for food in &foods {
        if !seen.insert(food.id.as_str()) {
            return Err(PlannerError::DataInvariantViolation(format!(
                "duplicate food id '{}'",
                food.id
            )));
        }
        if !food.is_valid() {
            return Err(PlannerError::DataInvariantViolation(format!(
                "invalid food entry '{}': {}",
                food.id,
                food.debug_string()
            )));
        }
    }

    Ok(foods)
}

/// Parse and validate the meal template table.
pub fn parse_meals(json: &str) -> Result<Vec<Meal>> {
    let meals: Vec<Meal> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for meal in &meals {
        if !seen.insert(meal.id.as_str()) {
            return Err(PlannerError::DataInvariantViolation(format!(
                "duplicate meal template id '{}'",
                meal.id
            )));
        }
        if !meal.total_nutrition.is_valid() {
            return Err(PlannerError::DataInvariantViolation(format!(
                "meal template '{}' has invalid nutrition",
                meal.id
            )));
        }
        if let Some(component) = meal.components.iter().find(|c| !c.is_valid()) {
            return Err(PlannerError::DataInvariantViolation(format!(
                "meal template '{}' has an invalid component '{}'",
                meal.id, component.name
            )));
        }
    }

    Ok(meals)
}

/// Load a food table from a JSON file.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    parse_foods(&content)
}

/// Load meal templates from a JSON file.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    parse_meals(&content)
}
