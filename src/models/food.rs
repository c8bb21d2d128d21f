use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::NutritionProfile;

/// Food grouping used by search and by the suggestion heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Protein,
    Carbs,
    Fats,
    Vegetables,
    Fruits,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Carbs => "Carbs",
            Category::Fats => "Fats",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

fn default_reference_amount() -> f64 {
    100.0
}

fn default_reference_unit() -> String {
    "g".to_string()
}

/// A typical portion, used as the default amount when adding the food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serving {
    pub amount: f64,
    pub label: String,
}

/// A catalog food with nutrition defined at its reference amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: Category,

    #[serde(rename = "nutrition")]
    pub nutrition_per_100: NutritionProfile,

    #[serde(default = "default_reference_amount")]
    pub reference_amount: f64,

    #[serde(default = "default_reference_unit")]
    pub reference_unit: String,

    pub common_serving: Serving,
}

impl FoodItem {
    /// Nutrition for `amount` reference units of this food.
    #[inline]
    pub fn nutrition_for(&self, amount: f64) -> NutritionProfile {
        self.nutrition_per_100.scale(amount, self.reference_amount)
    }

    /// Catalog invariants: positive reference and serving, valid profile.
    pub fn is_valid(&self) -> bool {
        self.reference_amount.is_finite()
            && self.reference_amount > 0.0
            && self.common_serving.amount.is_finite()
            && self.common_serving.amount > 0.0
            && self.nutrition_per_100.is_valid()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let n = &self.nutrition_per_100;
        format!(
            "{} [{}]: {} cal, P:{} C:{} F:{} per {}{}",
            self.name,
            self.category,
            n.calories,
            n.protein,
            n.carbs,
            n.fat,
            self.reference_amount,
            self.reference_unit
        )
    }
}
