use crate::catalog::Catalog;
use crate::models::{Meal, MealTargets, MealType};
use crate::planner::constants::{BREAKFAST_RATIO, DINNER_RATIO, LUNCH_RATIO};

/// Share of the daily targets given to each meal type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealRatios {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

impl Default for MealRatios {
    fn default() -> Self {
        Self {
            breakfast: BREAKFAST_RATIO,
            lunch: LUNCH_RATIO,
            dinner: DINNER_RATIO,
        }
    }
}

impl MealRatios {
    pub fn get(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }
}

/// Per-meal-type targets derived from the daily targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSplit {
    pub breakfast: MealTargets,
    pub lunch: MealTargets,
    pub dinner: MealTargets,
}

impl TargetSplit {
    pub fn get(&self, meal_type: MealType) -> &MealTargets {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }
}

fn scale_targets(targets: &MealTargets, ratio: f64) -> MealTargets {
    MealTargets {
        calories: (targets.calories * ratio).round(),
        protein: (targets.protein * ratio).round(),
        carbs: (targets.carbs * ratio).round(),
        fat: (targets.fat * ratio).round(),
    }
}

/// Split daily targets by meal type, rounding each field to an integer.
pub fn split_targets(targets: &MealTargets, ratios: &MealRatios) -> TargetSplit {
    TargetSplit {
        breakfast: scale_targets(targets, ratios.breakfast),
        lunch: scale_targets(targets, ratios.lunch),
        dinner: scale_targets(targets, ratios.dinner),
    }
}

/// Meal options for one day, grouped by type.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMeals {
    /// Advisory only; the meals below are not derived from it.
    pub split: TargetSplit,
    pub breakfast: Vec<Meal>,
    pub lunch: Vec<Meal>,
    pub dinner: Vec<Meal>,
}

impl GeneratedMeals {
    pub fn get(&self, meal_type: MealType) -> &[Meal] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    /// All options in breakfast, lunch, dinner order.
    pub fn all(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Meal> {
        self.all().find(|m| m.id == id)
    }
}

/// Stamp templates of one type with ids of the form `<type>-<n>-<stamp>`.
fn stamped_options(catalog: &Catalog, meal_type: MealType, stamp: u64) -> Vec<Meal> {
    catalog
        .templates_for(meal_type)
        .into_iter()
        .enumerate()
        .map(|(i, template)| template.with_id(format!("{}-{}-{}", meal_type, i + 1, stamp)))
        .collect()
}

/// Offer the catalog's meal templates for each meal type.
///
/// The target split is computed and returned for display, but template
/// nutrition is fixed data: changing targets never changes the meals.
pub fn generate_meal_options(
    targets: &MealTargets,
    ratios: &MealRatios,
    catalog: &Catalog,
    stamp: u64,
) -> GeneratedMeals {
    let split = split_targets(targets, ratios);
    tracing::debug!(?split, stamp, "generating meal options");

    GeneratedMeals {
        split,
        breakfast: stamped_options(catalog, MealType::Breakfast, stamp),
        lunch: stamped_options(catalog, MealType::Lunch, stamp),
        dinner: stamped_options(catalog, MealType::Dinner, stamp),
    }
}
