use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{
    FoodItem, FoodSelection, Macro, Meal, MealTargets, MealType, NutritionProfile, SelectedItem,
    TargetPreset, parse_target_input,
};
use crate::planner::{
    GeneratedMeals, MacroProgress, MealRatios, SuggestionOutcome, aggregate,
    generate_meal_options, macro_progress, suggest,
};

/// One user's day: targets plus the ordered list of chosen foods and meals.
///
/// Totals are never stored; every read recomputes them from the list.
#[derive(Debug, Clone, Default)]
pub struct PlanSession {
    targets: MealTargets,
    items: Vec<SelectedItem>,
    ratios: MealRatios,
    /// Bumped on every meal generation so each batch gets fresh ids.
    generation: u64,
}

impl PlanSession {
    pub fn new(targets: MealTargets) -> Self {
        Self {
            targets,
            ..Default::default()
        }
    }

    pub fn targets(&self) -> &MealTargets {
        &self.targets
    }

    /// Replace the targets wholesale.
    pub fn set_targets(&mut self, targets: MealTargets) {
        tracing::debug!(?targets, "targets replaced");
        self.targets = targets;
    }

    pub fn apply_preset(&mut self, preset: &TargetPreset) {
        tracing::debug!(preset = preset.name, "preset applied");
        self.set_targets(preset.targets);
    }

    /// Set one target from free text; unusable input becomes 0.
    pub fn set_target_input(&mut self, nutrient: Macro, input: &str) {
        let mut targets = self.targets;
        targets.set(nutrient, parse_target_input(input));
        self.set_targets(targets);
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a food at `amount`. Non-positive amounts are rejected and leave
    /// the list untouched.
    pub fn add_food(&mut self, food: &FoodItem, amount: f64) -> Result<&SelectedItem> {
        let selection = FoodSelection::new(food.clone(), amount)?;
        tracing::debug!(food = %food.id, amount, "food added");
        self.items.push(SelectedItem::Food(selection));
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn add_meal(&mut self, meal: Meal) {
        tracing::debug!(meal = %meal.id, "meal added");
        self.items.push(SelectedItem::Meal(meal));
    }

    /// Remove the entry at `index`. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<SelectedItem> {
        if index < self.items.len() {
            let removed = self.items.remove(index);
            tracing::debug!(index, item = removed.id(), "item removed");
            Some(removed)
        } else {
            tracing::debug!(index, "remove ignored, no such index");
            None
        }
    }

    /// Remove every meal with `id`, returning how many were removed.
    /// Unknown ids remove nothing.
    pub fn remove_meal(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items
            .retain(|item| !matches!(item, SelectedItem::Meal(meal) if meal.id == id));
        let removed = before - self.items.len();
        tracing::debug!(id, removed, "meal removal");
        removed
    }

    pub fn clear(&mut self) {
        tracing::debug!(count = self.items.len(), "plan cleared");
        self.items.clear();
    }

    /// Meals of one type, in insertion order.
    pub fn meals_of_type(&self, meal_type: MealType) -> Vec<&Meal> {
        self.items
            .iter()
            .filter_map(SelectedItem::as_meal)
            .filter(|m| m.meal_type == meal_type)
            .collect()
    }

    pub fn totals(&self) -> NutritionProfile {
        aggregate(self.items.iter().map(SelectedItem::nutrition))
    }

    pub fn progress(&self) -> Vec<MacroProgress> {
        macro_progress(&self.targets, &self.totals())
    }

    pub fn suggestions<'a>(&self, catalog: &'a Catalog) -> SuggestionOutcome<'a> {
        suggest(&self.targets, &self.totals(), catalog.foods()).into()
    }

    pub fn generate_meals(&mut self, catalog: &Catalog) -> GeneratedMeals {
        self.generation += 1;
        generate_meal_options(&self.targets, &self.ratios, catalog, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::PRESETS;

    #[test]
    fn test_add_then_remove_restores_state() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();
        session.add_food(catalog.food("oats").unwrap(), 40.0).unwrap();

        let items_before = session.items().to_vec();
        let totals_before = session.totals();

        session
            .add_food(catalog.food("salmon").unwrap(), 120.0)
            .unwrap();
        assert_eq!(session.len(), 2);

        session.remove_at(1);
        assert_eq!(session.items(), items_before.as_slice());
        assert_eq!(session.totals(), totals_before);
    }

    #[test]
    fn test_invalid_amount_leaves_list_untouched() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();

        let err = session.add_food(catalog.food("tofu").unwrap(), 0.0);
        assert!(matches!(err, Err(PlannerError::InvalidArgument(_))));
        assert!(session.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();
        session.add_food(catalog.food("tofu").unwrap(), 100.0).unwrap();

        assert!(session.remove_at(5).is_none());
        assert_eq!(session.remove_meal("lunch-1-1"), 0);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_same_food_twice_is_allowed() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();
        let eggs = catalog.food("eggs").unwrap();
        session.add_food(eggs, 50.0).unwrap();
        session.add_food(eggs, 50.0).unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.totals().calories, 156.0);
    }

    #[test]
    fn test_remove_meal_removes_every_copy() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();
        let meals = session.generate_meals(&catalog);

        let parfait = meals.breakfast[1].clone();
        session.add_meal(parfait.clone());
        session.add_meal(meals.lunch[0].clone());
        session.add_meal(parfait.clone());

        assert_eq!(session.meals_of_type(MealType::Breakfast).len(), 2);
        assert_eq!(session.remove_meal(&parfait.id), 2);
        assert_eq!(session.len(), 1);
        assert!(session.meals_of_type(MealType::Breakfast).is_empty());
    }

    #[test]
    fn test_generations_get_distinct_ids() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();
        let first = session.generate_meals(&catalog);
        let second = session.generate_meals(&catalog);
        assert_ne!(first.breakfast[0].id, second.breakfast[0].id);
    }

    #[test]
    fn test_meal_totals_and_clear() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = PlanSession::default();
        let meals = session.generate_meals(&catalog);
        session.add_meal(meals.breakfast[0].clone());
        session.add_meal(meals.dinner[1].clone());

        let totals = session.totals();
        assert_eq!(totals.calories, 547.0 + 476.0);

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.totals(), NutritionProfile::zero());
    }

    #[test]
    fn test_target_editing() {
        let mut session = PlanSession::default();
        session.apply_preset(&PRESETS[3]);
        assert_eq!(session.targets().calories, 3000.0);

        session.set_target_input(Macro::Protein, "abc");
        assert_eq!(session.targets().protein, 0.0);
        assert_eq!(session.targets().carbs, 300.0);

        session.set_target_input(Macro::Carbs, "220");
        assert_eq!(session.targets().carbs, 220.0);
    }

    #[test]
    fn test_suggestions_close_to_target_without_vegetables() {
        let catalog = Catalog::from_json(
            r#"[{"id": "tofu", "name": "Tofu", "category": "Protein",
                 "nutrition": {"calories": 144, "protein": 17, "carbs": 3, "fat": 9},
                 "common_serving": {"amount": 100, "label": "g"}}]"#,
            "[]",
        )
        .unwrap();
        let mut session = PlanSession::new(MealTargets::new(2000.0, 100.0, 150.0, 70.0));
        assert!(matches!(
            session.suggestions(&catalog),
            SuggestionOutcome::Foods(_)
        ));

        session
            .add_food(catalog.food("tofu").unwrap(), 600.0)
            .unwrap();
        session.set_targets(MealTargets::new(800.0, 100.0, 18.0, 54.0));
        assert_eq!(
            session.suggestions(&catalog),
            SuggestionOutcome::CloseToTarget
        );
    }
}
