use crate::models::{Category, FoodItem, Macro, MealTargets, NutritionProfile};
use crate::planner::calculations::remaining;
use crate::planner::constants::*;

/// Thresholds for suggesting foods of one category to close one macro gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapRule {
    pub nutrient: Macro,
    pub category: Category,
    /// Only act when the remaining gap is strictly above this.
    pub trigger: f64,
    /// Only consider foods with strictly more of the nutrient per 100 units.
    pub density_floor: f64,
    pub amount_cap: f64,
    /// Drop suggestions whose capped amount is below this.
    pub min_amount: f64,
    /// Reason prefix, e.g. "High protein".
    pub label: &'static str,
}

/// Knobs for [`suggest_with`]. Defaults come from the planner constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRules {
    /// Applied in order; output keeps this order.
    pub gaps: Vec<GapRule>,
    pub vegetable_count: usize,
    pub vegetable_amount: f64,
    pub max_suggestions: usize,
}

impl Default for SuggestionRules {
    fn default() -> Self {
        Self {
            gaps: vec![
                GapRule {
                    nutrient: Macro::Protein,
                    category: Category::Protein,
                    trigger: PROTEIN_GAP_TRIGGER,
                    density_floor: PROTEIN_DENSITY_FLOOR,
                    amount_cap: PROTEIN_AMOUNT_CAP,
                    min_amount: PROTEIN_MIN_AMOUNT,
                    label: "High protein",
                },
                GapRule {
                    nutrient: Macro::Carbs,
                    category: Category::Carbs,
                    trigger: CARB_GAP_TRIGGER,
                    density_floor: CARB_DENSITY_FLOOR,
                    amount_cap: CARB_AMOUNT_CAP,
                    min_amount: CARB_MIN_AMOUNT,
                    label: "Good carb source",
                },
                GapRule {
                    nutrient: Macro::Fat,
                    category: Category::Fats,
                    trigger: FAT_GAP_TRIGGER,
                    density_floor: FAT_DENSITY_FLOOR,
                    amount_cap: FAT_AMOUNT_CAP,
                    min_amount: FAT_MIN_AMOUNT,
                    label: "Healthy fats",
                },
            ],
            vegetable_count: VEGETABLE_SUGGESTIONS,
            vegetable_amount: VEGETABLE_AMOUNT,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

/// A recommended food and amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    pub food: &'a FoodItem,
    pub amount: f64,
    pub reason: String,
}

impl Suggestion<'_> {
    /// Nutrition of the suggested amount.
    pub fn nutrition(&self) -> NutritionProfile {
        self.food.nutrition_for(self.amount)
    }
}

/// Suggestions, or the explicit "already close to target" state.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome<'a> {
    Foods(Vec<Suggestion<'a>>),
    CloseToTarget,
}

impl<'a> From<Vec<Suggestion<'a>>> for SuggestionOutcome<'a> {
    fn from(suggestions: Vec<Suggestion<'a>>) -> Self {
        if suggestions.is_empty() {
            SuggestionOutcome::CloseToTarget
        } else {
            SuggestionOutcome::Foods(suggestions)
        }
    }
}

/// Suggest foods using the default rules.
pub fn suggest<'a>(
    targets: &MealTargets,
    totals: &NutritionProfile,
    foods: &'a [FoodItem],
) -> Vec<Suggestion<'a>> {
    suggest_with(targets, totals, foods, &SuggestionRules::default())
}

/// Greedy single pass over the catalog.
///
/// For each gap rule whose remaining gap exceeds its trigger, every matching
/// food gets the amount that would close the gap on its own, capped and
/// filtered by the minimum. The first vegetables in catalog order follow
/// unconditionally, and the list is truncated to `max_suggestions`. The result
/// does not try to hit targets exactly or minimize the number of foods.
pub fn suggest_with<'a>(
    targets: &MealTargets,
    totals: &NutritionProfile,
    foods: &'a [FoodItem],
    rules: &SuggestionRules,
) -> Vec<Suggestion<'a>> {
    let gap = remaining(targets, totals);
    let mut suggestions = Vec::new();

    for rule in &rules.gaps {
        let needed = gap.get(rule.nutrient);
        if needed <= rule.trigger {
            continue;
        }

        for food in foods.iter().filter(|f| f.category == rule.category) {
            let density = food.nutrition_per_100.get(rule.nutrient);
            if density <= rule.density_floor {
                continue;
            }

            let needed_amount = (needed / density * food.reference_amount).ceil();
            let amount = needed_amount.min(rule.amount_cap);
            if amount < rule.min_amount {
                continue;
            }

            suggestions.push(Suggestion {
                food,
                amount,
                reason: format!(
                    "{} ({}g per {}{})",
                    rule.label, density, food.reference_amount, food.reference_unit
                ),
            });
        }
    }

    suggestions.extend(
        foods
            .iter()
            .filter(|f| f.category == Category::Vegetables)
            .take(rules.vegetable_count)
            .map(|food| Suggestion {
                food,
                amount: rules.vegetable_amount,
                reason: "Rich in vitamins and minerals".to_string(),
            }),
    );

    suggestions.truncate(rules.max_suggestions);

    tracing::debug!(
        remaining_protein = gap.protein,
        remaining_carbs = gap.carbs,
        remaining_fat = gap.fat,
        count = suggestions.len(),
        "generated suggestions"
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Serving;

    fn food(id: &str, category: Category, nutrition: NutritionProfile) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            nutrition_per_100: nutrition,
            reference_amount: 100.0,
            reference_unit: "g".to_string(),
            common_serving: Serving {
                amount: 100.0,
                label: "g".to_string(),
            },
        }
    }

    fn ids(suggestions: &[Suggestion]) -> Vec<String> {
        suggestions.iter().map(|s| s.food.id.clone()).collect()
    }

    #[test]
    fn test_protein_gap_uses_ceiling_and_cap() {
        let foods = vec![food(
            "chicken",
            Category::Protein,
            NutritionProfile::new(165.0, 31.0, 0.0, 3.6),
        )];
        let targets = MealTargets::new(2000.0, 100.0, 0.0, 0.0);

        // 30g missing: ceil(30 / 31 * 100) = 97
        let totals = NutritionProfile::new(0.0, 70.0, 0.0, 0.0);
        let s = suggest(&targets, &totals, &foods);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].amount, 97.0);
        assert_eq!(s[0].reason, "High protein (31g per 100g)");

        // 80g missing: 259 capped at 200
        let totals = NutritionProfile::new(0.0, 20.0, 0.0, 0.0);
        assert_eq!(suggest(&targets, &totals, &foods)[0].amount, 200.0);
    }

    #[test]
    fn test_below_minimum_amount_dropped() {
        // 12g missing from a 31g/100g source needs 39g, under the 50g floor
        let foods = vec![food(
            "chicken",
            Category::Protein,
            NutritionProfile::new(165.0, 31.0, 0.0, 3.6),
        )];
        let targets = MealTargets::new(0.0, 100.0, 0.0, 0.0);
        let totals = NutritionProfile::new(0.0, 88.0, 0.0, 0.0);
        assert!(suggest(&targets, &totals, &foods).is_empty());
    }

    #[test]
    fn test_trigger_is_strict() {
        let foods = vec![food(
            "oats",
            Category::Carbs,
            NutritionProfile::new(389.0, 17.0, 66.0, 7.0),
        )];
        let targets = MealTargets::new(0.0, 0.0, 115.0, 0.0);

        // Exactly 15g missing does not trigger
        let totals = NutritionProfile::new(0.0, 0.0, 100.0, 0.0);
        assert!(suggest(&targets, &totals, &foods).is_empty());

        // 16g missing: ceil(16 / 66 * 100) = 25, below the 30g floor
        let totals = NutritionProfile::new(0.0, 0.0, 99.0, 0.0);
        assert!(suggest(&targets, &totals, &foods).is_empty());

        // 40g missing: ceil(60.6) = 61
        let totals = NutritionProfile::new(0.0, 0.0, 75.0, 0.0);
        let s = suggest(&targets, &totals, &foods);
        assert_eq!(s[0].amount, 61.0);
        assert_eq!(s[0].reason, "Good carb source (66g per 100g)");
    }

    #[test]
    fn test_density_floor_is_strict() {
        let foods = vec![
            food("yogurt", Category::Protein, NutritionProfile::new(59.0, 10.0, 3.6, 0.4)),
            food("edge", Category::Protein, NutritionProfile::new(100.0, 15.0, 0.0, 0.0)),
            food("tofu", Category::Protein, NutritionProfile::new(144.0, 17.0, 3.0, 9.0)),
        ];
        let targets = MealTargets::new(0.0, 100.0, 0.0, 0.0);
        let s = suggest(&targets, &NutritionProfile::zero(), &foods);
        assert_eq!(ids(&s), vec!["tofu"]);
    }

    #[test]
    fn test_fat_cap_and_reason() {
        let foods = vec![food(
            "olive-oil",
            Category::Fats,
            NutritionProfile::new(884.0, 0.0, 0.0, 100.0),
        )];
        let targets = MealTargets::new(0.0, 0.0, 0.0, 70.0);
        let s = suggest(&targets, &NutritionProfile::zero(), &foods);
        assert_eq!(s[0].amount, 50.0);
        assert_eq!(s[0].reason, "Healthy fats (100g per 100g)");
    }

    #[test]
    fn test_vegetables_always_appended_and_truncated() {
        let foods = vec![
            food("broccoli", Category::Vegetables, NutritionProfile::new(34.0, 2.8, 7.0, 0.4)),
            food("spinach", Category::Vegetables, NutritionProfile::new(23.0, 2.9, 3.6, 0.4)),
            food("kale", Category::Vegetables, NutritionProfile::new(49.0, 4.3, 9.0, 0.9)),
        ];
        let targets = MealTargets::new(0.0, 0.0, 0.0, 0.0);
        let s = suggest(&targets, &NutritionProfile::zero(), &foods);

        assert_eq!(ids(&s), vec!["broccoli", "spinach"]);
        assert!(s.iter().all(|x| x.amount == 100.0));
        assert!(s.iter().all(|x| x.reason == "Rich in vitamins and minerals"));
    }

    #[test]
    fn test_outcome_from_empty() {
        assert_eq!(
            SuggestionOutcome::from(Vec::new()),
            SuggestionOutcome::CloseToTarget
        );
    }

    #[test]
    fn test_custom_rules() {
        let foods = vec![
            food("broccoli", Category::Vegetables, NutritionProfile::new(34.0, 2.8, 7.0, 0.4)),
            food("tofu", Category::Protein, NutritionProfile::new(144.0, 17.0, 3.0, 9.0)),
        ];
        let rules = SuggestionRules {
            vegetable_count: 0,
            max_suggestions: 1,
            ..Default::default()
        };
        let targets = MealTargets::new(0.0, 40.0, 0.0, 0.0);
        let s = suggest_with(&targets, &NutritionProfile::zero(), &foods, &rules);

        // ceil(40 / 17 * 100) = 236, capped at 200
        assert_eq!(ids(&s), vec!["tofu"]);
        assert_eq!(s[0].amount, 200.0);
    }
}
