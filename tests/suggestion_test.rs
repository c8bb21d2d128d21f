use macro_meal_planner_rs::catalog::Catalog;
use macro_meal_planner_rs::models::{MealTargets, NutritionProfile};
use macro_meal_planner_rs::planner::{SuggestionOutcome, suggest};

fn ids(outcome: &SuggestionOutcome) -> Vec<String> {
    match outcome {
        SuggestionOutcome::Foods(list) => list.iter().map(|s| s.food.id.clone()).collect(),
        SuggestionOutcome::CloseToTarget => Vec::new(),
    }
}

#[test]
fn test_large_gaps_fill_list_before_vegetables() {
    let catalog = Catalog::builtin().unwrap();
    let targets = MealTargets::new(2000.0, 100.0, 150.0, 70.0);
    let totals = NutritionProfile::new(500.0, 20.0, 50.0, 10.0);

    let suggestions = suggest(&targets, &totals, catalog.foods());
    assert_eq!(suggestions.len(), 6);

    // 80g protein from chicken needs 259g, capped at 200
    let chicken = &suggestions[0];
    assert_eq!(chicken.food.id, "chicken-breast");
    assert_eq!(chicken.amount, 200.0);
    assert_eq!(chicken.reason, "High protein (31g per 100g)");

    let outcome = SuggestionOutcome::from(suggestions);
    assert_eq!(
        ids(&outcome),
        vec!["chicken-breast", "salmon", "tofu", "brown-rice", "quinoa", "sweet-potato"]
    );
}

#[test]
fn test_carb_gap_only() {
    let catalog = Catalog::builtin().unwrap();
    let targets = MealTargets::new(2000.0, 100.0, 150.0, 70.0);
    let totals = NutritionProfile::new(0.0, 100.0, 50.0, 70.0);

    let suggestions = suggest(&targets, &totals, catalog.foods());
    let amounts: Vec<(&str, f64)> = suggestions
        .iter()
        .map(|s| (s.food.id.as_str(), s.amount))
        .collect();

    // ceil(100 / 66 * 100) = 152 for oats, the rest hit the cap
    assert_eq!(
        amounts,
        vec![
            ("brown-rice", 200.0),
            ("quinoa", 200.0),
            ("sweet-potato", 200.0),
            ("oats", 152.0),
            ("broccoli", 100.0),
            ("spinach", 100.0),
        ]
    );
}

#[test]
fn test_targets_met_still_suggests_vegetables() {
    let catalog = Catalog::builtin().unwrap();
    let targets = MealTargets::new(2000.0, 100.0, 150.0, 70.0);
    let totals = NutritionProfile::new(2100.0, 105.0, 160.0, 75.0);

    let outcome: SuggestionOutcome = suggest(&targets, &totals, catalog.foods()).into();
    assert_eq!(ids(&outcome), vec!["broccoli", "spinach"]);
}

#[test]
fn test_small_gaps_are_ignored() {
    let catalog = Catalog::builtin().unwrap();
    let targets = MealTargets::new(2000.0, 100.0, 150.0, 70.0);
    let totals = NutritionProfile::new(1900.0, 90.0, 135.0, 65.0);

    // Gaps sit exactly on the triggers, so only vegetables remain
    let suggestions = suggest(&targets, &totals, catalog.foods());
    assert!(
        suggestions
            .iter()
            .all(|s| s.reason == "Rich in vitamins and minerals")
    );
    assert_eq!(suggestions.len(), 2);
}

#[test]
fn test_catalog_without_vegetables_can_be_close_to_target() {
    let catalog = Catalog::from_json(
        r#"[{"id": "oats", "name": "Oats", "category": "Carbs",
             "nutrition": {"calories": 389, "protein": 17, "carbs": 66, "fat": 7},
             "common_serving": {"amount": 40, "label": "1/2 cup"}}]"#,
        "[]",
    )
    .unwrap();
    let targets = MealTargets::new(2000.0, 100.0, 150.0, 70.0);
    let totals = NutritionProfile::new(2000.0, 100.0, 150.0, 70.0);

    let outcome: SuggestionOutcome = suggest(&targets, &totals, catalog.foods()).into();
    assert_eq!(outcome, SuggestionOutcome::CloseToTarget);
}
