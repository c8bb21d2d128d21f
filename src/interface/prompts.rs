use dialoguer::{Confirm, Input, Select};

use crate::catalog::{Catalog, closest_names};
use crate::error::Result;
use crate::models::{FoodItem, Macro, Meal, PRESETS, TargetPreset};
use crate::planner::GeneratedMeals;
use crate::state::PlanSession;

/// Top-level actions of the interactive planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChoosePreset,
    EditTarget,
    AddFood,
    AddSuggestion,
    GenerateMeals,
    ViewRecipe,
    RemoveItem,
    ViewPlan,
    ClearPlan,
    Quit,
}

const ACTIONS: [(Action, &str); 10] = [
    (Action::ViewPlan, "View plan and progress"),
    (Action::AddFood, "Search and add a food"),
    (Action::AddSuggestion, "Add a suggested food"),
    (Action::GenerateMeals, "Generate meal options"),
    (Action::ViewRecipe, "View a recipe from the plan"),
    (Action::RemoveItem, "Remove an item"),
    (Action::ClearPlan, "Clear the plan"),
    (Action::ChoosePreset, "Choose a target preset"),
    (Action::EditTarget, "Edit a single target"),
    (Action::Quit, "Quit"),
];

pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ACTIONS[selection].0)
}

/// Prompt for a preset. `None` keeps the current targets.
pub fn prompt_preset() -> Result<Option<&'static TargetPreset>> {
    let mut options: Vec<String> = PRESETS
        .iter()
        .map(|p| {
            format!(
                "{} - {} ({} cal, {}g protein)",
                p.name, p.description, p.targets.calories, p.targets.protein
            )
        })
        .collect();
    options.push("Keep current targets".to_string());

    let selection = Select::new()
        .with_prompt("Choose a target preset")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(PRESETS.get(selection))
}

/// Prompt for which macro to edit and its new value, as raw text.
pub fn prompt_target_edit(session: &PlanSession) -> Result<(Macro, String)> {
    let labels: Vec<String> = Macro::ALL
        .iter()
        .map(|m| format!("{} ({} {})", m, session.targets().get(*m), m.unit()))
        .collect();

    let selection = Select::new()
        .with_prompt("Which target?")
        .items(&labels)
        .default(0)
        .interact()?;
    let nutrient = Macro::ALL[selection];

    let input: String = Input::new()
        .with_prompt(format!("New {} target ({})", nutrient, nutrient.unit()))
        .allow_empty(true)
        .interact_text()?;

    Ok((nutrient, input))
}

fn pick_food<'a>(prompt: &str, foods: &[&'a FoodItem]) -> Result<Option<&'a FoodItem>> {
    let mut options: Vec<String> = foods
        .iter()
        .map(|f| {
            format!(
                "{} [{}] - {} cal per {}{}",
                f.name,
                f.category,
                f.nutrition_per_100.calories,
                f.reference_amount,
                f.reference_unit
            )
        })
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(foods.get(selection).copied())
}

/// Search the catalog and let the user pick a food.
///
/// Falls back to close name matches when the search finds nothing.
pub fn prompt_food(catalog: &Catalog) -> Result<Option<&FoodItem>> {
    let query: String = Input::new()
        .with_prompt("Search foods (e.g. chicken, rice, avocado; blank for all)")
        .allow_empty(true)
        .interact_text()?;

    let results = catalog.search(&query);
    if !results.is_empty() {
        return pick_food("Select a food", &results);
    }

    let close = closest_names(catalog.foods(), &query, 5);
    match close.as_slice() {
        [] => {
            println!("No matching food found for '{}'", query.trim());
            Ok(None)
        }
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*only))
        }
        _ => pick_food("Which did you mean?", &close),
    }
}

/// Prompt for an amount, defaulting to the food's common serving.
///
/// Non-numeric input reads as 0, which the session then rejects.
pub fn prompt_amount(food: &FoodItem) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Amount of {} in {} ({})",
            food.name, food.reference_unit, food.common_serving.label
        ))
        .default(food.common_serving.amount.to_string())
        .interact_text()?;

    Ok(input.trim().parse().unwrap_or(0.0))
}

/// Pick one of the generated meals. `None` adds nothing.
pub fn prompt_meal(meals: &GeneratedMeals) -> Result<Option<Meal>> {
    let all: Vec<&Meal> = meals.all().collect();
    let mut options: Vec<String> = all
        .iter()
        .map(|m| {
            format!(
                "{:<9} {} ({} cal, {}g protein)",
                m.meal_type, m.name, m.total_nutrition.calories, m.total_nutrition.protein
            )
        })
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Add a meal to your plan")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(all.get(selection).map(|m| (*m).clone()))
}

/// Pick an entry of the plan by index.
pub fn prompt_plan_item(session: &PlanSession, prompt: &str) -> Result<Option<usize>> {
    let mut options: Vec<String> = session
        .items()
        .iter()
        .map(|item| format!("{} ({} cal)", item.name(), item.nutrition().calories))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < session.len()).then_some(selection))
}

/// Pick a suggestion by position. `None` cancels.
pub fn prompt_suggestion(labels: &[String]) -> Result<Option<usize>> {
    let mut options = labels.to_vec();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Add which suggestion?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < labels.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
