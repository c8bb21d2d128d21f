use crate::models::{FoodItem, Meal, MealType, NutritionProfile, PRESETS, SelectedItem};
use crate::planner::{GeneratedMeals, MacroProgress, SuggestionOutcome, TargetSplit};
use crate::state::PlanSession;

fn nutrition_line(n: &NutritionProfile) -> String {
    format!(
        "{} cal | P {}g | C {}g | F {}g",
        n.calories.round(),
        (n.protein * 10.0).round() / 10.0,
        (n.carbs * 10.0).round() / 10.0,
        (n.fat * 10.0).round() / 10.0
    )
}

/// Display a list of foods with their per-reference nutrition.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let width = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for food in foods {
        println!(
            "  {:<width$}  {:<10}  {} per {}{}",
            food.name,
            food.category.as_str(),
            nutrition_line(&food.nutrition_per_100),
            food.reference_amount,
            food.reference_unit,
            width = width
        );
    }

    println!();
}

/// Display nutrition for one amount of a food.
pub fn display_scaled(food: &FoodItem, amount: f64) {
    println!(
        "{} ({}{}): {}",
        food.name,
        amount,
        food.reference_unit,
        nutrition_line(&food.nutrition_for(amount))
    );
}

pub fn display_presets() {
    println!();
    println!("=== Target Presets ===");
    println!();
    for preset in PRESETS.iter() {
        let t = preset.targets;
        println!(
            "  {:<12} {:<28} {} cal | P {}g | C {}g | F {}g",
            preset.name, preset.description, t.calories, t.protein, t.carbs, t.fat
        );
    }
    println!();
}

/// Display per-macro progress bars with status text.
pub fn display_progress(rows: &[MacroProgress]) {
    const BAR_WIDTH: usize = 20;

    for row in rows {
        let filled = ((row.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "#".repeat(filled.min(BAR_WIDTH)),
            "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        println!(
            "  {:<9} [{}] {:>7} / {} {:<5} {:>4} ({})",
            row.nutrient.name(),
            bar,
            (row.current * 10.0).round() / 10.0,
            row.target,
            row.nutrient.unit(),
            row.status,
            row.summary()
        );
    }
}

/// Display the selection list and progress toward targets.
pub fn display_plan(session: &PlanSession) {
    println!();
    println!("=== Your Plan ===");
    println!();

    if session.is_empty() {
        println!("No foods or meals added yet.");
    } else {
        for (i, item) in session.items().iter().enumerate() {
            let detail = match item {
                SelectedItem::Food(selection) => format!(
                    "{}{}",
                    selection.amount(),
                    selection.food().reference_unit
                ),
                SelectedItem::Meal(meal) => meal.meal_type.to_string(),
            };
            println!(
                "{:>3}. {} ({}) - {}",
                i + 1,
                item.name(),
                detail,
                nutrition_line(item.nutrition())
            );
        }
    }

    println!();
    println!("--- Progress ---");
    display_progress(&session.progress());
    println!();
    println!("Total: {}", nutrition_line(&session.totals()));
    println!();
}

/// Display suggestions, or the close-to-target message.
pub fn display_suggestions(outcome: &SuggestionOutcome) {
    println!();
    match outcome {
        SuggestionOutcome::CloseToTarget => {
            println!("You're close to your targets. Nothing to suggest right now.");
        }
        SuggestionOutcome::Foods(suggestions) => {
            println!("=== Suggested Foods ===");
            println!();
            for (i, s) in suggestions.iter().enumerate() {
                println!(
                    "{:>3}. {} - {}{}: {}",
                    i + 1,
                    s.food.name,
                    s.amount,
                    s.food.reference_unit,
                    nutrition_line(&s.nutrition())
                );
                println!("       {}", s.reason);
            }
        }
    }
    println!();
}

pub fn display_split(split: &TargetSplit) {
    for meal_type in MealType::ALL {
        let t = split.get(meal_type);
        println!(
            "  {:<10} {} cal | P {}g | C {}g | F {}g",
            meal_type, t.calories, t.protein, t.carbs, t.fat
        );
    }
}

pub fn display_meal(meal: &Meal) {
    println!("  {} [{}]", meal.name, meal.id);
    println!("      {}", nutrition_line(&meal.total_nutrition));
    let components: Vec<String> = meal
        .components
        .iter()
        .map(|c| format!("{} {}g", c.name, c.amount))
        .collect();
    println!("      {}", components.join(", "));
    if let Some(recipe) = &meal.recipe {
        println!(
            "      Prep {}min | Cook {}min | Serves {} | {:?}",
            recipe.prep_minutes, recipe.cook_minutes, recipe.servings, recipe.difficulty
        );
    }
}

/// Display generated meal options grouped by meal type.
pub fn display_generated_meals(meals: &GeneratedMeals) {
    println!();
    println!("=== Suggested split of your targets ===");
    display_split(&meals.split);

    for meal_type in MealType::ALL {
        println!();
        println!("--- {} options ---", meal_type);
        for meal in meals.get(meal_type) {
            display_meal(meal);
        }
    }
    println!();
}

/// Display the full recipe of a meal, if it has one.
pub fn display_recipe(meal: &Meal) {
    let Some(recipe) = &meal.recipe else {
        println!("No recipe available for {}.", meal.name);
        return;
    };

    println!();
    println!("=== {} ===", meal.name);
    println!("{}", recipe.description);
    println!(
        "Prep {} min | Cook {} min | Serves {} | {:?}",
        recipe.prep_minutes, recipe.cook_minutes, recipe.servings, recipe.difficulty
    );
    println!("Nutrition: {}", nutrition_line(&meal.total_nutrition));
    if let Some(notes) = &recipe.nutrition_notes {
        println!("{}", notes);
    }

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        match &ingredient.notes {
            Some(notes) => println!("  - {} {} ({})", ingredient.amount, ingredient.item, notes),
            None => println!("  - {} {}", ingredient.amount, ingredient.item),
        }
    }

    println!();
    println!("Instructions:");
    for step in &recipe.instructions {
        match &step.time {
            Some(time) => println!("  {}. {} [{}]", step.step, step.instruction, time),
            None => println!("  {}. {}", step.step, step.instruction),
        }
    }

    if !recipe.tips.is_empty() {
        println!();
        println!("Tips:");
        for tip in &recipe.tips {
            println!("  * {}", tip);
        }
    }
    println!();
}
