use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_meal_planner_rs::catalog::Catalog;
use macro_meal_planner_rs::cli::{Cli, Command, EatenArgs, TargetArgs};
use macro_meal_planner_rs::error::{PlannerError, Result};
use macro_meal_planner_rs::interface::{
    Action, display_food_list, display_generated_meals, display_plan, display_presets,
    display_progress, display_recipe, display_scaled, display_suggestions, prompt_action,
    prompt_amount, prompt_food, prompt_meal, prompt_plan_item, prompt_preset, prompt_suggestion,
    prompt_target_edit, prompt_yes_no,
};
use macro_meal_planner_rs::models::SelectedItem;
use macro_meal_planner_rs::planner::{SuggestionOutcome, macro_progress, suggest};
use macro_meal_planner_rs::state::PlanSession;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over the verbosity flag.
fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "macro_meal_planner_rs=warn",
        1 => "macro_meal_planner_rs=info",
        _ => "macro_meal_planner_rs=debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.foods {
        Some(path) => Catalog::load(path, cli.meals.as_deref())?,
        None if cli.meals.is_some() => {
            return Err(PlannerError::InvalidInput(
                "--meals requires --foods".to_string(),
            ));
        }
        None => Catalog::builtin()?,
    };

    match cli.command.unwrap_or_default() {
        Command::Plan => cmd_plan(&catalog),
        Command::Search { query } => cmd_search(&catalog, query.as_deref().unwrap_or("")),
        Command::Scale { food, amount } => cmd_scale(&catalog, &food, amount),
        Command::Suggest { targets, eaten } => cmd_suggest(&catalog, &targets, &eaten),
        Command::Meals { targets } => cmd_meals(&catalog, &targets),
        Command::Recipe { meal } => {
            display_recipe(catalog.require_meal(&meal)?);
            Ok(())
        }
        Command::Presets => {
            display_presets();
            Ok(())
        }
    }
}

fn cmd_search(catalog: &Catalog, query: &str) -> Result<()> {
    let results = catalog.search(query);
    display_food_list(&results, "Foods");
    Ok(())
}

fn cmd_scale(catalog: &Catalog, name: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(PlannerError::InvalidArgument(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    let food = catalog.require_food(name)?;
    display_scaled(food, amount);
    Ok(())
}

fn cmd_suggest(catalog: &Catalog, targets: &TargetArgs, eaten: &EatenArgs) -> Result<()> {
    let targets = targets.resolve()?;
    let totals = eaten.totals();
    if !totals.is_valid() {
        return Err(PlannerError::InvalidInput(
            "eaten amounts must be non-negative".to_string(),
        ));
    }

    println!();
    println!("--- Progress ---");
    display_progress(&macro_progress(&targets, &totals));

    let outcome: SuggestionOutcome = suggest(&targets, &totals, catalog.foods()).into();
    display_suggestions(&outcome);
    Ok(())
}

fn cmd_meals(catalog: &Catalog, targets: &TargetArgs) -> Result<()> {
    let mut session = PlanSession::new(targets.resolve()?);
    println!("Generating meals...");
    let meals = session.generate_meals(catalog);
    display_generated_meals(&meals);
    Ok(())
}

/// Interactive planning loop.
fn cmd_plan(catalog: &Catalog) -> Result<()> {
    let mut session = PlanSession::default();

    println!("Loaded {} foods", catalog.len());
    if let Some(preset) = prompt_preset()? {
        session.apply_preset(preset);
    }
    display_plan(&session);

    loop {
        match prompt_action()? {
            Action::ViewPlan => display_plan(&session),
            Action::AddFood => add_food(catalog, &mut session)?,
            Action::AddSuggestion => add_suggestion(catalog, &mut session)?,
            Action::GenerateMeals => add_meals(catalog, &mut session)?,
            Action::ViewRecipe => {
                if let Some(index) = prompt_plan_item(&session, "View which item?")? {
                    match &session.items()[index] {
                        SelectedItem::Meal(meal) => display_recipe(meal),
                        SelectedItem::Food(selection) => {
                            display_scaled(selection.food(), selection.amount())
                        }
                    }
                }
            }
            Action::RemoveItem => {
                if let Some(index) = prompt_plan_item(&session, "Remove which item?")? {
                    let meal_id = session.items()[index].as_meal().map(|m| m.id.clone());
                    match meal_id {
                        Some(id) => {
                            let removed = session.remove_meal(&id);
                            println!("Removed {} meal(s).", removed);
                        }
                        None => {
                            if let Some(item) = session.remove_at(index) {
                                println!("Removed: {}", item.name());
                            }
                        }
                    }
                }
            }
            Action::ClearPlan => {
                if !session.is_empty() && prompt_yes_no("Clear all items?", false)? {
                    session.clear();
                    println!("Plan cleared.");
                }
            }
            Action::ChoosePreset => {
                if let Some(preset) = prompt_preset()? {
                    session.apply_preset(preset);
                    println!("Targets set to {}.", preset.name);
                }
            }
            Action::EditTarget => {
                let (nutrient, input) = prompt_target_edit(&session)?;
                session.set_target_input(nutrient, &input);
                println!(
                    "{} target is now {} {}.",
                    nutrient,
                    session.targets().get(nutrient),
                    nutrient.unit()
                );
            }
            Action::Quit => break,
        }
    }

    display_plan(&session);
    Ok(())
}

fn add_food(catalog: &Catalog, session: &mut PlanSession) -> Result<()> {
    let Some(food) = prompt_food(catalog)? else {
        return Ok(());
    };
    let amount = prompt_amount(food)?;

    match session.add_food(food, amount) {
        Ok(item) => println!("Added: {}", item.name()),
        Err(PlannerError::InvalidArgument(msg)) => println!("Not added: {}", msg),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn add_suggestion(catalog: &Catalog, session: &mut PlanSession) -> Result<()> {
    let outcome = session.suggestions(catalog);
    display_suggestions(&outcome);

    let SuggestionOutcome::Foods(suggestions) = outcome else {
        return Ok(());
    };

    let labels: Vec<String> = suggestions
        .iter()
        .map(|s| format!("{} {}{} - {}", s.food.name, s.amount, s.food.reference_unit, s.reason))
        .collect();

    if let Some(index) = prompt_suggestion(&labels)? {
        let chosen = &suggestions[index];
        let item = session.add_food(chosen.food, chosen.amount)?;
        println!("Added: {}", item.name());
    }
    Ok(())
}

fn add_meals(catalog: &Catalog, session: &mut PlanSession) -> Result<()> {
    println!("Generating meals...");
    let meals = session.generate_meals(catalog);
    display_generated_meals(&meals);

    while let Some(meal) = prompt_meal(&meals)? {
        println!("Added: {}", meal.name);
        session.add_meal(meal);
    }
    Ok(())
}
