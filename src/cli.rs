use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{PlannerError, Result};
use crate::models::{MealTargets, NutritionProfile, find_preset};

/// Macro Meal Planner: match foods and meals to daily macro targets.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Food table JSON replacing the built-in catalog.
    #[arg(long, global = true)]
    pub foods: Option<PathBuf>,

    /// Meal template JSON replacing the built-in templates.
    #[arg(long, global = true)]
    pub meals: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Build a day plan interactively.
    #[default]
    Plan,

    /// Search foods by name or category (blank lists everything).
    Search {
        query: Option<String>,
    },

    /// Show nutrition for an amount of a food.
    Scale {
        /// Food id or name.
        food: String,

        /// Amount in the food's reference unit (usually grams).
        amount: f64,
    },

    /// Suggest foods that close the gap to the targets.
    Suggest {
        #[command(flatten)]
        targets: TargetArgs,

        #[command(flatten)]
        eaten: EatenArgs,
    },

    /// Show the per-meal target split and meal options.
    Meals {
        #[command(flatten)]
        targets: TargetArgs,
    },

    /// Show the recipe of a meal template.
    Recipe {
        /// Template id or name.
        meal: String,
    },

    /// List target presets.
    Presets,
}

/// Targets from a preset, with optional per-macro overrides.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Starting preset (weight-loss, maintenance, muscle-gain, athletic).
    #[arg(long, default_value = "maintenance")]
    pub preset: String,

    #[arg(long)]
    pub calories: Option<f64>,

    #[arg(long)]
    pub protein: Option<f64>,

    #[arg(long)]
    pub carbs: Option<f64>,

    #[arg(long)]
    pub fat: Option<f64>,
}

impl TargetArgs {
    pub fn resolve(&self) -> Result<MealTargets> {
        let preset = find_preset(&self.preset)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown preset '{}'", self.preset)))?;

        let mut targets = preset.targets;
        let overrides = [
            (&mut targets.calories, self.calories),
            (&mut targets.protein, self.protein),
            (&mut targets.carbs, self.carbs),
            (&mut targets.fat, self.fat),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(PlannerError::InvalidInput(format!(
                        "targets must be non-negative, got {}",
                        value
                    )));
                }
                *field = value;
            }
        }
        Ok(targets)
    }
}

/// What has already been eaten today.
#[derive(Args, Debug, Clone)]
pub struct EatenArgs {
    #[arg(long, default_value_t = 0.0)]
    pub eaten_calories: f64,

    #[arg(long, default_value_t = 0.0)]
    pub eaten_protein: f64,

    #[arg(long, default_value_t = 0.0)]
    pub eaten_carbs: f64,

    #[arg(long, default_value_t = 0.0)]
    pub eaten_fat: f64,
}

impl EatenArgs {
    pub fn totals(&self) -> NutritionProfile {
        NutritionProfile::new(
            self.eaten_calories,
            self.eaten_protein,
            self.eaten_carbs,
            self.eaten_fat,
        )
    }
}
