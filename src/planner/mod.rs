pub mod calculations;
pub mod constants;
pub mod meal_split;
pub mod suggestions;

pub use calculations::{
    MacroProgress, ProgressStatus, aggregate, classify_progress, macro_progress,
    progress_percentage, progress_percentage_uncapped, remaining, status_for_percentage,
};
pub use constants::*;
pub use meal_split::{
    GeneratedMeals, MealRatios, TargetSplit, generate_meal_options, split_targets,
};
pub use suggestions::{
    GapRule, Suggestion, SuggestionOutcome, SuggestionRules, suggest, suggest_with,
};
