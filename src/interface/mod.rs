pub mod prompts;
pub mod render;

pub use prompts::{
    Action, prompt_action, prompt_amount, prompt_food, prompt_meal, prompt_plan_item,
    prompt_preset, prompt_suggestion, prompt_target_edit, prompt_yes_no,
};
pub use render::{
    display_food_list, display_generated_meals, display_plan, display_presets, display_progress,
    display_recipe, display_scaled, display_split, display_suggestions,
};
