use std::fmt;

use crate::models::{Macro, MealTargets, NutritionProfile};
use crate::planner::constants::{STATUS_HIGH_ABOVE, STATUS_LOW_BELOW};

/// Sum profiles elementwise, starting from zero.
pub fn aggregate<'a, I>(items: I) -> NutritionProfile
where
    I: IntoIterator<Item = &'a NutritionProfile>,
{
    items.into_iter().sum()
}

/// Per-macro gap between targets and current totals, floored at zero.
pub fn remaining(targets: &MealTargets, totals: &NutritionProfile) -> MealTargets {
    MealTargets {
        calories: (targets.calories - totals.calories).max(0.0),
        protein: (targets.protein - totals.protein).max(0.0),
        carbs: (targets.carbs - totals.carbs).max(0.0),
        fat: (targets.fat - totals.fat).max(0.0),
    }
}

/// Percent of target reached, uncapped. A zero target yields 0.
pub fn progress_percentage_uncapped(current: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }
    // Multiply first so whole-number percentages stay exact.
    current * 100.0 / target
}

/// Percent of target reached, capped at 100 for progress bars.
pub fn progress_percentage(current: f64, target: f64) -> f64 {
    progress_percentage_uncapped(current, target).min(100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Low,
    Good,
    High,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Low => "low",
            ProgressStatus::Good => "good",
            ProgressStatus::High => "high",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify from an uncapped percentage: below 80 is low, 80 to 110
/// inclusive is good, above 110 is high.
pub fn status_for_percentage(percentage: f64) -> ProgressStatus {
    if percentage < STATUS_LOW_BELOW {
        ProgressStatus::Low
    } else if percentage <= STATUS_HIGH_ABOVE {
        ProgressStatus::Good
    } else {
        ProgressStatus::High
    }
}

pub fn classify_progress(current: f64, target: f64) -> ProgressStatus {
    status_for_percentage(progress_percentage_uncapped(current, target))
}

/// Progress of one macro toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProgress {
    pub nutrient: Macro,
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
    pub percentage_uncapped: f64,
    pub status: ProgressStatus,
}

impl MacroProgress {
    pub fn new(nutrient: Macro, current: f64, target: f64) -> Self {
        let percentage_uncapped = progress_percentage_uncapped(current, target);
        Self {
            nutrient,
            current,
            target,
            percentage: percentage_uncapped.min(100.0),
            percentage_uncapped,
            status: status_for_percentage(percentage_uncapped),
        }
    }

    /// Short status line such as "12% below target".
    pub fn summary(&self) -> String {
        match self.status {
            ProgressStatus::Low => format!(
                "{}% below target",
                (STATUS_LOW_BELOW - self.percentage).round()
            ),
            ProgressStatus::Good => "Perfect range".to_string(),
            ProgressStatus::High => {
                format!("{}% over target", (self.percentage_uncapped - 100.0).round())
            }
        }
    }
}

/// Progress rows for all four macros, in display order.
pub fn macro_progress(targets: &MealTargets, totals: &NutritionProfile) -> Vec<MacroProgress> {
    Macro::ALL
        .into_iter()
        .map(|m| MacroProgress::new(m, totals.get(m), targets.get(m)))
        .collect()
}
