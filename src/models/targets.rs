use serde::{Deserialize, Serialize};

use crate::models::Macro;

/// Daily macro goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MealTargets {
    fn default() -> Self {
        Self::new(2000.0, 100.0, 150.0, 70.0)
    }
}

impl MealTargets {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn get(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    pub fn set(&mut self, nutrient: Macro, value: f64) {
        match nutrient {
            Macro::Calories => self.calories = value,
            Macro::Protein => self.protein = value,
            Macro::Carbs => self.carbs = value,
            Macro::Fat => self.fat = value,
        }
    }
}

/// A named set of targets offered as a starting point.
#[derive(Debug, Clone, Copy)]
pub struct TargetPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub targets: MealTargets,
}

pub static PRESETS: [TargetPreset; 4] = [
    TargetPreset {
        name: "Weight Loss",
        description: "Moderate calorie deficit",
        targets: MealTargets::new(1500.0, 120.0, 100.0, 60.0),
    },
    TargetPreset {
        name: "Maintenance",
        description: "Balanced nutrition",
        targets: MealTargets::new(2000.0, 100.0, 150.0, 70.0),
    },
    TargetPreset {
        name: "Muscle Gain",
        description: "Higher protein & calories",
        targets: MealTargets::new(2500.0, 150.0, 200.0, 85.0),
    },
    TargetPreset {
        name: "Athletic",
        description: "High performance",
        targets: MealTargets::new(3000.0, 180.0, 300.0, 100.0),
    },
];

/// Find a preset by name, ignoring case, spaces, dashes and underscores.
pub fn find_preset(name: &str) -> Option<&'static TargetPreset> {
    let wanted = normalize_preset_name(name);
    PRESETS
        .iter()
        .find(|p| normalize_preset_name(p.name) == wanted)
}

fn normalize_preset_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Coerce free-text target input to a number.
///
/// Anything that is not a finite, non-negative number becomes 0.
pub fn parse_target_input(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => {
            tracing::warn!(input, "target input coerced to 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let t = MealTargets::default();
        assert_eq!(t, MealTargets::new(2000.0, 100.0, 150.0, 70.0));
        assert_eq!(t, find_preset("Maintenance").unwrap().targets);
    }

    #[test]
    fn test_find_preset_loose_name() {
        assert_eq!(find_preset("muscle-gain").unwrap().name, "Muscle Gain");
        assert_eq!(find_preset("WEIGHT_LOSS").unwrap().targets.calories, 1500.0);
        assert!(find_preset("bulk").is_none());
    }

    #[test]
    fn test_parse_target_input() {
        assert_eq!(parse_target_input(" 180 "), 180.0);
        assert_eq!(parse_target_input("92.5"), 92.5);
        assert_eq!(parse_target_input("abc"), 0.0);
        assert_eq!(parse_target_input(""), 0.0);
        assert_eq!(parse_target_input("-20"), 0.0);
        assert_eq!(parse_target_input("inf"), 0.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut t = MealTargets::default();
        t.set(Macro::Fat, 55.0);
        assert_eq!(t.get(Macro::Fat), 55.0);
        assert_eq!(t.get(Macro::Calories), 2000.0);
    }
}
