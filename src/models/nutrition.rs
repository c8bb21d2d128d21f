use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// One of the four tracked macro quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Macro {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    /// All macros in display order.
    pub const ALL: [Macro; 4] = [Macro::Calories, Macro::Protein, Macro::Carbs, Macro::Fat];

    pub fn name(&self) -> &'static str {
        match self {
            Macro::Calories => "Calories",
            Macro::Protein => "Protein",
            Macro::Carbs => "Carbs",
            Macro::Fat => "Fat",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Macro::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Nutrition values for a stated reference quantity.
///
/// Catalog entries hold values per 100 reference units; selections hold values
/// already scaled to the selected amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

/// Round to one decimal place.
#[inline]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl NutritionProfile {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber: None,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn with_fiber(mut self, fiber: f64) -> Self {
        self.fiber = Some(fiber);
        self
    }

    /// Scale to `amount` given values defined at `reference_amount`.
    ///
    /// Calories round to the nearest integer, macros to one decimal place.
    /// `reference_amount` must be positive; catalog loading guarantees that
    /// for every catalog entry.
    pub fn scale(&self, amount: f64, reference_amount: f64) -> Self {
        let ratio = amount / reference_amount;
        Self {
            calories: (self.calories * ratio).round(),
            protein: round_tenth(self.protein * ratio),
            carbs: round_tenth(self.carbs * ratio),
            fat: round_tenth(self.fat * ratio),
            fiber: self.fiber.map(|fiber| round_tenth(fiber * ratio)),
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

    /// All values finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .chain(self.fiber)
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Add for NutritionProfile {
    type Output = NutritionProfile;

    fn add(self, other: NutritionProfile) -> NutritionProfile {
        let fiber = match (self.fiber, other.fiber) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
        };
        NutritionProfile {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber,
        }
    }
}

impl std::iter::Sum for NutritionProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionProfile::zero(), |acc, n| acc + n)
    }
}

impl<'a> std::iter::Sum<&'a NutritionProfile> for NutritionProfile {
    fn sum<I: Iterator<Item = &'a NutritionProfile>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn chicken() -> NutritionProfile {
        NutritionProfile::new(165.0, 31.0, 0.0, 3.6)
    }

    #[test]
    fn test_macro_display_pads() {
        assert_eq!(format!("{:<9}|", Macro::Fat), "Fat      |");
    }

    #[test]
    fn test_scale_identity() {
        assert_eq!(chicken().scale(100.0, 100.0), chicken());
    }

    #[test]
    fn test_scale_rounding() {
        // 150g: 247.5 kcal rounds up, macros keep one decimal
        let scaled = chicken().scale(150.0, 100.0);
        assert_eq!(scaled.calories, 248.0);
        assert_float_absolute_eq!(scaled.protein, 46.5, 1e-9);
        assert_float_absolute_eq!(scaled.fat, 5.4, 1e-9);

        let eggs = NutritionProfile::new(155.0, 13.0, 1.1, 11.0).scale(50.0, 100.0);
        assert_eq!(eggs.calories, 78.0);
        assert_float_absolute_eq!(eggs.carbs, 0.6, 1e-9);
    }

    #[test]
    fn test_scale_zero_amount() {
        let scaled = chicken().with_fiber(2.0).scale(0.0, 100.0);
        assert_eq!(scaled, NutritionProfile::zero().with_fiber(0.0));
    }

    #[test]
    fn test_sum_fiber_present_if_any() {
        let total: NutritionProfile = [chicken(), chicken().with_fiber(1.5)].into_iter().sum();
        assert_eq!(total.fiber, Some(1.5));
        assert_float_absolute_eq!(total.calories, 330.0, 1e-9);

        let plain: NutritionProfile = [chicken(), chicken()].into_iter().sum();
        assert_eq!(plain.fiber, None);
    }

    #[test]
    fn test_is_valid() {
        assert!(chicken().is_valid());
        assert!(!NutritionProfile::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!chicken().with_fiber(f64::NAN).is_valid());
    }
}
