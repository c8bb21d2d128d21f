use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, Meal, NutritionProfile};

/// A catalog food added at a chosen amount.
///
/// The scaled nutrition is computed once on creation. There is no way to
/// change the amount afterwards; replace the selection instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSelection {
    food: FoodItem,
    amount: f64,
    nutrition: NutritionProfile,
}

impl FoodSelection {
    pub fn new(food: FoodItem, amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PlannerError::InvalidArgument(format!(
                "amount for {} must be positive, got {}",
                food.name, amount
            )));
        }

        let nutrition = food.nutrition_for(amount);
        Ok(Self {
            food,
            amount,
            nutrition,
        })
    }

    pub fn food(&self) -> &FoodItem {
        &self.food
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn nutrition(&self) -> &NutritionProfile {
        &self.nutrition
    }
}

/// One entry of the day's selection list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedItem {
    Food(FoodSelection),
    Meal(Meal),
}

impl SelectedItem {
    pub fn nutrition(&self) -> &NutritionProfile {
        match self {
            SelectedItem::Food(selection) => selection.nutrition(),
            SelectedItem::Meal(meal) => &meal.total_nutrition,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SelectedItem::Food(selection) => &selection.food().id,
            SelectedItem::Meal(meal) => &meal.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SelectedItem::Food(selection) => &selection.food().name,
            SelectedItem::Meal(meal) => &meal.name,
        }
    }

    pub fn as_meal(&self) -> Option<&Meal> {
        match self {
            SelectedItem::Meal(meal) => Some(meal),
            SelectedItem::Food(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Serving};

    fn oats() -> FoodItem {
        FoodItem {
            id: "oats".to_string(),
            name: "Oats (rolled, dry)".to_string(),
            category: Category::Carbs,
            nutrition_per_100: NutritionProfile::new(389.0, 17.0, 66.0, 7.0),
            reference_amount: 100.0,
            reference_unit: "g".to_string(),
            common_serving: Serving {
                amount: 40.0,
                label: "g (1/2 cup)".to_string(),
            },
        }
    }

    #[test]
    fn test_selection_caches_scaled_nutrition() {
        let selection = FoodSelection::new(oats(), 40.0).unwrap();
        assert_eq!(selection.amount(), 40.0);
        assert_eq!(selection.nutrition().calories, 156.0);
        assert_eq!(selection.nutrition().carbs, 26.4);
        assert_eq!(*selection.nutrition(), oats().nutrition_for(40.0));
    }

    #[test]
    fn test_selection_rejects_non_positive_amount() {
        assert!(matches!(
            FoodSelection::new(oats(), 0.0),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert!(FoodSelection::new(oats(), -10.0).is_err());
        assert!(FoodSelection::new(oats(), f64::NAN).is_err());
    }

    #[test]
    fn test_selected_item_accessors() {
        let item = SelectedItem::Food(FoodSelection::new(oats(), 80.0).unwrap());
        assert_eq!(item.id(), "oats");
        assert_eq!(item.name(), "Oats (rolled, dry)");
        assert!(item.as_meal().is_none());
    }
}
