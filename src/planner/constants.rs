// ─────────────────────────────────────────────────────────────────────────────
// Suggestion heuristic
// ─────────────────────────────────────────────────────────────────────────────

/// Remaining protein (g) above which protein foods are suggested.
pub const PROTEIN_GAP_TRIGGER: f64 = 10.0;

/// Minimum protein per 100 units for a food to count as a protein source.
pub const PROTEIN_DENSITY_FLOOR: f64 = 15.0;

/// Largest suggested amount of a protein food.
pub const PROTEIN_AMOUNT_CAP: f64 = 200.0;

/// Protein suggestions below this amount are dropped.
pub const PROTEIN_MIN_AMOUNT: f64 = 50.0;

/// Remaining carbs (g) above which carb foods are suggested.
pub const CARB_GAP_TRIGGER: f64 = 15.0;

pub const CARB_DENSITY_FLOOR: f64 = 15.0;

pub const CARB_AMOUNT_CAP: f64 = 200.0;

pub const CARB_MIN_AMOUNT: f64 = 30.0;

/// Remaining fat (g) above which fat foods are suggested.
pub const FAT_GAP_TRIGGER: f64 = 5.0;

pub const FAT_DENSITY_FLOOR: f64 = 10.0;

pub const FAT_AMOUNT_CAP: f64 = 50.0;

pub const FAT_MIN_AMOUNT: f64 = 10.0;

/// Vegetables appended to every suggestion list.
pub const VEGETABLE_SUGGESTIONS: usize = 2;

/// Fixed amount for suggested vegetables.
pub const VEGETABLE_AMOUNT: f64 = 100.0;

/// Maximum suggestions returned.
pub const MAX_SUGGESTIONS: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Progress classification (percent of target, both bounds inclusive in "good")
// ─────────────────────────────────────────────────────────────────────────────

pub const STATUS_LOW_BELOW: f64 = 80.0;

pub const STATUS_HIGH_ABOVE: f64 = 110.0;

// ─────────────────────────────────────────────────────────────────────────────
// Daily split across meal types
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_RATIO: f64 = 0.25;

pub const LUNCH_RATIO: f64 = 0.35;

pub const DINNER_RATIO: f64 = 0.40;
