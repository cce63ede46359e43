// ─────────────────────────────────────────────────────────────────────────────
// Component point budgets (must sum to 100)
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_WEIGHT: f64 = 25.0;
pub const FAT_WEIGHT: f64 = 20.0;
pub const CALCIUM_WEIGHT: f64 = 10.0;
pub const PHOSPHORUS_WEIGHT: f64 = 10.0;
pub const CA_P_RATIO_WEIGHT: f64 = 10.0;
pub const FIBER_WEIGHT: f64 = 10.0;
pub const ASH_WEIGHT: f64 = 10.0;
pub const MOISTURE_WEIGHT: f64 = 5.0;

/// Score before any deduction.
pub const MAX_SCORE: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Deviation zones
// ─────────────────────────────────────────────────────────────────────────────

/// Lower edge of the acceptable band, as a fraction of the range minimum.
pub const ACCEPTABLE_MIN_FACTOR: f64 = 0.85;

/// Upper edge of the acceptable band, as a fraction of the range maximum.
pub const ACCEPTABLE_MAX_FACTOR: f64 = 1.15;

/// Escalation applied to danger-zone deductions before capping at the weight.
pub const DANGER_PENALTY_FACTOR: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// Moisture mold-risk band (exclusive on both ends)
// ─────────────────────────────────────────────────────────────────────────────

pub const MOISTURE_RISK_LOW: f64 = 12.0;
pub const MOISTURE_RISK_HIGH: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Grade thresholds (inclusive lower bounds)
// ─────────────────────────────────────────────────────────────────────────────

pub const GRADE_A_MIN: f64 = 90.0;
pub const GRADE_B_MIN: f64 = 80.0;
pub const GRADE_C_MIN: f64 = 70.0;
pub const GRADE_D_MIN: f64 = 60.0;
