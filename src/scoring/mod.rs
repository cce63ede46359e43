pub mod calculations;
pub mod constants;
pub mod engine;
pub mod standards;

pub use calculations::{
    ca_p_ratio, is_mold_risk_moisture, score_ca_p_ratio, score_deviation, score_moisture,
    to_dry_matter, Deviation,
};
pub use constants::*;
pub use engine::{calculate_score, calculate_score_with};
pub use standards::{NutrientRange, NutrientStandards, SpeciesStandards, StandardsTable};
