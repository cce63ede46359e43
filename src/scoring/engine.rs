use log::debug;

use crate::models::{CalculationResult, Component, Grade, NutrientInput, PetProfile, ScoreBreakdown};
use crate::scoring::calculations::{
    score_ca_p_ratio, score_deviation, score_moisture, to_dry_matter,
};
use crate::scoring::constants::{MAX_SCORE, MOISTURE_RISK_LOW};
use crate::scoring::standards::{NutrientRange, StandardsTable};

/// Score a pet food against the built-in standards table.
pub fn calculate_score(profile: &PetProfile, nutrients: &NutrientInput) -> CalculationResult {
    calculate_score_with(StandardsTable::builtin(), profile, nutrients)
}

/// Score a pet food against a caller-supplied standards table.
///
/// Pure: the same arguments always produce the same result. Inputs are not
/// validated here; see [`NutrientInput::is_valid`].
pub fn calculate_score_with(
    table: &StandardsTable,
    profile: &PetProfile,
    nutrients: &NutrientInput,
) -> CalculationResult {
    let standards = table.get(profile.species, profile.life_stage);
    let multiplier = profile.health_status.multiplier();
    let moisture = nutrients.moisture;
    let dm = |as_fed: f64| to_dry_matter(as_fed, moisture);

    let (ca_p_ratio, ca_p_deviation) = score_ca_p_ratio(
        nutrients.calcium,
        nutrients.phosphorus,
        moisture,
        &standards.ca_p_ratio,
        multiplier,
    );

    let breakdown = Component::ALL.map(|component| {
        let nutrient = |value: f64, range: &NutrientRange| {
            let deviation = score_deviation(value, range, component.weight(), multiplier);
            (value, range.label(), deviation)
        };

        let (value, label, deviation) = match component {
            Component::Protein => nutrient(dm(nutrients.protein), &standards.protein),
            Component::Fat => nutrient(dm(nutrients.fat), &standards.fat),
            Component::Fiber => nutrient(dm(nutrients.fiber), &standards.fiber),
            Component::Ash => nutrient(dm(nutrients.ash), &standards.ash),
            Component::Calcium => nutrient(dm(nutrients.calcium), &standards.calcium),
            Component::Phosphorus => nutrient(dm(nutrients.phosphorus), &standards.phosphorus),
            Component::CaPRatio => (
                ca_p_ratio,
                standards.ca_p_ratio.ratio_label(),
                ca_p_deviation,
            ),
            Component::Moisture => (
                moisture,
                format!("<={:.1}%", MOISTURE_RISK_LOW),
                score_moisture(moisture),
            ),
        };

        debug!(
            "{}: value={:.3} target={} deduction={:.3} zone={}",
            component, value, label, deviation.deduction, deviation.zone
        );

        ScoreBreakdown::new(component, value, label, deviation.deduction, deviation.zone)
    });

    let total_deduction: f64 = breakdown.iter().map(|b| b.deduction).sum();
    let total_score = (MAX_SCORE - total_deduction).clamp(0.0, MAX_SCORE);
    let grade = Grade::from_score(total_score);

    debug!(
        "{} [{}]: total={:.2} grade={}",
        profile,
        nutrients.debug_string(),
        total_score,
        grade
    );

    CalculationResult {
        total_score,
        breakdown,
        ca_p_ratio,
        grade,
    }
}
