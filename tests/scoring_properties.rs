//! Property-based tests for the scoring engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - The total score stays within 0..=100
//! - No component deducts more than its own weight
//! - Acceptable-zone deductions grow with distance from the range
//! - Health statuses never reduce a deduction
//! - Scoring is deterministic

use pet_food_scorer_rs::models::{HealthStatus, LifeStage, NutrientInput, PetProfile, Species, Zone};
use pet_food_scorer_rs::scoring::{calculate_score, score_deviation, to_dry_matter, NutrientRange};
use proptest::prelude::*;

fn percentage() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

fn nutrients() -> impl Strategy<Value = NutrientInput> {
    (
        percentage(),
        percentage(),
        percentage(),
        percentage(),
        percentage(),
        percentage(),
        percentage(),
    )
        .prop_map(
            |(protein, fat, fiber, ash, moisture, calcium, phosphorus)| NutrientInput {
                protein,
                fat,
                fiber,
                ash,
                moisture,
                calcium,
                phosphorus,
            },
        )
}

fn profile() -> impl Strategy<Value = PetProfile> {
    (
        prop::sample::select(Species::ALL.to_vec()),
        prop::sample::select(LifeStage::ALL.to_vec()),
        prop::sample::select(HealthStatus::ALL.to_vec()),
    )
        .prop_map(|(species, life_stage, health)| PetProfile::new(species, life_stage, health))
}

proptest! {
    #[test]
    fn prop_total_score_is_bounded(profile in profile(), nutrients in nutrients()) {
        let result = calculate_score(&profile, &nutrients);
        prop_assert!(result.total_score >= 0.0);
        prop_assert!(result.total_score <= 100.0);
    }

    #[test]
    fn prop_deduction_never_exceeds_weight(profile in profile(), nutrients in nutrients()) {
        let result = calculate_score(&profile, &nutrients);
        for entry in &result.breakdown {
            prop_assert!(entry.deduction >= 0.0, "{} negative", entry.component);
            prop_assert!(entry.deduction <= entry.weight, "{} over weight", entry.component);
            prop_assert!(entry.remaining_points >= 0.0);
            if entry.zone == Zone::Optimal {
                prop_assert_eq!(entry.deduction, 0.0);
            }
        }
    }

    #[test]
    fn prop_acceptable_deduction_is_monotonic(
        a in 32.0..=36.8f64,
        b in 32.0..=36.8f64,
        multiplier in 1.0..=1.5f64,
    ) {
        let range = NutrientRange::new(18.0, 32.0);
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let d_near = score_deviation(near, &range, 25.0, multiplier);
        let d_far = score_deviation(far, &range, 25.0, multiplier);
        prop_assert!(d_near.deduction <= d_far.deduction);
    }

    #[test]
    fn prop_acceptable_deduction_is_monotonic_below(
        a in 15.3..=18.0f64,
        b in 15.3..=18.0f64,
    ) {
        let range = NutrientRange::new(18.0, 32.0);
        let (near, far) = if a >= b { (a, b) } else { (b, a) };
        let d_near = score_deviation(near, &range, 25.0, 1.0);
        let d_far = score_deviation(far, &range, 25.0, 1.0);
        prop_assert!(d_near.deduction <= d_far.deduction);
    }

    #[test]
    fn prop_health_status_never_reduces_deduction(
        species in prop::sample::select(Species::ALL.to_vec()),
        life_stage in prop::sample::select(LifeStage::ALL.to_vec()),
        status in prop::sample::select(HealthStatus::ALL.to_vec()),
        nutrients in nutrients(),
    ) {
        let normal = calculate_score(
            &PetProfile::new(species, life_stage, HealthStatus::Normal),
            &nutrients,
        );
        let other = calculate_score(&PetProfile::new(species, life_stage, status), &nutrients);

        for (n, o) in normal.breakdown.iter().zip(other.breakdown.iter()) {
            prop_assert!(o.deduction >= n.deduction, "{}", n.component);
        }
        prop_assert!(other.total_score <= normal.total_score);
    }

    #[test]
    fn prop_dry_matter_zero_when_saturated(as_fed in -100.0..1000.0f64, moisture in 100.0..1e6f64) {
        prop_assert_eq!(to_dry_matter(as_fed, moisture), 0.0);
    }

    #[test]
    fn prop_dry_matter_never_below_as_fed(as_fed in percentage(), moisture in 0.0..100.0f64) {
        prop_assert!(to_dry_matter(as_fed, moisture) >= as_fed - 1e-9);
    }

    #[test]
    fn prop_scoring_is_deterministic(profile in profile(), nutrients in nutrients()) {
        let first = calculate_score(&profile, &nutrients);
        let second = calculate_score(&profile, &nutrients);
        prop_assert_eq!(first.total_score.to_bits(), second.total_score.to_bits());
        prop_assert_eq!(first, second);
    }
}
