use crate::models::Zone;
use crate::scoring::constants::*;
use crate::scoring::standards::NutrientRange;

/// Deduction and zone for one scored value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub deduction: f64,
    pub zone: Zone,
}

impl Deviation {
    pub const OPTIMAL: Deviation = Deviation {
        deduction: 0.0,
        zone: Zone::Optimal,
    };

    /// Full-weight danger deduction.
    pub fn maximal(weight: f64) -> Self {
        Self {
            deduction: weight,
            zone: Zone::Danger,
        }
    }
}

/// Convert an as-fed percentage to dry-matter basis.
///
/// Returns 0.0 when moisture is 100% or more.
#[inline]
pub fn to_dry_matter(as_fed: f64, moisture: f64) -> f64 {
    if moisture >= 100.0 {
        return 0.0;
    }
    as_fed / (100.0 - moisture) * 100.0
}

/// Distance as a fraction of a band width.
///
/// `None` for a zero or negative width (a range bound of 0); callers treat that
/// as maximal deviation.
#[inline]
fn band_ratio(distance: f64, width: f64) -> Option<f64> {
    if width > 0.0 {
        Some(distance / width)
    } else {
        None
    }
}

/// Score a normalized value against its recommended range.
///
/// - Inside `[min, max]`: no deduction.
/// - Inside `[min * 0.85, max * 1.15]`: quadratic in the distance across the band.
/// - Beyond that: `weight * (1 + ratio) * 1.5 * multiplier`.
///
/// The deduction is capped at `weight` in every zone.
pub fn score_deviation(
    value: f64,
    range: &NutrientRange,
    weight: f64,
    multiplier: f64,
) -> Deviation {
    let (min, max) = (range.min, range.max);

    if range.contains(value) {
        return Deviation::OPTIMAL;
    }

    let acceptable_min = min * ACCEPTABLE_MIN_FACTOR;
    let acceptable_max = max * ACCEPTABLE_MAX_FACTOR;

    if acceptable_min <= value && value <= acceptable_max {
        let ratio = if value < min {
            band_ratio(min - value, min - acceptable_min)
        } else {
            band_ratio(value - max, acceptable_max - max)
        };

        return match ratio {
            Some(ratio) => Deviation {
                deduction: (weight * ratio * ratio * multiplier).min(weight),
                zone: Zone::Acceptable,
            },
            None => Deviation::maximal(weight),
        };
    }

    let ratio = if value < acceptable_min {
        band_ratio(acceptable_min - value, acceptable_min)
    } else {
        band_ratio(value - acceptable_max, acceptable_max)
    };

    match ratio {
        // f64::min also absorbs a NaN product
        Some(ratio) => Deviation {
            deduction: (weight * (1.0 + ratio) * DANGER_PENALTY_FACTOR * multiplier).min(weight),
            zone: Zone::Danger,
        },
        None => Deviation::maximal(weight),
    }
}

/// Calcium to phosphorus ratio, or 0.0 when phosphorus is absent.
#[inline]
pub fn ca_p_ratio(calcium_dm: f64, phosphorus_dm: f64) -> f64 {
    if phosphorus_dm > 0.0 {
        calcium_dm / phosphorus_dm
    } else {
        0.0
    }
}

/// Derive the Ca:P ratio from as-fed values and score it.
///
/// Returns (ratio, deviation).
pub fn score_ca_p_ratio(
    calcium: f64,
    phosphorus: f64,
    moisture: f64,
    range: &NutrientRange,
    multiplier: f64,
) -> (f64, Deviation) {
    let ratio = ca_p_ratio(
        to_dry_matter(calcium, moisture),
        to_dry_matter(phosphorus, moisture),
    );
    let deviation = score_deviation(ratio, range, CA_P_RATIO_WEIGHT, multiplier);
    (ratio, deviation)
}

/// Check whether moisture sits in the mold-risk band for dry kibble.
#[inline]
pub fn is_mold_risk_moisture(moisture: f64) -> bool {
    MOISTURE_RISK_LOW < moisture && moisture < MOISTURE_RISK_HIGH
}

/// Moisture band rule: full weight inside the mold-risk band, otherwise nothing.
///
/// Moisture at or above the upper bound is not penalized here.
pub fn score_moisture(moisture: f64) -> Deviation {
    if is_mold_risk_moisture(moisture) {
        Deviation::maximal(MOISTURE_WEIGHT)
    } else {
        Deviation::OPTIMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adult_dog_protein() -> NutrientRange {
        NutrientRange::new(18.0, 32.0)
    }

    #[test]
    fn test_dry_matter() {
        assert!((to_dry_matter(25.0, 10.0) - 27.777_777).abs() < 0.001);
        assert_eq!(to_dry_matter(25.0, 0.0), 25.0);
    }

    #[test]
    fn test_dry_matter_guard() {
        assert_eq!(to_dry_matter(25.0, 100.0), 0.0);
        assert_eq!(to_dry_matter(25.0, 150.0), 0.0);
    }

    #[test]
    fn test_optimal_inclusive_bounds() {
        let range = adult_dog_protein();
        assert_eq!(score_deviation(18.0, &range, 25.0, 1.0), Deviation::OPTIMAL);
        assert_eq!(score_deviation(32.0, &range, 25.0, 1.0), Deviation::OPTIMAL);
    }

    #[test]
    fn test_acceptable_low_side() {
        // acceptable_min = 15.3, band width 2.7; 16.65 is halfway -> 25 * 0.25
        let d = score_deviation(16.65, &adult_dog_protein(), 25.0, 1.0);
        assert_eq!(d.zone, Zone::Acceptable);
        assert!((d.deduction - 6.25).abs() < 0.001);
    }

    #[test]
    fn test_acceptable_high_side() {
        // acceptable_max = 36.8, band width 4.8; 34.4 is halfway
        let d = score_deviation(34.4, &adult_dog_protein(), 25.0, 1.0);
        assert_eq!(d.zone, Zone::Acceptable);
        assert!((d.deduction - 6.25).abs() < 0.001);
    }

    #[test]
    fn test_acceptable_multiplier_scales() {
        let normal = score_deviation(34.4, &adult_dog_protein(), 25.0, 1.0);
        let kidney = score_deviation(34.4, &adult_dog_protein(), 25.0, 1.5);
        assert!((kidney.deduction - normal.deduction * 1.5).abs() < 0.001);
    }

    #[test]
    fn test_acceptable_capped_at_weight() {
        // right at the acceptable edge with a 1.5x multiplier
        let d = score_deviation(36.8, &adult_dog_protein(), 25.0, 1.5);
        assert_eq!(d.zone, Zone::Acceptable);
        assert_eq!(d.deduction, 25.0);
    }

    #[test]
    fn test_danger_capped_at_weight() {
        let low = score_deviation(5.0, &adult_dog_protein(), 25.0, 1.0);
        assert_eq!(low.zone, Zone::Danger);
        assert_eq!(low.deduction, 25.0);

        let high = score_deviation(80.0, &adult_dog_protein(), 25.0, 1.0);
        assert_eq!(high.zone, Zone::Danger);
        assert_eq!(high.deduction, 25.0);
    }

    #[test]
    fn test_zero_min_range_is_danger_not_nan() {
        let range = NutrientRange::new(0.0, 5.0);
        let d = score_deviation(-1.0, &range, 10.0, 1.0);
        assert_eq!(d, Deviation::maximal(10.0));
        assert!(d.deduction.is_finite());
    }

    #[test]
    fn test_zero_max_range_is_danger_not_nan() {
        let range = NutrientRange::new(0.0, 0.0);
        let d = score_deviation(0.5, &range, 10.0, 1.2);
        assert_eq!(d, Deviation::maximal(10.0));
        assert_eq!(score_deviation(0.0, &range, 10.0, 1.2), Deviation::OPTIMAL);
    }

    #[test]
    fn test_ca_p_ratio() {
        assert!((ca_p_ratio(1.0, 0.8) - 1.25).abs() < 1e-9);
        assert_eq!(ca_p_ratio(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_score_ca_p_ratio_moisture_cancels() {
        let range = NutrientRange::new(1.0, 2.0);
        let (ratio, d) = score_ca_p_ratio(1.0, 0.8, 10.0, &range, 1.0);
        assert!((ratio - 1.25).abs() < 1e-9);
        assert_eq!(d, Deviation::OPTIMAL);
    }

    #[test]
    fn test_score_ca_p_ratio_without_phosphorus() {
        let range = NutrientRange::new(1.0, 2.0);
        let (ratio, d) = score_ca_p_ratio(1.0, 0.0, 10.0, &range, 1.0);
        assert_eq!(ratio, 0.0);
        assert_eq!(d.zone, Zone::Danger);
        assert_eq!(d.deduction, CA_P_RATIO_WEIGHT);
    }

    #[test]
    fn test_moisture_band() {
        assert_eq!(score_moisture(10.0), Deviation::OPTIMAL);
        assert_eq!(score_moisture(12.0), Deviation::OPTIMAL);
        assert_eq!(score_moisture(13.0), Deviation::maximal(MOISTURE_WEIGHT));
        assert_eq!(score_moisture(15.0), Deviation::OPTIMAL);
        assert_eq!(score_moisture(16.0), Deviation::OPTIMAL);
        assert_eq!(score_moisture(78.0), Deviation::OPTIMAL);
    }
}
