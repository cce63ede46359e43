use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::constants::*;

/// The eight scored components.
///
/// Adding or removing one is a compile-time change: `ALL`, `weight` and the
/// engine all match on this enum exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Protein,
    Fat,
    Fiber,
    Ash,
    Calcium,
    Phosphorus,
    CaPRatio,
    Moisture,
}

impl Component {
    pub const ALL: [Component; 8] = [
        Component::Protein,
        Component::Fat,
        Component::Fiber,
        Component::Ash,
        Component::Calcium,
        Component::Phosphorus,
        Component::CaPRatio,
        Component::Moisture,
    ];

    /// Point budget this component contributes to the 100-point total.
    pub fn weight(&self) -> f64 {
        match self {
            Component::Protein => PROTEIN_WEIGHT,
            Component::Fat => FAT_WEIGHT,
            Component::Fiber => FIBER_WEIGHT,
            Component::Ash => ASH_WEIGHT,
            Component::Calcium => CALCIUM_WEIGHT,
            Component::Phosphorus => PHOSPHORUS_WEIGHT,
            Component::CaPRatio => CA_P_RATIO_WEIGHT,
            Component::Moisture => MOISTURE_WEIGHT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Component::Protein => "protein",
            Component::Fat => "fat",
            Component::Fiber => "fiber",
            Component::Ash => "ash",
            Component::Calcium => "calcium",
            Component::Phosphorus => "phosphorus",
            Component::CaPRatio => "ca_p_ratio",
            Component::Moisture => "moisture",
        }
    }

    /// Human-readable label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Component::Protein => "Protein",
            Component::Fat => "Fat",
            Component::Fiber => "Fiber",
            Component::Ash => "Ash",
            Component::Calcium => "Calcium",
            Component::Phosphorus => "Phosphorus",
            Component::CaPRatio => "Ca:P ratio",
            Component::Moisture => "Moisture",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How far a normalized value sits from its recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Optimal,
    Acceptable,
    Danger,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Zone::Optimal => "optimal",
            Zone::Acceptable => "acceptable",
            Zone::Danger => "danger",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a 0-100 score to a letter grade (inclusive lower bounds).
    pub fn from_score(score: f64) -> Self {
        if score >= GRADE_A_MIN {
            Grade::A
        } else if score >= GRADE_B_MIN {
            Grade::B
        } else if score >= GRADE_C_MIN {
            Grade::C
        } else if score >= GRADE_D_MIN {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring detail for a single component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub component: Component,
    pub weight: f64,

    /// Dry-matter percentage; the raw ratio for Ca:P and the as-fed value for moisture.
    pub dry_matter_value: f64,

    pub target_range_label: String,
    pub deduction: f64,

    /// `weight - deduction`.
    pub remaining_points: f64,

    pub zone: Zone,
}

impl ScoreBreakdown {
    pub fn new(
        component: Component,
        dry_matter_value: f64,
        target_range_label: String,
        deduction: f64,
        zone: Zone,
    ) -> Self {
        let weight = component.weight();
        Self {
            component,
            weight,
            dry_matter_value,
            target_range_label,
            deduction,
            remaining_points: weight - deduction,
            zone,
        }
    }
}

/// Outcome of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_score: f64,
    pub breakdown: [ScoreBreakdown; 8],
    pub ca_p_ratio: f64,
    pub grade: Grade,
}

impl CalculationResult {
    /// Breakdown entry for a component.
    pub fn component(&self, component: Component) -> &ScoreBreakdown {
        // breakdown is built in `Component::ALL` order
        let idx = Component::ALL
            .iter()
            .position(|c| *c == component)
            .unwrap_or_default();
        &self.breakdown[idx]
    }

    /// Sum of all deductions before clamping.
    pub fn total_deduction(&self) -> f64 {
        self.breakdown.iter().map(|b| b.deduction).sum()
    }

    /// The `n` entries with the largest non-zero deduction, largest first.
    pub fn top_deductions(&self, n: usize) -> Vec<&ScoreBreakdown> {
        let mut entries: Vec<&ScoreBreakdown> = self
            .breakdown
            .iter()
            .filter(|b| b.deduction > 0.0)
            .collect();
        entries.sort_by(|a, b| {
            b.deduction
                .partial_cmp(&a.deduction)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(n);
        entries
    }
}
