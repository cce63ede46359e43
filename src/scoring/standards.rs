use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::models::{Component, LifeStage, Species};

/// Recommended range for one nutrient, in dry-matter percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
}

impl NutrientRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Display label such as `18.0-32.0%`.
    pub fn label(&self) -> String {
        format!("{:.1}-{:.1}%", self.min, self.max)
    }

    /// Display label for a ratio range such as `1.0:1-2.0:1`.
    pub fn ratio_label(&self) -> String {
        format!("{:.1}:1-{:.1}:1", self.min, self.max)
    }

    fn check(&self, context: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ScoreError::InvalidStandards(format!(
                "{}: bounds must be finite",
                context
            )));
        }
        if self.min < 0.0 {
            return Err(ScoreError::InvalidStandards(format!(
                "{}: min {} is negative",
                context, self.min
            )));
        }
        if self.min > self.max {
            return Err(ScoreError::InvalidStandards(format!(
                "{}: min {} > max {}",
                context, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Ranges for every scored nutrient at one species and life stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientStandards {
    pub protein: NutrientRange,
    pub fat: NutrientRange,
    pub fiber: NutrientRange,
    pub ash: NutrientRange,
    pub calcium: NutrientRange,
    pub phosphorus: NutrientRange,
    pub ca_p_ratio: NutrientRange,
}

impl NutrientStandards {
    /// Range for a component. Moisture has no range; it is scored by a band rule.
    pub fn range_for(&self, component: Component) -> Option<&NutrientRange> {
        match component {
            Component::Protein => Some(&self.protein),
            Component::Fat => Some(&self.fat),
            Component::Fiber => Some(&self.fiber),
            Component::Ash => Some(&self.ash),
            Component::Calcium => Some(&self.calcium),
            Component::Phosphorus => Some(&self.phosphorus),
            Component::CaPRatio => Some(&self.ca_p_ratio),
            Component::Moisture => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStandards {
    pub growth: NutrientStandards,
    pub adult: NutrientStandards,
    pub senior: NutrientStandards,
}

/// Standards for every species and life stage.
///
/// The shape is a struct rather than a map so a table cannot be missing a
/// species/life-stage pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsTable {
    pub dog: SpeciesStandards,
    pub cat: SpeciesStandards,
}

const fn r(min: f64, max: f64) -> NutrientRange {
    NutrientRange::new(min, max)
}

static BUILTIN: LazyLock<StandardsTable> = LazyLock::new(|| StandardsTable {
    dog: SpeciesStandards {
        growth: NutrientStandards {
            protein: r(22.5, 35.0),
            fat: r(8.5, 25.0),
            fiber: r(1.0, 5.0),
            ash: r(4.0, 8.0),
            calcium: r(1.2, 1.8),
            phosphorus: r(1.0, 1.6),
            ca_p_ratio: r(1.1, 1.8),
        },
        adult: NutrientStandards {
            protein: r(18.0, 32.0),
            fat: r(5.5, 20.0),
            fiber: r(1.0, 5.0),
            ash: r(4.0, 8.0),
            calcium: r(0.5, 1.8),
            phosphorus: r(0.4, 1.6),
            ca_p_ratio: r(1.0, 2.0),
        },
        senior: NutrientStandards {
            protein: r(18.0, 30.0),
            fat: r(5.0, 15.0),
            fiber: r(2.0, 6.0),
            ash: r(4.0, 7.5),
            calcium: r(0.5, 1.5),
            phosphorus: r(0.4, 1.2),
            ca_p_ratio: r(1.0, 2.0),
        },
    },
    cat: SpeciesStandards {
        growth: NutrientStandards {
            protein: r(30.0, 45.0),
            fat: r(9.0, 25.0),
            fiber: r(1.0, 4.0),
            ash: r(5.0, 9.0),
            calcium: r(1.0, 1.8),
            phosphorus: r(0.8, 1.6),
            ca_p_ratio: r(1.0, 1.5),
        },
        adult: NutrientStandards {
            protein: r(26.0, 45.0),
            fat: r(9.0, 22.0),
            fiber: r(1.0, 5.0),
            ash: r(5.0, 9.0),
            calcium: r(0.6, 1.5),
            phosphorus: r(0.5, 1.3),
            ca_p_ratio: r(0.9, 1.5),
        },
        senior: NutrientStandards {
            protein: r(28.0, 42.0),
            fat: r(8.0, 18.0),
            fiber: r(1.5, 5.0),
            ash: r(5.0, 8.0),
            calcium: r(0.6, 1.2),
            phosphorus: r(0.5, 1.0),
            ca_p_ratio: r(1.0, 1.5),
        },
    },
});

impl StandardsTable {
    /// The built-in reference table, constructed once.
    pub fn builtin() -> &'static StandardsTable {
        &BUILTIN
    }

    pub fn get(&self, species: Species, life_stage: LifeStage) -> &NutrientStandards {
        let by_species = match species {
            Species::Dog => &self.dog,
            Species::Cat => &self.cat,
        };
        match life_stage {
            LifeStage::Growth => &by_species.growth,
            LifeStage::Adult => &by_species.adult,
            LifeStage::Senior => &by_species.senior,
        }
    }

    /// Reject non-finite, negative, or inverted ranges.
    pub fn validate(&self) -> Result<()> {
        for species in Species::ALL {
            for stage in LifeStage::ALL {
                let standards = self.get(species, stage);
                for component in Component::ALL {
                    if let Some(range) = standards.range_for(component) {
                        range.check(&format!("{}/{} {}", species, stage, component))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for StandardsTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
