use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Animal species covered by the standards table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Growth,
    Adult,
    Senior,
}

impl LifeStage {
    pub const ALL: [LifeStage; 3] = [LifeStage::Growth, LifeStage::Adult, LifeStage::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::Growth => "growth",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
        }
    }
}

/// Declared health status of the animal.
///
/// Every status other than `Normal` amplifies non-optimal deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Normal,
    Obesity,
    KidneyDisease,
    Diabetes,
    HeartDisease,
    DigestiveIssues,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 6] = [
        HealthStatus::Normal,
        HealthStatus::Obesity,
        HealthStatus::KidneyDisease,
        HealthStatus::Diabetes,
        HealthStatus::HeartDisease,
        HealthStatus::DigestiveIssues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Normal => "normal",
            HealthStatus::Obesity => "obesity",
            HealthStatus::KidneyDisease => "kidney_disease",
            HealthStatus::Diabetes => "diabetes",
            HealthStatus::HeartDisease => "heart_disease",
            HealthStatus::DigestiveIssues => "digestive_issues",
        }
    }

    /// Severity multiplier applied to every non-optimal deduction.
    pub fn multiplier(&self) -> f64 {
        match self {
            HealthStatus::Normal => 1.0,
            HealthStatus::Obesity => 1.2,
            HealthStatus::KidneyDisease => 1.5,
            HealthStatus::Diabetes => 1.3,
            HealthStatus::HeartDisease => 1.4,
            HealthStatus::DigestiveIssues => 1.1,
        }
    }
}

/// Lowercase, and fold `-` and spaces into `_`.
fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

impl FromStr for Species {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "dog" | "canine" => Ok(Species::Dog),
            "cat" | "feline" => Ok(Species::Cat),
            _ => Err(ScoreError::UnknownSelector {
                kind: "species",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for LifeStage {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "growth" | "puppy" | "kitten" => Ok(LifeStage::Growth),
            "adult" => Ok(LifeStage::Adult),
            "senior" => Ok(LifeStage::Senior),
            _ => Err(ScoreError::UnknownSelector {
                kind: "life stage",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for HealthStatus {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "normal" | "healthy" => Ok(HealthStatus::Normal),
            "obesity" | "obese" => Ok(HealthStatus::Obesity),
            "kidney_disease" | "kidney" => Ok(HealthStatus::KidneyDisease),
            "diabetes" | "diabetic" => Ok(HealthStatus::Diabetes),
            "heart_disease" | "heart" => Ok(HealthStatus::HeartDisease),
            "digestive_issues" | "digestive" => Ok(HealthStatus::DigestiveIssues),
            _ => Err(ScoreError::UnknownSelector {
                kind: "health status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three selectors that pick a standards row and a severity multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    pub species: Species,
    pub life_stage: LifeStage,
    #[serde(default)]
    pub health_status: HealthStatus,
}

impl PetProfile {
    pub fn new(species: Species, life_stage: LifeStage, health_status: HealthStatus) -> Self {
        Self {
            species,
            life_stage,
            health_status,
        }
    }
}

impl fmt::Display for PetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.species, self.life_stage, self.health_status
        )
    }
}
