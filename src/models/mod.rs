pub mod nutrients;
pub mod profile;
pub mod result;

pub use nutrients::NutrientInput;
pub use profile::{HealthStatus, LifeStage, PetProfile, Species};
pub use result::{CalculationResult, Component, Grade, ScoreBreakdown, Zone};
