pub mod cli;
pub mod data;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;

pub use error::{Result, ScoreError};
pub use models::{CalculationResult, NutrientInput, PetProfile};
pub use scoring::{calculate_score, calculate_score_with, StandardsTable};
