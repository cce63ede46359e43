use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, ScoreError};
use crate::models::{HealthStatus, LifeStage, NutrientInput, PetProfile, Species};

/// Minimum similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest candidate to a mistyped name, if any is similar enough.
pub fn closest_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();

    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|c| (*c, jaro_winkler(c, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.first().map(|(c, _)| *c)
}

/// Canonical names accepted for a selector kind.
pub fn selector_names(kind: &str) -> Vec<&'static str> {
    match kind {
        "species" => Species::ALL.iter().map(|s| s.as_str()).collect(),
        "life stage" => LifeStage::ALL.iter().map(|s| s.as_str()).collect(),
        "health status" => HealthStatus::ALL.iter().map(|s| s.as_str()).collect(),
        _ => Vec::new(),
    }
}

/// Human-readable hint for an unknown selector error.
pub fn selector_hint(err: &ScoreError) -> Option<String> {
    match err {
        ScoreError::UnknownSelector { kind, value } => {
            let names = selector_names(kind);
            match closest_match(value, &names) {
                Some(name) => Some(format!("Did you mean '{}'?", name)),
                None => Some(format!("Expected one of: {}", names.join(", "))),
            }
        }
        _ => None,
    }
}

pub fn prompt_species() -> Result<Species> {
    let options: Vec<&str> = Species::ALL.iter().map(|s| s.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Species")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(Species::ALL[selection])
}

pub fn prompt_life_stage() -> Result<LifeStage> {
    let options: Vec<&str> = LifeStage::ALL.iter().map(|s| s.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Life stage")
        .items(&options)
        .default(1) // adult
        .interact()?;
    Ok(LifeStage::ALL[selection])
}

pub fn prompt_health_status() -> Result<HealthStatus> {
    let options: Vec<String> = HealthStatus::ALL
        .iter()
        .map(|s| format!("{} (x{:.1})", s, s.multiplier()))
        .collect();
    let selection = Select::new()
        .with_prompt("Health status")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(HealthStatus::ALL[selection])
}

/// Prompt for one as-fed percentage in 0..=100.
pub fn prompt_percentage(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} (% as fed)", label))
        .default(format!("{}", default))
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            match s.trim().parse::<f64>() {
                Ok(v) if (0.0..=100.0).contains(&v) => Ok(()),
                Ok(_) => Err("Value must be between 0 and 100".to_string()),
                Err(_) => Err("Not a number".to_string()),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| ScoreError::InvalidInput(format!("Invalid number for {}", label)))
}

/// Prompt for the full guaranteed analysis.
pub fn prompt_nutrients() -> Result<NutrientInput> {
    Ok(NutrientInput {
        protein: prompt_percentage("Crude protein", 25.0)?,
        fat: prompt_percentage("Crude fat", 12.0)?,
        fiber: prompt_percentage("Crude fiber", 3.0)?,
        ash: prompt_percentage("Ash", 6.0)?,
        moisture: prompt_percentage("Moisture", 10.0)?,
        calcium: prompt_percentage("Calcium", 1.0)?,
        phosphorus: prompt_percentage("Phosphorus", 0.8)?,
    })
}

/// Prompt for species, life stage and health status.
pub fn collect_profile() -> Result<PetProfile> {
    let species = prompt_species()?;
    let life_stage = prompt_life_stage()?;
    let health_status = prompt_health_status()?;
    Ok(PetProfile::new(species, life_stage, health_status))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
