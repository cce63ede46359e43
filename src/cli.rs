use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::models::{HealthStatus, LifeStage, NutrientInput, PetProfile, Species};

/// Pet food scorer — grade a guaranteed analysis by species, life stage, and health.
#[derive(Parser, Debug)]
#[command(name = "pet_food_scorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a custom standards table (JSON). Defaults to the built-in table.
    #[arg(short, long, global = true)]
    pub standards: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Score one product from command-line values.
    Score(ScoreArgs),

    /// Prompt for the profile and guaranteed analysis, then score.
    #[default]
    Interactive,

    /// Score every row of a CSV file.
    Batch {
        /// Input CSV with a header row.
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV for scores and per-component deductions.
        #[arg(short, long, default_value = "scores.csv")]
        output: PathBuf,
    },

    /// Show or export the standards table.
    Standards {
        #[arg(long, default_value = "dog")]
        species: String,

        #[arg(long, default_value = "adult")]
        life_stage: String,

        /// Write the full table to this JSON file instead of displaying it.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// dog or cat.
    #[arg(long)]
    pub species: String,

    /// growth, adult or senior.
    #[arg(long, default_value = "adult")]
    pub life_stage: String,

    /// normal, obesity, kidney_disease, diabetes, heart_disease or digestive_issues.
    #[arg(long, default_value = "normal")]
    pub health: String,

    #[arg(long)]
    pub protein: f64,

    #[arg(long)]
    pub fat: f64,

    #[arg(long)]
    pub fiber: f64,

    #[arg(long)]
    pub ash: f64,

    #[arg(long)]
    pub moisture: f64,

    #[arg(long)]
    pub calcium: f64,

    #[arg(long)]
    pub phosphorus: f64,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the result as JSON to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl ScoreArgs {
    pub fn profile(&self) -> Result<PetProfile> {
        Ok(PetProfile::new(
            self.species.parse::<Species>()?,
            self.life_stage.parse::<LifeStage>()?,
            self.health.parse::<HealthStatus>()?,
        ))
    }

    pub fn nutrients(&self) -> NutrientInput {
        NutrientInput {
            protein: self.protein,
            fat: self.fat,
            fiber: self.fiber,
            ash: self.ash,
            moisture: self.moisture,
            calcium: self.calcium,
            phosphorus: self.phosphorus,
        }
    }
}
