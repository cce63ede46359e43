use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::error::{Result, ScoreError};
use crate::models::{CalculationResult, Component, HealthStatus, NutrientInput, PetProfile};
use crate::scoring::{calculate_score_with, StandardsTable};

/// One product row from a batch CSV.
///
/// Selector columns are free text so the same aliases as the CLI are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    pub name: String,
    pub species: String,
    pub life_stage: String,
    #[serde(default)]
    pub health_status: String,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub ash: f64,
    pub moisture: f64,
    pub calcium: f64,
    pub phosphorus: f64,
}

impl BatchRecord {
    pub fn profile(&self) -> Result<PetProfile> {
        let health_status = if self.health_status.trim().is_empty() {
            HealthStatus::Normal
        } else {
            self.health_status.parse()?
        };
        Ok(PetProfile::new(
            self.species.parse()?,
            self.life_stage.parse()?,
            health_status,
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

/// A scored batch row.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub name: String,
    pub profile: PetProfile,
    pub result: CalculationResult,
}

/// Load batch records from a CSV file with a header row.
///
/// Rows that fail to parse (blank or non-numeric cells, wrong column count)
/// are logged and skipped.
pub fn load_batch<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<BatchRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            // row 1 is the first line after the header
            Err(e) => warn!("Skipping batch row {}: {}", i + 1, e),
        }
    }

    info!(
        "Loaded {} batch rows from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Score every record, skipping rows with unknown selectors or out-of-range values.
///
/// Returns (outcomes, skipped row names).
pub fn score_batch(
    table: &StandardsTable,
    records: &[BatchRecord],
) -> (Vec<BatchOutcome>, Vec<String>) {
    let mut outcomes = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        match validate_record(record) {
            Ok((profile, nutrients)) => outcomes.push(BatchOutcome {
                name: record.name.clone(),
                profile,
                result: calculate_score_with(table, &profile, &nutrients),
            }),
            Err(e) => {
                warn!("Skipping '{}': {}", record.name, e);
                skipped.push(record.name.clone());
            }
        }
    }

    (outcomes, skipped)
}

fn validate_record(record: &BatchRecord) -> Result<(PetProfile, NutrientInput)> {
    let profile = record.profile()?;
    let nutrients = record.nutrients();
    if let Some((field, value)) = nutrients.first_invalid() {
        return Err(ScoreError::InvalidInput(format!(
            "{} = {} is outside 0-100",
            field, value
        )));
    }
    Ok((profile, nutrients))
}

/// Write scored rows to a CSV file, one deduction column per component.
pub fn write_batch_results<P: AsRef<Path>>(path: P, outcomes: &[BatchOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![
        "name".to_string(),
        "species".to_string(),
        "life_stage".to_string(),
        "health_status".to_string(),
        "score".to_string(),
        "grade".to_string(),
        "ca_p_ratio".to_string(),
    ];
    header.extend(Component::ALL.iter().map(|c| format!("{}_deduction", c.name())));
    wtr.write_record(&header)?;

    for outcome in outcomes {
        let result = &outcome.result;
        let mut row = vec![
            outcome.name.clone(),
            outcome.profile.species.to_string(),
            outcome.profile.life_stage.to_string(),
            outcome.profile.health_status.to_string(),
            format!("{:.2}", result.total_score),
            result.grade.to_string(),
            format!("{:.3}", result.ca_p_ratio),
        ];
        row.extend(result.breakdown.iter().map(|b| format!("{:.3}", b.deduction)));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, LifeStage, Species};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "name,species,life_stage,health_status,protein,fat,fiber,ash,moisture,calcium,phosphorus";

    fn write_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_batch() {
        let file = write_csv(
            "Kibble A, dog, adult, normal, 25, 12, 3, 6, 10, 1.0, 0.8\n\
             Kitten Mix, cat, kitten, , 34, 18, 2, 7, 9, 1.3, 1.1\n",
        );

        let records = load_batch(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Kibble A");

        let profile = records[1].profile().unwrap();
        assert_eq!(profile.species, Species::Cat);
        assert_eq!(profile.life_stage, LifeStage::Growth);
        assert_eq!(profile.health_status, HealthStatus::Normal);
    }

    #[test]
    fn test_score_batch_skips_invalid_rows() {
        let file = write_csv(
            "Good, dog, adult, normal, 25, 12, 3, 6, 10, 1.0, 0.8\n\
             Bad Species, hamster, adult, normal, 25, 12, 3, 6, 10, 1.0, 0.8\n\
             Bad Value, dog, adult, normal, 25, -2, 3, 6, 10, 1.0, 0.8\n",
        );

        let records = load_batch(file.path()).unwrap();
        let (outcomes, skipped) = score_batch(StandardsTable::builtin(), &records);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].result.grade, Grade::A);
        assert_eq!(skipped, vec!["Bad Species".to_string(), "Bad Value".to_string()]);
    }

    #[test]
    fn test_load_batch_skips_unparseable_rows() {
        let file = write_csv(
            "Good, dog, adult, normal, 25, 12, 3, 6, 10, 1.0, 0.8\n\
             Blank, dog, adult, normal, , 12, 3, 6, 10, 1.0, 0.8\n\
             Short, dog, adult\n\
             Good2, cat, adult, normal, 32, 14, 3, 7, 10, 1.1, 0.9\n",
        );

        let records = load_batch(file.path()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Good", "Good2"]);

        let (outcomes, skipped) = score_batch(StandardsTable::builtin(), &records);
        assert_eq!(outcomes.len(), 2);
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_load_batch_missing_file() {
        let err = load_batch("/nonexistent/batch.csv").unwrap_err();
        assert!(matches!(err, ScoreError::Csv(_)));
    }

    #[test]
    fn test_write_batch_results() {
        let file = write_csv("Kibble A, dog, adult, normal, 25, 12, 3, 6, 14, 1.0, 0.8\n");
        let records = load_batch(file.path()).unwrap();
        let (outcomes, _) = score_batch(StandardsTable::builtin(), &records);

        let out = NamedTempFile::new().unwrap();
        write_batch_results(out.path(), &outcomes).unwrap();

        let content = std::fs::read_to_string(out.path()).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("name,species,life_stage,health_status,score,grade"));
        assert!(header.ends_with("moisture_deduction"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("Kibble A,dog,adult,normal,95.00,A,"));
        assert!(row.ends_with(",5.000"));
    }
}
