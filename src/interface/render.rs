use crate::data::BatchOutcome;
use crate::models::{CalculationResult, Component, LifeStage, PetProfile, ScoreBreakdown, Species};
use crate::scoring::constants::{MOISTURE_RISK_HIGH, MOISTURE_RISK_LOW};
use crate::scoring::NutrientStandards;

/// Number of worst components listed under the breakdown table.
const TOP_ISSUES: usize = 3;

/// Format one breakdown entry as a table row.
pub fn format_breakdown_row(entry: &ScoreBreakdown) -> String {
    let value = match entry.component {
        Component::CaPRatio => format!("{:.2}:1", entry.dry_matter_value),
        _ => format!("{:.2}%", entry.dry_matter_value),
    };

    format!(
        "{:<11} {:>9} {:>13} {:>7.2} {:>6.2}/{:<3.0} {}",
        entry.component.label(),
        value,
        entry.target_range_label,
        entry.deduction,
        entry.remaining_points,
        entry.weight,
        entry.zone
    )
}

/// Text bar for a 0-100 score.
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Display a scoring result with its breakdown table.
pub fn display_result(profile: &PetProfile, result: &CalculationResult) {
    println!();
    println!("=== Nutrition Score ({}) ===", profile);
    println!();
    println!(
        "Score: {:.1}/100  Grade: {}  {}",
        result.total_score,
        result.grade,
        score_bar(result.total_score, 30)
    );
    println!("Ca:P ratio: {:.2}:1", result.ca_p_ratio);
    println!();

    println!(
        "{:<11} {:>9} {:>13} {:>7} {:>10} {}",
        "Component", "DM value", "Target", "Deduct", "Points", "Zone"
    );
    for entry in &result.breakdown {
        println!("{}", format_breakdown_row(entry));
    }

    let issues = result.top_deductions(TOP_ISSUES);
    if !issues.is_empty() {
        println!();
        println!("--- Top issues ---");
        for entry in issues {
            println!(
                "  {} ({}): -{:.2} pts",
                entry.component.label(),
                entry.zone,
                entry.deduction
            );
        }
    }
    println!();
}

/// Display the standards row for one species and life stage.
pub fn display_standards(species: Species, life_stage: LifeStage, standards: &NutrientStandards) {
    println!();
    println!("=== Standards: {} / {} (dry matter) ===", species, life_stage);
    println!();

    for component in Component::ALL {
        let target = match (component, standards.range_for(component)) {
            (Component::CaPRatio, Some(range)) => range.ratio_label(),
            (_, Some(range)) => range.label(),
            (_, None) => format!(
                "not {:.0}-{:.0}% (exclusive)",
                MOISTURE_RISK_LOW, MOISTURE_RISK_HIGH
            ),
        };
        println!(
            "  {:<11} {:<24} {:>3.0} pts",
            component.label(),
            target,
            component.weight()
        );
    }
    println!();
}

/// Display a summary of a batch run.
pub fn display_batch_summary(outcomes: &[BatchOutcome], skipped: &[String]) {
    println!();
    println!("=== Batch Results ({} scored) ===", outcomes.len());
    println!();

    let max_name_len = outcomes.iter().map(|o| o.name.len()).max().unwrap_or(10);

    for outcome in outcomes {
        println!(
            "  {:<width$}  {:>6.2}  {}  ({})",
            outcome.name,
            outcome.result.total_score,
            outcome.result.grade,
            outcome.profile,
            width = max_name_len
        );
    }

    if !outcomes.is_empty() {
        let avg: f64 =
            outcomes.iter().map(|o| o.result.total_score).sum::<f64>() / outcomes.len() as f64;
        println!();
        println!("Average score: {:.2}", avg);
    }

    if !skipped.is_empty() {
        println!("Skipped {} rows: {}", skipped.len(), skipped.join(", "));
    }
    println!();
}
