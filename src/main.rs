use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};

use pet_food_scorer_rs::cli::{Cli, Command, ScoreArgs};
use pet_food_scorer_rs::data::{
    load_batch, load_standards, save_result_json, save_standards, score_batch, write_batch_results,
};
use pet_food_scorer_rs::error::{Result, ScoreError};
use pet_food_scorer_rs::interface::{
    collect_profile, display_batch_summary, display_result, display_standards, prompt_nutrients,
    prompt_yes_no, selector_hint,
};
use pet_food_scorer_rs::models::{LifeStage, Species};
use pet_food_scorer_rs::scoring::{calculate_score_with, StandardsTable};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(hint) = selector_hint(&e) {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

/// Default filter is `warn`; each `-v` raises it one level. `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let table = resolve_standards(cli.standards.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Score(args) => cmd_score(&table, &args),
        Command::Interactive => cmd_interactive(&table),
        Command::Batch { input, output } => cmd_batch(&table, &input, &output),
        Command::Standards {
            species,
            life_stage,
            export,
        } => cmd_standards(&table, &species, &life_stage, export),
    }
}

/// Load a custom table if one was given, otherwise use the built-in table.
fn resolve_standards(path: Option<&Path>) -> Result<StandardsTable> {
    match path {
        Some(path) => load_standards(path),
        None => {
            debug!("Using built-in standards table");
            Ok(StandardsTable::builtin().clone())
        }
    }
}

/// Score one product from flags.
fn cmd_score(table: &StandardsTable, args: &ScoreArgs) -> Result<()> {
    let profile = args.profile()?;
    let nutrients = args.nutrients();

    if let Some((field, value)) = nutrients.first_invalid() {
        return Err(ScoreError::InvalidInput(format!(
            "--{} {} is outside 0-100",
            field, value
        )));
    }

    let result = calculate_score_with(table, &profile, &nutrients);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_result(&profile, &result);
    }

    if let Some(path) = &args.out {
        save_result_json(path, &result)?;
        info!("Saved result to {}", path.display());
    }

    Ok(())
}

/// Prompt for everything, score, and offer to go again.
fn cmd_interactive(table: &StandardsTable) -> Result<()> {
    loop {
        let profile = collect_profile()?;
        println!();
        let nutrients = prompt_nutrients()?;

        let result = calculate_score_with(table, &profile, &nutrients);
        display_result(&profile, &result);

        if !prompt_yes_no("Score another product?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Score every row of a CSV and write the results.
fn cmd_batch(table: &StandardsTable, input: &Path, output: &Path) -> Result<()> {
    let records = load_batch(input)?;
    if records.is_empty() {
        println!("No rows to score in {}", input.display());
        return Ok(());
    }

    let (outcomes, skipped) = score_batch(table, &records);
    display_batch_summary(&outcomes, &skipped);

    write_batch_results(output, &outcomes)?;
    println!("Wrote {} results to {}", outcomes.len(), output.display());

    Ok(())
}

/// Display one standards row, or export the full table.
fn cmd_standards(
    table: &StandardsTable,
    species: &str,
    life_stage: &str,
    export: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = export {
        save_standards(&path, table)?;
        println!("Standards table written to {}", path.display());
        return Ok(());
    }

    let species: Species = species.parse()?;
    let life_stage: LifeStage = life_stage.parse()?;
    display_standards(species, life_stage, table.get(species, life_stage));

    Ok(())
}
