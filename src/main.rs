//! `workout` CLI: validate interval workout files and ride-tracking records.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use workout_validator::report::{FileReport, Schema, check_file};

/// Validate cycling workout JSON files.
#[derive(Parser, Debug)]
#[command(name = "workout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate interval workout files (standard or melodic-roulette).
    Validate(FileArgs),
    /// Validate ride-tracking record files.
    ValidateRide(FileArgs),
}

#[derive(Args, Debug)]
struct FileArgs {
    /// Path(s) to JSON file(s) to validate
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print one JSON report per file instead of the human-readable report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (schema, args) = match cli.command {
        Commands::Validate(args) => (Schema::Workout, args),
        Commands::ValidateRide(args) => (Schema::Ride, args),
    };

    let all_valid = if args.json {
        run_json(schema, &args.paths)?
    } else {
        run_human(schema, &args.paths)
    };

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_human(schema: Schema, paths: &[PathBuf]) -> bool {
    let mut all_valid = true;

    for path in paths {
        println!("\nValidating {}:", path.display());
        match check_file(path, schema) {
            Ok(checked) if checked.report.is_valid() => {
                info!(path = %path.display(), "valid");
                for line in schema.summarize(&checked.document) {
                    println!("✓ {line}");
                }
            }
            Ok(checked) => {
                info!(path = %path.display(), errors = checked.report.errors().len(), "invalid");
                all_valid = false;
                println!("❌ Validation errors:");
                for error in checked.report.errors() {
                    println!("   - {error}");
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load");
                all_valid = false;
                println!("❌ {e}");
            }
        }
    }

    if all_valid {
        println!("\n✓ All {} file(s) are valid!", paths.len());
    } else {
        println!("\n❌ Some files have validation errors");
    }
    all_valid
}

fn run_json(schema: Schema, paths: &[PathBuf]) -> anyhow::Result<bool> {
    let mut all_valid = true;
    for path in paths {
        let outcome = check_file(path, schema);
        if let Err(e) = &outcome {
            warn!(path = %path.display(), error = %e, "could not load");
        }
        let report = FileReport::new(path, &outcome);
        all_valid &= report.passed();
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(all_valid)
}
