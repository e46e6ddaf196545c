use std::path::PathBuf;
use std::process::ExitCode;

use advisor::catalog::Catalog;
use advisor::cli::{Args, Command};
use advisor::config::Config;
use advisor::logging::setup_logging;
use advisor::request::{self, RecommendationRequest};
use advisor::fmt;
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config and setup logging first so startup logs are never silently dropped
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    setup_logging(&config, args.tracing);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT_SHORT"),
        "starting advisor"
    );

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = format!("{e:#}"), "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: Config) -> Result<()> {
    let catalog_path: PathBuf = args
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .context("no catalog file given (use --catalog or set CATALOG_PATH)")?;
    let catalog = Catalog::from_path(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    match args.command {
        Command::Recommend {
            count,
            completed,
            batch,
            seed,
        } => {
            let mut options = config.assembly_options();
            if seed.is_some() {
                options.seed = seed;
            }
            let candidates = catalog.candidates(options);

            let request = RecommendationRequest {
                num_courses: count,
                taken_courses: completed,
            };
            let batches = request::handle(&candidates, &request)?;
            let total = batches.all().len();
            let window = batches
                .window(batch)
                .with_context(|| format!("cannot show set {}", batch + 1))?;

            emit(args.json, window, || fmt::recommendations(window, batch, total))
        }
        Command::Courses => {
            if catalog.is_empty() {
                bail!("No courses found in the catalog");
            }
            emit(args.json, catalog.courses(), || fmt::course_list(catalog.courses()))
        }
        Command::Course { identifier } => {
            let details = catalog
                .course(&identifier)
                .ok_or_else(|| anyhow!("Course not found: {identifier}"))?;
            emit(args.json, &details, || fmt::course_details(&details))
        }
        Command::Professors => {
            if catalog.professors().is_empty() {
                bail!("No professors found in the catalog");
            }
            emit(args.json, catalog.professors(), || {
                fmt::professor_list(catalog.professors())
            })
        }
        Command::Professor { id } => {
            let professor = catalog
                .professor(&id)
                .ok_or_else(|| anyhow!("Professor not found: {id}"))?;
            emit(args.json, professor, || fmt::professor(professor))
        }
        Command::ProfessorCourses { id } => {
            let result = catalog
                .professor_courses(&id)
                .ok_or_else(|| anyhow!("No courses found for professor {id}"))?;
            emit(args.json, &result, || fmt::professor_courses(&result))
        }
    }
}

/// Print `value` as pretty JSON, or the rendered text.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let body = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{body}");
    } else {
        print!("{}", text());
    }
    Ok(())
}
