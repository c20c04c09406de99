//! Person request validation CLI.
//!
//! Validates a JSON payload file and prints the outcome as JSON.
//!
//! ```bash
//! asst_person_core create payload.json
//! asst_person_core update payload.json
//! ```
//!
//! Exit codes: `0` valid, `1` invalid, `2` usage / IO / JSON error.

use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;
use log::{debug, error, info};

use asst_person_core::config::BirthYearConfig;
use asst_person_core::domain::{PersonCreateRequest, PersonUpdateRequest};
use asst_person_core::errors::{AppError, AppResult};
use asst_person_core::validation::{RangeBirthYearRule, ValidationOutcome};

const USAGE: &str = "usage: asst_person_core <create|update> <payload.json>";

fn main() -> ExitCode {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(name) => info!("{} loaded", name),
        Err(e) => debug!("No env file loaded: {}", e),
    }

    info!(
        "Starting person request validation (birth age {}-{})",
        BirthYearConfig::min_age(),
        BirthYearConfig::max_age()
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok((outcome, rendered)) => {
            println!("{}", rendered);
            if outcome.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}

/// Reads, deserializes and validates the payload named on the command line.
fn run(args: &[String]) -> AppResult<(ValidationOutcome, String)> {
    let (kind, path) = match args {
        [kind, path] if kind == "create" || kind == "update" => (kind.as_str(), path.as_str()),
        [kind, _] => {
            return Err(AppError::UsageError(format!(
                "unknown request kind '{}'. {}",
                kind, USAGE
            )));
        }
        _ => return Err(AppError::UsageError(USAGE.to_string())),
    };

    let payload = std::fs::read_to_string(path)?;
    let birth_year_rule = RangeBirthYearRule::from_config();
    debug!(
        "Birth year plausibility range: {}-{}",
        birth_year_rule.earliest_year(),
        birth_year_rule.latest_year()
    );

    let outcome = if kind == "create" {
        serde_json::from_str::<PersonCreateRequest>(&payload)?.validate_with(&birth_year_rule)
    } else {
        serde_json::from_str::<PersonUpdateRequest>(&payload)?.validate_with(&birth_year_rule)
    };

    info!(
        "{} request {}: {} violation(s)",
        kind,
        path,
        outcome.violations().len()
    );

    let rendered = serde_json::to_string_pretty(&outcome)?;
    Ok((outcome, rendered))
}

/// Loads the env file selected by `PROFILE`.
///
/// * `PROFILE=dev` - `.env.dev`
/// * `PROFILE=prod` - `.env.prod`
/// * otherwise - `.env`
///
/// Runs before logging is initialized so `RUST_LOG` may come from the file;
/// the result is logged by the caller.
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev".to_string()),
        _ => dotenv().map(|_| ".env".to_string()),
    }
}

/// Initializes `env_logger` from `RUST_LOG` (default `info`).
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
