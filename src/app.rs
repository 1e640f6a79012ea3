//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments into a `ConvertConfig`
//! - runs the conversion pipeline
//! - writes `train.json` / `dev.json` and prints the summary

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::ConvertConfig;
use crate::error::AppError;

pub mod pipeline;

const DEFAULT_LOG_FILTER: &str = "warn,bioasq2squad=info";

/// Entry point for the `bioasq2squad` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    let config = convert_config_from_args(&cli)?;
    handle_convert(&config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `--help` / `--version` succeed; every other parse failure is a usage error (exit 1).
fn handle_parse_error(err: clap::Error) -> Result<(), AppError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()
                .map_err(|e| AppError::io(format!("Failed to print help: {e}")))?;
            Ok(())
        }
        _ => Err(AppError::usage(err.render().to_string().trim_end())),
    }
}

fn handle_convert(config: &ConvertConfig) -> Result<(), AppError> {
    let run = pipeline::run_conversion(config)?;
    crate::io::squad::write_outputs(&config.output_dir, &config.source_path, &run.split)?;

    println!("{}", crate::report::format_summary(&run.stats));
    Ok(())
}

/// Validate CLI values and resolve them into a `ConvertConfig`.
pub fn convert_config_from_args(cli: &Cli) -> Result<ConvertConfig, AppError> {
    if !(cli.train_fraction.is_finite() && (0.0..=1.0).contains(&cli.train_fraction)) {
        return Err(AppError::config(format!(
            "Train fraction must be within [0, 1], got {}.",
            cli.train_fraction
        )));
    }
    if cli.context_token_limit == 0 {
        return Err(AppError::config("Context token limit must be > 0."));
    }

    Ok(ConvertConfig {
        source_path: cli.source.clone(),
        output_dir: cli.output_dir.clone(),
        seed: cli.seed,
        train_fraction: cli.train_fraction,
        context_token_limit: cli.context_token_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_IO, EXIT_USAGE};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn config_from_valid_args() {
        let cli = parse(&["bioasq2squad", "in.json", "out", "--seed", "99", "--train-fraction", "0.75"]);
        let config = convert_config_from_args(&cli).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.source_path, std::path::PathBuf::from("in.json"));
        assert!((config.train_fraction - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let cli = parse(&["bioasq2squad", "in.json", "out", "--train-fraction", "1.5"]);
        assert_eq!(convert_config_from_args(&cli).unwrap_err().exit_code(), EXIT_IO);
    }

    #[test]
    fn rejects_zero_token_limit() {
        let cli = parse(&["bioasq2squad", "in.json", "out", "--context-token-limit", "0"]);
        assert_eq!(convert_config_from_args(&cli).unwrap_err().exit_code(), EXIT_IO);
    }

    #[test]
    fn missing_arguments_map_to_usage_exit_code() {
        let err = Cli::try_parse_from(["bioasq2squad"]).unwrap_err();
        let app_err = handle_parse_error(err).unwrap_err();
        assert_eq!(app_err.exit_code(), EXIT_USAGE);
        assert!(app_err.message().contains("Usage"));
    }
}
