use activity_tools::config::{Config, ResizeFilter};
use activity_tools::logging::{self, LoggingConfig};
use activity_tools::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "activity-tools")]
#[command(about = "Square crop, square resize and validation for activity image datasets")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON array of activities
    #[arg(long, global = true, default_value = "activities.json")]
    activities: PathBuf,

    /// Also write JSON logs to this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop every non-square image to a centered square (<stem>-crop<ext>)
    Crop,

    /// Resample every non-square image to a square (<stem>-resize<ext>)
    Resize {
        /// Resampling filter
        #[arg(short, long, value_enum)]
        filter: Option<ResizeFilter>,
    },

    /// Check titles and image aspect ratios and print a summary
    Validate {
        /// Do not check that titles start with an -ing word
        #[arg(long)]
        skip_title_check: bool,

        /// Do not check image aspect ratios
        #[arg(long)]
        skip_aspect_check: bool,

        /// Smallest accepted aspect ratio, as W:H
        #[arg(long)]
        min_aspect_ratio: Option<String>,

        /// Largest accepted aspect ratio, as W:H
        #[arg(long)]
        max_aspect_ratio: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    check_config(&config)?;

    // Held until exit so the file sink is flushed
    let _log_guard = logging::init_logging(&config.logging)?;
    tracing::debug!(config = %serde_json::to_string(&config)?, "Effective configuration");

    match cli.command {
        Commands::Crop => handle_square(&config, &Cropper)?,
        Commands::Resize { .. } => {
            handle_square(&config, &Resizer::new(config.square.resize_filter))?
        }
        Commands::Validate { .. } => handle_validate(&config)?,
    }

    Ok(())
}

/// Apply the command-line overrides on top of `Config::default()`.
fn build_config(cli: &Cli) -> Config {
    let mut config = Config {
        activities_file: cli.activities.clone(),
        logging: LoggingConfig {
            log_directory: cli.log_dir.clone(),
            ..LoggingConfig::from_verbosity(cli.verbose)
        },
        ..Config::default()
    };

    match &cli.command {
        Commands::Crop => {}
        Commands::Resize { filter } => {
            if let Some(filter) = filter {
                config.square.resize_filter = *filter;
            }
        }
        Commands::Validate {
            skip_title_check,
            skip_aspect_check,
            min_aspect_ratio,
            max_aspect_ratio,
        } => {
            let validation = &mut config.validation;
            validation.check_title_infinitive_form &= !skip_title_check;
            validation.check_image_aspect_ratio &= !skip_aspect_check;
            if let Some(min) = min_aspect_ratio {
                validation.minimum_desired_aspect_ratio = min.clone();
            }
            if let Some(max) = max_aspect_ratio {
                validation.maximum_desired_aspect_ratio = max.clone();
            }
        }
    }

    config
}

fn check_config(config: &Config) -> anyhow::Result<()> {
    if let Err(errors) = config.validate() {
        let mut message = String::from("Configuration validation errors:");
        for error in errors {
            message.push_str("\n  - ");
            message.push_str(&error);
        }
        return Err(anyhow::anyhow!(message));
    }
    Ok(())
}

fn handle_square(config: &Config, transform: &dyn SquareTransform) -> anyhow::Result<()> {
    let _run = logging::run_span(transform.name()).entered();
    tracing::debug!(
        desired_aspect_ratio = %config.square.desired_aspect_ratio,
        "Starting square pass"
    );

    let activities = load_activities(&config.activities_file)?;
    let summary = run_square_pass(&activities, transform)?;

    tracing::info!(
        processed = summary.processed,
        skipped = summary.skipped,
        written = summary.written.len(),
        "Square pass finished"
    );
    Ok(())
}

fn handle_validate(config: &Config) -> anyhow::Result<()> {
    let _run = logging::run_span("Validate").entered();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = validate_dataset(config, &mut out)?;

    tracing::info!(
        total = stats.total,
        valid = stats.valid,
        failed_title = stats.failed_title,
        failed_aspect = stats.failed_aspect,
        failed_both = stats.failed_both,
        "Validation finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::imageops::FilterType;

    fn config_from(args: &[&str]) -> Config {
        let cli = Cli::try_parse_from(args).unwrap();
        build_config(&cli)
    }

    #[test]
    fn test_bare_subcommands_use_defaults() {
        let config = config_from(&["activity-tools", "validate"]);
        assert_eq!(config.activities_file, PathBuf::from("activities.json"));
        assert!(config.validation.check_title_infinitive_form);
        assert!(config.validation.check_image_aspect_ratio);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.log_directory.is_none());

        let config = config_from(&["activity-tools", "resize"]);
        assert_eq!(config.square.resize_filter, ResizeFilter::CatmullRom);
    }

    #[test]
    fn test_validate_overrides() {
        let config = config_from(&[
            "activity-tools",
            "validate",
            "--skip-title-check",
            "--min-aspect-ratio",
            "3:4",
            "--max-aspect-ratio",
            "16:9",
        ]);
        assert!(!config.validation.check_title_infinitive_form);
        assert!(config.validation.check_image_aspect_ratio);
        assert_eq!(config.validation.minimum_desired_aspect_ratio, "3:4");
        assert_eq!(config.validation.maximum_desired_aspect_ratio, "16:9");

        let config = config_from(&["activity-tools", "validate", "--skip-aspect-check"]);
        assert!(config.validation.check_title_infinitive_form);
        assert!(!config.validation.check_image_aspect_ratio);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = config_from(&[
            "activity-tools",
            "crop",
            "--activities",
            "data/list.json",
            "--log-dir",
            "logs",
            "-vv",
        ]);
        assert_eq!(config.activities_file, PathBuf::from("data/list.json"));
        assert_eq!(config.logging.log_directory, Some(PathBuf::from("logs")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_resize_filter_override() {
        let config = config_from(&["activity-tools", "resize", "--filter", "nearest"]);
        assert_eq!(config.square.resize_filter, ResizeFilter::Nearest);
        assert_eq!(FilterType::from(config.square.resize_filter), FilterType::Nearest);
    }

    #[test]
    fn test_check_config_lists_errors() {
        let config = config_from(&["activity-tools", "validate", "--max-aspect-ratio", "1:0"]);
        let message = check_config(&config).unwrap_err().to_string();
        assert!(message.starts_with("Configuration validation errors:"));
        assert!(message.contains("\n  - maximum_desired_aspect_ratio"));

        let config = config_from(&[
            "activity-tools",
            "validate",
            "--skip-aspect-check",
            "--max-aspect-ratio",
            "1:0",
        ]);
        assert!(check_config(&config).is_ok());
    }
}
