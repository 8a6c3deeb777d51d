//! Structured logging for the dataset tools
//!
//! Console output goes to stderr so that stdout only carries reports. Every run
//! span carries a fresh `run_id`, and each activity is handled inside its own
//! child span, so JSON file records from one invocation can be grouped.

pub mod config;

use anyhow::Result;
use tracing::Span;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

pub use config::LoggingConfig;

/// Initialize the logging system with the provided configuration.
///
/// The returned guard flushes the file sink on drop and must be kept alive
/// for the duration of the run.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!(e));
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            config.level
        ))
    });

    let mut layers = Vec::new();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(config.include_file_location)
        .with_file(config.include_file_location);
    layers.push(console_layer.boxed());

    let mut guard = None;
    if let Some(ref log_dir) = config.log_directory {
        std::fs::create_dir_all(log_dir)?;
        let file_appender = tracing_appender::rolling::daily(log_dir, "activity-tools.log");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .json();
        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    tracing::debug!("Logging system initialized with config: {:?}", config);
    Ok(guard)
}

/// Root span for one invocation of a tool, tagged with a fresh run id.
pub fn run_span(tool: &str) -> Span {
    tracing::info_span!("run", tool, run_id = %Uuid::new_v4())
}

/// Span covering the processing of a single activity.
pub fn activity_span(index: usize, activity: &crate::data::Activity) -> Span {
    let id = activity.display_id();
    tracing::debug_span!(
        "activity",
        index,
        image_path = %activity.image_path.display(),
        id = id.as_deref()
    )
}
