use snafu::ResultExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, snafu::Snafu)]
pub enum InitLoggerError {
    #[snafu(display("Failed to initialize logger: {}", source))]
    LoggerFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Install the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// `log_level` when set. Logs go to stderr so stdout stays machine-readable.
pub fn init_logger(log_level: &str) -> Result<(), InitLoggerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .context(LoggerFailedSnafu)?;

    Ok(())
}
