mod config;
mod error;
mod install;
mod object;

pub use config::{ENV_LOG_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use install::{BoxedSubscriber, build_subscriber};
pub use object::{LoggerFormat, LoggerLevel, LoggerRfc3339};

/// Installs the global tracing subscriber described by `cfg`, writing to stdout.
///
/// Once installed, every `tracing` event emitted by the registry and its accessors
/// goes through this subscriber. A second call fails with [`LoggerError::AlreadyInitialized`].
///
/// # Examples
/// ```rust
/// use onbrd_observe::{LoggerConfig, init_logger};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = LoggerConfig::from_env()?;
///     init_logger(&config)?;
///
///     tracing::info!("logger ready");
///     Ok(())
/// }
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    install::install(cfg, std::io::stdout)
}
