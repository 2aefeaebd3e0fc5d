use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, MakeWriter},
    layer::{Layered, SubscriberExt},
};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerRfc3339},
};

/// Type-erased subscriber produced by [`build_subscriber`].
pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

type Filtered = Layered<EnvFilter, Registry>;

/// Build the subscriber described by `cfg` without installing it.
///
/// Text and JSON output go to `writer`; journald ignores it. Use this with
/// [`tracing::subscriber::with_default`] to scope logging to a block.
pub fn build_subscriber<W>(cfg: &LoggerConfig, writer: W) -> LoggerResult<BoxedSubscriber>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::registry().with(cfg.level.to_env_filter());

    match cfg.format {
        LoggerFormat::Text => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(cfg.should_use_color())
                .with_target(cfg.with_targets)
                .with_timer(LoggerRfc3339);
            Ok(Box::new(base.with(layer)))
        }
        LoggerFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(cfg.with_targets)
                .with_current_span(true)
                .with_timer(LoggerRfc3339);
            Ok(Box::new(base.with(layer)))
        }
        LoggerFormat::Journald => journald(base),
    }
}

#[cfg(target_os = "linux")]
fn journald(base: Filtered) -> LoggerResult<BoxedSubscriber> {
    let layer =
        tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))?;
    Ok(Box::new(base.with(layer)))
}

#[cfg(not(target_os = "linux"))]
fn journald(_base: Filtered) -> LoggerResult<BoxedSubscriber> {
    Err(LoggerError::JournaldNotSupported)
}

/// Build and install the process-wide subscriber.
pub(crate) fn install<W>(cfg: &LoggerConfig, writer: W) -> LoggerResult<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = build_subscriber(cfg, writer)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggerError::AlreadyInitialized)
}
