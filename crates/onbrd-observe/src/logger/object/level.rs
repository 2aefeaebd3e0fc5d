use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Filter directive such as `"info"` or `"onbrd_core=debug,warn"`, validated on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a fresh `EnvFilter`; each installed subscriber owns its own.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        LoggerLevel("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvFilter::try_new(s)
            .map(|_| LoggerLevel(s.to_string()))
            .map_err(|e| LoggerError::InvalidLevel(format!("{s}: {e}")))
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;
    use crate::logger::LoggerError;

    #[test]
    fn per_crate_directives_are_validated() {
        assert!("onbrd_core=trace,onbrd_prometheus=debug,warn".parse::<LoggerLevel>().is_ok());

        let err = "onbrd_core=chatty".parse::<LoggerLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref msg) if msg.starts_with("onbrd_core=chatty")));
    }
}
