use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel},
};

/// Environment variable overriding [`LoggerConfig::format`].
pub const ENV_LOG_FORMAT: &str = "ONBRD_LOG_FORMAT";
/// Environment variable overriding [`LoggerConfig::level`].
pub const ENV_LOG_LEVEL: &str = "ONBRD_LOG_LEVEL";
/// Environment variable overriding [`LoggerConfig::use_color`].
pub const ENV_LOG_COLOR: &str = "ONBRD_LOG_COLOR";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Log level filter expression (e.g., "info", "onbrd_core=debug,info").
    pub level: LoggerLevel,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with `ONBRD_LOG_*` variables from the process environment.
    pub fn from_env() -> LoggerResult<Self> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Overlay values returned by `lookup` for the `ONBRD_LOG_*` keys.
    ///
    /// Unset keys keep the current value; set but invalid values are errors.
    pub fn overlay<F>(mut self, lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            self.format = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            self.level = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_COLOR) {
            self.use_color = parse_bool(&v).ok_or(LoggerError::InvalidEnv {
                var: ENV_LOG_COLOR,
                value: v,
            })?;
        }
        Ok(self)
    }

    /// Determines whether colored output should be used.
    ///
    /// Color is enabled only if `use_color` is set and stdout is a terminal.
    /// Call this at logger initialization, not while parsing config.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn default_values() {
        let config = LoggerConfig::default();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.level.as_str(), LoggerLevel::default().as_str());
        assert_eq!(config.format, LoggerFormat::default());
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"format": "json", "level": "onbrd_core=debug,info"}"#;
        let config: LoggerConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "onbrd_core=debug,info");
        assert!(config.with_targets);
    }

    #[test]
    fn overlay_applies_set_keys_only() {
        let config = LoggerConfig::default()
            .overlay(env(&[(ENV_LOG_FORMAT, "JSON"), (ENV_LOG_COLOR, "off")]))
            .unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "info");
        assert!(!config.use_color);
    }

    #[test]
    fn overlay_rejects_invalid_values() {
        let res = LoggerConfig::default().overlay(env(&[(ENV_LOG_FORMAT, "xml")]));
        assert!(matches!(res, Err(LoggerError::InvalidFormat(_))));

        let res = LoggerConfig::default().overlay(env(&[(ENV_LOG_LEVEL, "onbrd_core=loud")]));
        assert!(matches!(res, Err(LoggerError::InvalidLevel(_))));

        let res = LoggerConfig::default().overlay(env(&[(ENV_LOG_COLOR, "maybe")]));
        assert!(matches!(
            res,
            Err(LoggerError::InvalidEnv { var: ENV_LOG_COLOR, .. })
        ));
    }
}
