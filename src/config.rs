use crate::level::{Level, ParseLevelError};

pub const LEVEL_VAR: &str = "LVLOG_LEVEL";
pub const NAME_VAR: &str = "LVLOG_NAME";

/// Logger settings, embeddable in an application's own configuration.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub name: Option<String>,
    pub level: Option<Level>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    Level {
        var: &'static str,
        source: ParseLevelError,
    },
}

impl Config {
    /// Reads `LVLOG_LEVEL` and `LVLOG_NAME`. Unset or empty variables are `None`.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(|var| std::env::var(var).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let level = get(LEVEL_VAR)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Level>())
            .transpose()
            .map_err(|source| ConfigError::Level {
                var: LEVEL_VAR,
                source,
            })?;
        Ok(Config {
            name: get(NAME_VAR).filter(|n| !n.is_empty()),
            level,
        })
    }
}
