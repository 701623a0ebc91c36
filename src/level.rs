use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Levels are ordered, and a logger drops every message whose level is
/// below its threshold. Any integer is a valid level so that a threshold can
/// sit below `TRACE` (accept everything) or above `STATS` (silence the
/// logger); such values display as `UNKNOWN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

const NAMES: [&str; 7] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL", "STATS"];

impl Level {
    pub const TRACE: Level = Level(0);
    pub const DEBUG: Level = Level(1);
    pub const INFO: Level = Level(2);
    pub const WARN: Level = Level(3);
    pub const ERROR: Level = Level(4);
    pub const FATAL: Level = Level(5);
    /// Side channel for metrics-style messages. Highest in the ordering,
    /// but not "more severe" than FATAL.
    pub const STATS: Level = Level(6);

    pub const fn from_i32(value: i32) -> Level {
        Level(value)
    }

    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// True for the seven named levels.
    pub fn is_known(self) -> bool {
        usize::try_from(self.0).is_ok_and(|i| i < NAMES.len())
    }

    pub fn as_str(self) -> &'static str {
        usize::try_from(self.0)
            .ok()
            .and_then(|i| NAMES.get(i))
            .copied()
            .unwrap_or("UNKNOWN")
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::TRACE
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level {0:?}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s.trim()))
            .map(|i| Level(i as i32))
            .ok_or_else(|| ParseLevelError(s.into()))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::ERROR,
            log::Level::Warn => Level::WARN,
            log::Level::Info => Level::INFO,
            log::Level::Debug => Level::DEBUG,
            log::Level::Trace => Level::TRACE,
        }
    }
}

impl serde::Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_known() {
            serializer.serialize_str(self.as_str())
        } else {
            serializer.serialize_i32(self.0)
        }
    }
}

// Accepts either a level name or a raw integer.
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl serde::de::Visitor<'_> for LevelVisitor {
            type Value = Level;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a log level name or integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Level, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Level, E> {
                i32::try_from(v).map(Level).map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Level, E> {
                i32::try_from(v).map(Level).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEVELS: [(Level, &str); 7] = [
        (Level::STATS, "STATS"),
        (Level::FATAL, "FATAL"),
        (Level::ERROR, "ERROR"),
        (Level::WARN, "WARN"),
        (Level::INFO, "INFO"),
        (Level::DEBUG, "DEBUG"),
        (Level::TRACE, "TRACE"),
    ];

    #[test]
    fn test_level_strings() {
        for (level, want) in LEVELS {
            assert_eq!(level.as_str(), want);
            assert_eq!(level.to_string(), want);
        }
    }

    #[test]
    fn test_unknown_levels() {
        for value in [-1, 7, 100, i32::MIN, i32::MAX] {
            let level = Level::from_i32(value);
            assert_eq!(level.as_str(), "UNKNOWN");
            assert!(!level.is_known());
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Level::TRACE < Level::DEBUG);
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
        assert!(Level::ERROR < Level::FATAL);
        assert!(Level::FATAL < Level::STATS);
        assert!(Level::from_i32(-1) < Level::TRACE);
        assert!(Level::from_i32(7) > Level::STATS);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Level>(), Ok(Level::WARN));
        assert_eq!(" Stats ".parse::<Level>(), Ok(Level::STATS));
        assert_eq!("TRACE".parse::<Level>(), Ok(Level::TRACE));
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(ParseLevelError("verbose".into()))
        );
        assert_eq!(
            "UNKNOWN".parse::<Level>().unwrap_err().to_string(),
            "unknown log level \"UNKNOWN\""
        );
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Level::from(log::Level::Error), Level::ERROR);
        assert_eq!(Level::from(log::Level::Warn), Level::WARN);
        assert_eq!(Level::from(log::Level::Info), Level::INFO);
        assert_eq!(Level::from(log::Level::Debug), Level::DEBUG);
        assert_eq!(Level::from(log::Level::Trace), Level::TRACE);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Level::INFO).unwrap(), "\"INFO\"");
        assert_eq!(serde_json::to_string(&Level::from_i32(9)).unwrap(), "9");
        assert_eq!(
            serde_json::from_str::<Level>("\"debug\"").unwrap(),
            Level::DEBUG
        );
        assert_eq!(serde_json::from_str::<Level>("-1").unwrap(), Level::from_i32(-1));
        assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    }
}
