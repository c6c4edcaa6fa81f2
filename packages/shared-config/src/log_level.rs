//! Log verbosity parsed from `LOG_LEVEL`

use std::fmt;
use std::str::FromStr;

use crate::get_env_or_default;

/// Named log level with the numeric severities used by `LOG_LEVEL`
///
/// Names are matched case-insensitively. Anything unrecognized becomes
/// [`LogLevel::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Log,
    Info,
    Debug,
    Trace,
    Silent,
    Verbose,
}

impl LogLevel {
    /// Read `LOG_LEVEL`, defaulting to `LOG` when unset or empty
    pub fn from_env() -> Self {
        get_env_or_default("LOG_LEVEL", "LOG")
            .parse()
            .unwrap_or_default()
    }

    /// Numeric severity; higher values are more verbose
    pub fn severity(&self) -> i32 {
        match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Log => 2,
            Self::Info => 3,
            Self::Debug => 4,
            Self::Trace => 5,
            Self::Silent => -999,
            Self::Verbose => 999,
        }
    }

    /// Upper-case name as accepted in `LOG_LEVEL`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Log => "LOG",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::Silent => "SILENT",
            Self::Verbose => "VERBOSE",
        }
    }

    /// `tracing` filter directive for this level
    ///
    /// `LOG` and `INFO` both map to `info`, `VERBOSE` to `trace`.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Log | Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace | Self::Verbose => "trace",
            Self::Silent => "off",
        }
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_uppercase().as_str() {
            "ERROR" => Self::Error,
            "WARN" => Self::Warn,
            "LOG" => Self::Log,
            "DEBUG" => Self::Debug,
            "TRACE" => Self::Trace,
            "SILENT" => Self::Silent,
            "VERBOSE" => Self::Verbose,
            _ => Self::Info,
        })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
