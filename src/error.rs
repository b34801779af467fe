//! Error types.
//!
//! Drawing a frame cannot fail; these cover configuration and startup.

use std::fmt;

/// A `TrailConfig` value that the animator cannot run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// History capacity of zero.
    ZeroCapacity,
    /// Clean mode would never drain anything.
    ZeroDrain,
    /// Particle clouds with no particles.
    ZeroParticles,
    /// Hue step must be finite and positive.
    InvalidHueStep(f64),
    /// Jitter scale range is empty, inverted or not positive.
    InvalidJitter { min: f64, max: f64 },
    /// Frame-rate window must be finite and positive.
    InvalidFrameRateWindow(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "Trail capacity must be at least 1"),
            ConfigError::ZeroDrain => write!(f, "Drain count per frame must be at least 1"),
            ConfigError::ZeroParticles => write!(f, "Particle count per point must be at least 1"),
            ConfigError::InvalidHueStep(step) => {
                write!(f, "Hue step must be finite and positive, got {}", step)
            }
            ConfigError::InvalidJitter { min, max } => write!(
                f,
                "Jitter scale range must satisfy 0 < min <= max, got {}..{}",
                min, max
            ),
            ConfigError::InvalidFrameRateWindow(window) => write!(
                f,
                "Frame-rate window must be finite and positive, got {}",
                window
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors while installing the logger.
#[derive(Debug)]
pub enum LoggingError {
    /// log4rs rejected the appender/root configuration.
    Config(log4rs::config::runtime::ConfigErrors),
    /// A global logger was already installed.
    AlreadySet(log::SetLoggerError),
    /// `RIBBON_LOG` did not name a level.
    UnknownLevel(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Config(e) => write!(f, "Invalid logging configuration: {}", e),
            LoggingError::AlreadySet(e) => write!(f, "Logger already installed: {}", e),
            LoggingError::UnknownLevel(level) => write!(
                f,
                "Unknown log level '{}'. Use one of off, error, warn, info, debug, trace.",
                level
            ),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Config(e) => Some(e),
            LoggingError::AlreadySet(e) => Some(e),
            LoggingError::UnknownLevel(_) => None,
        }
    }
}

impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        LoggingError::Config(e)
    }
}

impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self {
        LoggingError::AlreadySet(e)
    }
}
