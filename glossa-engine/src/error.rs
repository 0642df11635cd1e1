//! Engine error types
//!
//! Wraps deterministic [`CoreError`]s and adds the failures that only the
//! orchestration layer can hit: language lookup, configuration, I/O and
//! thread pool setup.

use glossa_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// No language registered under this code or name
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The code or name that was looked up
        code: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// The multi-token index could not be built
    #[error("failed to build multi-token index: {0}")]
    IndexError(String),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}

#[cfg(feature = "parallel")]
impl From<rayon::ThreadPoolBuildError> for EngineError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        EngineError::ParallelError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: EngineError = CoreError::UncoveredPosition(3).into();
        assert_eq!(
            err.to_string(),
            "core algorithm error: token position 3 is not covered by any candidate"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError(msg) if msg.contains("missing.toml")));
    }
}
