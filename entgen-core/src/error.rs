use thiserror::Error;

/// Invalid configuration supplied by the driver.
///
/// Configuration errors are reported before any schema is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid id type '{value}', expected one of: int, int64, uint, uint64, string")]
    InvalidIdType { value: String },

    #[error("invalid {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
