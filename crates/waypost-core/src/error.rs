use thiserror::Error;

/// Errors raised while validating shared types or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} is {len} characters long, at most {max} allowed")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
