//! Error types.
//!
//! - `TeethFormatError` is the only error the calculation core produces.
//! - `AppError` is what the binary surfaces: a message plus a process exit code.
//!
//! Exit codes:
//! - 2: bad input (teeth, flags, catalog or settings values)
//! - 3: lookup failure (unknown component / configuration)
//! - 4: output or filesystem failure

use thiserror::Error;

/// Raised when a tooth-count representation cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeethFormatError {
    #[error("Invalid teeth format: `{token}` is not a whole tooth count")]
    InvalidToken { token: String },

    #[error("Invalid teeth format: unsupported value `{0}`")]
    UnsupportedValue(String),

    #[error("Invalid teeth format: no tooth counts given")]
    Empty,

    #[error("Invalid teeth format: tooth counts must be positive (found {0})")]
    NonPositive(u32),

    #[error("Invalid teeth format: declared {declared}-speed but found {parsed} cogs")]
    SpeedMismatch { declared: u32, parsed: usize },
}

impl TeethFormatError {
    pub(crate) fn token(token: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<TeethFormatError> for AppError {
    fn from(err: TeethFormatError) -> Self {
        AppError::new(2, err.to_string())
    }
}
