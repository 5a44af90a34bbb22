use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all reqmin operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ReqminError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A requirement token could not be parsed.
    #[error("Invalid requirement '{token}': {reason}")]
    #[diagnostic(help(
        "A requirement is one of <, <=, >, >=, ==, != followed by a dotted version such as 2.10"
    ))]
    InvalidRequirement { token: String, reason: String },

    /// No version can satisfy every requirement at once.
    #[error("Unsatisfiable requirements: {reason}")]
    Unsatisfiable { reason: String },

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your reqmin config.toml for syntax errors"))]
    Config { message: String },
}

impl ReqminError {
    /// Build a [`ReqminError::InvalidRequirement`] for `token`.
    pub fn invalid(token: impl Into<String>, reason: impl Into<String>) -> Self {
        ReqminError::InvalidRequirement {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type ReqminResult<T> = miette::Result<T>;
