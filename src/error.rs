use thiserror::Error;

/// Unified error type for version derivation
///
/// Every variant names the stage that failed; the message carries the
/// operation and the underlying cause.
#[derive(Error, Debug)]
pub enum GitverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository access failed: {0}")]
    RepositoryAccess(String),

    #[error("Enumeration failed: {0}")]
    Enumeration(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Version composition error: {0}")]
    Composition(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitver
pub type Result<T> = std::result::Result<T, GitverError>;

impl GitverError {
    /// Create an input validation error with context
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GitverError::InvalidInput(msg.into())
    }

    /// Create a repository access error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GitverError::RepositoryAccess(msg.into())
    }

    /// Create an enumeration error with context
    pub fn enumeration(msg: impl Into<String>) -> Self {
        GitverError::Enumeration(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GitverError::Parse(msg.into())
    }

    /// Create a composition error with context
    pub fn composition(msg: impl Into<String>) -> Self {
        GitverError::Composition(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitverError::Config(msg.into())
    }
}
