use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
///
/// Errors only arise at the edges (terminal setup, config and seed parsing);
/// core state transitions degrade to no-ops instead of failing.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from reading config or seed files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal initialization or rendering errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid virtual filesystem seed data.
    #[error("Seed error: {0}")]
    Seed(String),
}
