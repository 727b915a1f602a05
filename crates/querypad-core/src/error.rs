//! Error types for the Querypad workbench.

use thiserror::Error;

/// Execution collaborator errors.
///
/// These never propagate into the interaction controller: the execution
/// layer converts them into error entries inside the delivered result set.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Connection to the server failed or was lost.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server rejected a statement.
    #[error("Statement error: {0}")]
    Statement(String),

    /// Execution was cancelled.
    #[error("Execution cancelled")]
    Cancelled,

    /// Channel communication error.
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
