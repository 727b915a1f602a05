//! Core types for the Querypad workbench.
//!
//! This crate contains shared data structures that are used across all
//! Querypad crates:
//! - Query result and aggregate statistics types
//! - Server structure description for the database picker
//! - Statement selectors for query execution
//! - Stable tab and query identifiers
//! - Configuration types
//! - Error types

mod config;
mod error;
mod ids;
mod result;
mod selector;
mod structure;

pub use config::{
    config_dir, config_path, ensure_config_dir, AppConfig, EditorConfig, ExecutionConfig,
};
pub use error::{ConfigError, ExecError};
pub use ids::{QueryId, TabId};
pub use result::{ExecStats, ResultSet, Row, StatementResult};
pub use selector::{QuerySelector, StatementLocator};
pub use structure::{Database, DatabaseName, ServerStructure};
