//! Statement selectors for query execution.
//!
//! The editor toolbar can run either the whole buffer or the statement at
//! the cursor. The selector carries that choice to the execution layer; the
//! locator payload is passed through the controller unmodified.

use serde::{Deserialize, Serialize};

/// Locates the statement to run within the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLocator {
    /// Byte offset of the cursor within the buffer.
    pub offset: usize,

    /// The statement text under the cursor, as extracted by the editor.
    pub sql: String,
}

/// What to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuerySelector {
    /// Execute every statement in the buffer.
    WholeBuffer,

    /// Execute the single statement under the cursor.
    Current(StatementLocator),
}
