//! Query result types.
//!
//! A [`ResultSet`] is the ordered outcome of one execution, possibly
//! covering multiple statements, plus aggregate statistics. It is immutable
//! once produced: a new execution replaces the whole set, so readers always
//! see either the previous complete set or the next one, never an
//! interleaving. The statement list is shared behind an `Arc` so that every
//! view fed from the same render observes the identical sequence.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One row of result data. Cell values are kept dynamically typed; decoding
/// into concrete types is the execution layer's concern.
pub type Row = Vec<serde_json::Value>;

/// Outcome of a single executed statement.
///
/// An execution failure is an error entry (`error: Some(_)`) inside a
/// successfully produced result set, never a fault propagated to the
/// caller. The view layer renders error entries like any other result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementResult {
    /// The statement that was executed.
    pub sql: String,

    /// Column names, in select order. Empty for non-select statements.
    #[serde(default)]
    pub columns: Vec<String>,

    /// Result rows, in server order.
    #[serde(default)]
    pub rows: Vec<Row>,

    /// Wall-clock execution time in milliseconds.
    pub elapsed_ms: u64,

    /// Error message if the statement failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatementResult {
    /// Create a successful statement result.
    pub fn ok(sql: impl Into<String>, columns: Vec<String>, rows: Vec<Row>, elapsed_ms: u64) -> Self {
        Self {
            sql: sql.into(),
            columns,
            rows,
            elapsed_ms,
            error: None,
        }
    }

    /// Create a failed statement result.
    pub fn failed(sql: impl Into<String>, error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            sql: sql.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            elapsed_ms,
            error: Some(error.into()),
        }
    }

    /// Check whether the statement failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate statistics over one execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecStats {
    /// Total rows across all statements.
    pub total_rows: u64,

    /// Total execution time across all statements, in milliseconds.
    pub elapsed_ms: u64,

    /// Number of statements that failed.
    pub error_count: usize,
}

impl ExecStats {
    /// Derive aggregate statistics from a sequence of statement outcomes.
    pub fn derive(results: &[StatementResult]) -> Self {
        results.iter().fold(Self::default(), |mut stats, r| {
            stats.total_rows += r.rows.len() as u64;
            stats.elapsed_ms += r.elapsed_ms;
            if r.is_error() {
                stats.error_count += 1;
            }
            stats
        })
    }
}

/// The ordered outcomes of one execution, plus aggregate stats.
///
/// Ordering is execution order and is rendering-significant: every view
/// presenting this set must show the results in `list` order.
#[derive(Debug, Clone)]
pub struct ResultSet {
    /// Per-statement outcomes in execution order, shared across views.
    pub list: Arc<[StatementResult]>,

    /// Aggregate statistics derived from `list` at construction time.
    pub total_stats: ExecStats,
}

impl ResultSet {
    /// Build a result set from statement outcomes, deriving the aggregate
    /// statistics.
    pub fn new(results: Vec<StatementResult>) -> Self {
        let total_stats = ExecStats::derive(&results);
        Self {
            list: results.into(),
            total_stats,
        }
    }

    /// Number of statement outcomes in the set.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one_row_result(sql: &str, elapsed_ms: u64) -> StatementResult {
        StatementResult::ok(
            sql,
            vec!["value".to_string()],
            vec![vec![json!(1)]],
            elapsed_ms,
        )
    }

    #[test]
    fn test_stats_derivation() {
        let results = vec![
            one_row_result("SELECT 1", 5),
            one_row_result("SELECT 2", 7),
            StatementResult::failed("SELEKT", "syntax error", 1),
        ];

        let stats = ExecStats::derive(&results);
        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.elapsed_ms, 13);
        assert_eq!(stats.error_count, 1);
    }

    #[test]
    fn test_empty_stats() {
        assert_eq!(ExecStats::derive(&[]), ExecStats::default());
    }

    #[test]
    fn test_result_set_preserves_order() {
        let set = ResultSet::new(vec![
            one_row_result("SELECT 1", 1),
            one_row_result("SELECT 2", 1),
            one_row_result("SELECT 3", 1),
        ]);

        let order: Vec<_> = set.list.iter().map(|r| r.sql.as_str()).collect();
        assert_eq!(order, vec!["SELECT 1", "SELECT 2", "SELECT 3"]);
    }

    #[test]
    fn test_result_set_list_is_shared() {
        let set = ResultSet::new(vec![one_row_result("SELECT 1", 1)]);
        let a = set.list.clone();
        let b = set.list.clone();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_error_entry_is_data_not_fault() {
        let set = ResultSet::new(vec![StatementResult::failed("SELEKT", "syntax error", 2)]);
        assert_eq!(set.len(), 1);
        assert!(set.list[0].is_error());
        assert_eq!(set.total_stats.error_count, 1);
    }
}
