//! Stub execution collaborator.
//!
//! Demonstrates the asynchronous execution contract without a real server:
//! `exec_queries` registers a tracker entry and returns immediately; a
//! spawned task simulates per-statement work, then delivers the whole
//! result set through the field-change sink and removes the tracker entry.
//!
//! Failures stay inside the result set as error entries. Statements the
//! stub cannot handle never fault back to the controller.

use querypad_core::{ExecError, QuerySelector, StatementResult, TabId};
use querypad_workbench::{
    ExecutionTracker, FieldChange, QueryExecutor, ResultRegistry, TabStateCell,
};
use std::sync::Arc;
use std::time::Duration;

/// Simulated per-statement latency.
const STATEMENT_DELAY: Duration = Duration::from_millis(20);

/// A scripted executor that answers every SELECT with one echo row.
pub struct StubExecutor {
    cell: Arc<TabStateCell>,
    tracker: Arc<ExecutionTracker>,
}

impl StubExecutor {
    /// Create a stub bound to one tab's state cell and the session tracker.
    pub fn new(cell: Arc<TabStateCell>, tracker: Arc<ExecutionTracker>) -> Self {
        Self { cell, tracker }
    }

    /// Split buffer content into statements. Naive on purpose; real
    /// statement splitting belongs to the execution engine.
    fn split_statements(content: &str) -> Vec<String> {
        content
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Simulate executing one statement. Failures become error entries in
    /// the result set; `ExecError` never crosses back to the controller.
    fn run_statement(sql: &str) -> StatementResult {
        let elapsed_ms = STATEMENT_DELAY.as_millis() as u64;
        match Self::answer(sql) {
            Ok(rows) => StatementResult::ok(sql, vec!["echo".to_string()], rows, elapsed_ms),
            Err(e) => StatementResult::failed(sql, e.to_string(), elapsed_ms),
        }
    }

    /// The stub's whole "engine": echo SELECT statements, reject the rest.
    fn answer(sql: &str) -> Result<Vec<Vec<serde_json::Value>>, ExecError> {
        if sql.trim_start().to_ascii_uppercase().starts_with("SELECT") {
            Ok(vec![vec![serde_json::Value::String(sql.to_string())]])
        } else {
            Err(ExecError::Statement(
                "stub executor only handles SELECT".to_string(),
            ))
        }
    }
}

impl QueryExecutor for StubExecutor {
    fn exec_queries(&self, tab: TabId, selector: QuerySelector) {
        let statements = match selector {
            QuerySelector::WholeBuffer => {
                Self::split_statements(&self.cell.with_state_ref(|s| s.content.clone()))
            }
            QuerySelector::Current(locator) => vec![locator.sql],
        };

        if statements.is_empty() {
            tracing::debug!(%tab, "Nothing to execute");
            return;
        }

        let id = self.tracker.begin(tab, statements.join("; "));
        let cell = self.cell.clone();
        let tracker = self.tracker.clone();

        tokio::spawn(async move {
            let mut registry = ResultRegistry::new();
            for sql in &statements {
                tokio::time::sleep(STATEMENT_DELAY).await;
                registry.record(Self::run_statement(sql));
            }

            let result_set = registry.into_result_set();
            tracing::info!(
                %tab,
                statements = result_set.len(),
                errors = result_set.total_stats.error_count,
                "Execution finished"
            );

            // Whole-set replacement: readers never observe a partial update
            cell.change_field(FieldChange::QueriesResult(Some(result_set)));
            tracker.finish(id);

            // Late completion after unmount silently skips the focus
            cell.with_editor(|editor| editor.focus());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use querypad_core::StatementLocator;

    async fn wait_for_result(cell: &TabStateCell) {
        let mut rx = cell.subscribe();
        while rx.borrow().queries_result.is_none() {
            rx.changed().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_whole_buffer_runs_every_statement() {
        let cell = Arc::new(TabStateCell::new());
        let tracker = Arc::new(ExecutionTracker::new());
        cell.change_field(FieldChange::Content("SELECT 1; SELECT 2;".to_string()));

        let executor = StubExecutor::new(cell.clone(), tracker.clone());
        let tab = TabId::new();
        executor.exec_queries(tab, QuerySelector::WholeBuffer);
        assert!(tracker.is_executing(tab));

        wait_for_result(&cell).await;
        let set = cell.snapshot().queries_result.unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_stats.error_count, 0);
    }

    #[tokio::test]
    async fn test_current_statement_uses_locator_sql() {
        let cell = Arc::new(TabStateCell::new());
        let tracker = Arc::new(ExecutionTracker::new());
        cell.change_field(FieldChange::Content("SELECT 1; SELECT 2;".to_string()));

        let executor = StubExecutor::new(cell.clone(), tracker.clone());
        executor.exec_queries(
            TabId::new(),
            QuerySelector::Current(StatementLocator {
                offset: 10,
                sql: "SELECT 2".to_string(),
            }),
        );

        wait_for_result(&cell).await;
        let set = cell.snapshot().queries_result.unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.list[0].sql, "SELECT 2");
    }

    #[tokio::test]
    async fn test_failure_is_an_error_entry() {
        let cell = Arc::new(TabStateCell::new());
        let tracker = Arc::new(ExecutionTracker::new());
        cell.change_field(FieldChange::Content("DROP TABLE events".to_string()));

        let executor = StubExecutor::new(cell.clone(), tracker.clone());
        let tab = TabId::new();
        executor.exec_queries(tab, QuerySelector::WholeBuffer);

        wait_for_result(&cell).await;
        let set = cell.snapshot().queries_result.unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.list[0].is_error());
        assert_eq!(
            set.list[0].error.as_deref(),
            Some("Statement error: stub executor only handles SELECT")
        );
        assert_eq!(set.total_stats.error_count, 1);
        assert!(!tracker.is_executing(tab));
    }

    #[tokio::test]
    async fn test_empty_buffer_starts_nothing() {
        let cell = Arc::new(TabStateCell::new());
        let tracker = Arc::new(ExecutionTracker::new());

        let executor = StubExecutor::new(cell.clone(), tracker.clone());
        executor.exec_queries(TabId::new(), QuerySelector::WholeBuffer);

        assert!(tracker.is_empty());
        assert!(cell.snapshot().queries_result.is_none());
    }

    #[tokio::test]
    async fn test_late_completion_tolerates_unmounted_editor() {
        let cell = Arc::new(TabStateCell::new());
        let tracker = Arc::new(ExecutionTracker::new());
        cell.change_field(FieldChange::Content("SELECT 1".to_string()));

        let executor = StubExecutor::new(cell.clone(), tracker.clone());
        let tab = TabId::new();
        executor.exec_queries(tab, QuerySelector::WholeBuffer);

        // Unmount while the execution is still in flight
        cell.change_field(FieldChange::EditorHandle(None));

        wait_for_result(&cell).await;
        assert!(cell.snapshot().queries_result.is_some());
        assert!(!tracker.is_executing(tab));
    }
}
