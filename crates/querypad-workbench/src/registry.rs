//! Result registry for one tab.
//!
//! The registry accumulates per-statement outcomes in execution order and
//! produces immutable [`ResultSet`] snapshots with derived aggregate
//! statistics. The execution layer records outcomes as statements complete
//! and snapshots once the run is done; the snapshot is what gets delivered
//! to the tab state.

use querypad_core::{ExecStats, ResultSet, StatementResult};

/// Ordered collection of completed statement outcomes for one execution.
#[derive(Debug, Default)]
pub struct ResultRegistry {
    entries: Vec<StatementResult>,
}

impl ResultRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one statement outcome. Order of recording is execution order
    /// and is rendering-significant.
    pub fn record(&mut self, result: StatementResult) {
        self.entries.push(result);
    }

    /// Replace the whole collection. A new execution replaces results
    /// rather than mutating them in place.
    pub fn replace_all(&mut self, results: Vec<StatementResult>) {
        self.entries = results;
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded outcomes in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &StatementResult> {
        self.entries.iter()
    }

    /// Aggregate statistics over the current entries.
    pub fn total_stats(&self) -> ExecStats {
        ExecStats::derive(&self.entries)
    }

    /// Produce an immutable result set from the current entries.
    pub fn snapshot(&self) -> ResultSet {
        ResultSet::new(self.entries.clone())
    }

    /// Consume the registry into an immutable result set.
    pub fn into_result_set(self) -> ResultSet {
        ResultSet::new(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(sql: &str, rows: usize, elapsed_ms: u64) -> StatementResult {
        StatementResult::ok(
            sql,
            vec!["value".to_string()],
            (0..rows).map(|i| vec![json!(i)]).collect(),
            elapsed_ms,
        )
    }

    #[test]
    fn test_record_preserves_order() {
        let mut registry = ResultRegistry::new();
        registry.record(ok("SELECT 1", 1, 2));
        registry.record(ok("SELECT 2", 1, 3));

        let order: Vec<_> = registry.iter().map(|r| r.sql.as_str()).collect();
        assert_eq!(order, vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_snapshot_derives_stats() {
        let mut registry = ResultRegistry::new();
        registry.record(ok("SELECT 1", 3, 2));
        registry.record(StatementResult::failed("SELEKT", "syntax error", 1));

        let set = registry.snapshot();
        assert_eq!(set.total_stats.total_rows, 3);
        assert_eq!(set.total_stats.elapsed_ms, 3);
        assert_eq!(set.total_stats.error_count, 1);
    }

    #[test]
    fn test_replace_all_swaps_entries() {
        let mut registry = ResultRegistry::new();
        registry.record(ok("SELECT 1", 5, 10));

        registry.replace_all(vec![ok("SELECT 2", 2, 4)]);
        assert_eq!(registry.len(), 1);

        let stats = registry.total_stats();
        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.elapsed_ms, 4);
    }

    #[test]
    fn test_empty_registry_snapshot() {
        let registry = ResultRegistry::new();
        let set = registry.snapshot();
        assert!(set.is_empty());
        assert_eq!(set.total_stats, ExecStats::default());
    }
}
