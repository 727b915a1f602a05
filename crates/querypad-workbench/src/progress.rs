//! Execution progress tracker.
//!
//! A session-scoped list of queries currently executing, independent of any
//! single tab. Entries are added when execution starts and removed when it
//! completes or fails; no entry is ever mutated in place. The tracker is
//! mutated only by the execution layer and read by view composition to
//! derive progress indicators.
//!
//! Every mutation broadcasts the new entry list via `tokio::sync::watch`,
//! so progress indicators react without polling.
//!
//! Known gap: an execution that never completes leaves its entry behind
//! forever. There is deliberately no timeout-based reclamation here.

use parking_lot::RwLock;
use querypad_core::{QueryId, TabId};
use std::time::Instant;
use tokio::sync::watch;

/// One query currently executing.
#[derive(Debug, Clone)]
pub struct ExecutingQuery {
    /// Identifier of this execution.
    pub id: QueryId,

    /// Tab that started the execution.
    pub tab: TabId,

    /// The SQL being executed, for display.
    pub sql: String,

    /// When execution started.
    pub started_at: Instant,
}

/// Session-scoped tracker of in-flight executions.
pub struct ExecutionTracker {
    inner: RwLock<Vec<ExecutingQuery>>,
    tx: watch::Sender<Vec<ExecutingQuery>>,
    rx: watch::Receiver<Vec<ExecutingQuery>>,
}

impl ExecutionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        Self {
            inner: RwLock::new(Vec::new()),
            tx,
            rx,
        }
    }

    /// Register the start of an execution. Returns the id used to finish it.
    pub fn begin(&self, tab: TabId, sql: impl Into<String>) -> QueryId {
        let id = QueryId::new();
        let snapshot = {
            let mut inner = self.inner.write();
            inner.push(ExecutingQuery {
                id,
                tab,
                sql: sql.into(),
                started_at: Instant::now(),
            });
            tracing::debug!(%id, %tab, "Execution started, {} in flight", inner.len());
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
        id
    }

    /// Remove an entry on completion or failure.
    ///
    /// Finishing an unknown id is a no-op; a late duplicate completion must
    /// not disturb other entries.
    pub fn finish(&self, id: QueryId) {
        let (removed, snapshot) = {
            let mut inner = self.inner.write();
            let before = inner.len();
            inner.retain(|q| q.id != id);
            (inner.len() != before, inner.clone())
        };
        if removed {
            tracing::debug!(%id, "Execution finished");
            let _ = self.tx.send(snapshot);
        }
    }

    /// Snapshot of all in-flight executions.
    pub fn entries(&self) -> Vec<ExecutingQuery> {
        self.inner.read().clone()
    }

    /// In-flight executions started by one tab.
    pub fn for_tab(&self, tab: TabId) -> Vec<ExecutingQuery> {
        self.inner
            .read()
            .iter()
            .filter(|q| q.tab == tab)
            .cloned()
            .collect()
    }

    /// Check whether a tab has any execution in flight.
    pub fn is_executing(&self, tab: TabId) -> bool {
        self.inner.read().iter().any(|q| q.tab == tab)
    }

    /// Total number of in-flight executions across all tabs.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check whether nothing is executing.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Subscribe to tracker changes.
    ///
    /// The receiver gets the current entries immediately and all future
    /// changes. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ExecutingQuery>> {
        self.rx.clone()
    }
}

impl Default for ExecutionTracker {
    fn default() -> Self {
        Self::new()
    }
}
