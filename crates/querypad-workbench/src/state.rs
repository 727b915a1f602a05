//! Tab state model and observable state cell.
//!
//! [`TabState`] is the mutable record for one editor tab. It is owned by the
//! workbench that created the tab; the interaction controller never creates
//! or destroys it, only issues field changes through the
//! [`FieldChangeSink`](crate::collab::FieldChangeSink) contract.
//!
//! ## Reactive State
//!
//! [`TabStateCell`] follows "mutation = notification": every `change_field`
//! broadcasts a fresh snapshot via `tokio::sync::watch`. Callers cannot
//! mutate without notifying, so renderers always react to a complete state.

use parking_lot::RwLock;
use querypad_core::{DatabaseName, ResultSet};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

// =============================================================================
// Editor Handle
// =============================================================================

/// Operations the live editor widget exposes for programmatic use.
pub trait EditorWidget: Send + Sync {
    /// Focus the editor input.
    fn focus(&self);
}

/// Back-reference to a mounted editor widget.
///
/// Present between mount and unmount; a late callback that finds the handle
/// absent must discard its editor-directed effect rather than fail.
#[derive(Clone)]
pub struct EditorHandle {
    widget: Arc<dyn EditorWidget>,
}

impl EditorHandle {
    /// Wrap a live editor widget.
    pub fn new(widget: Arc<dyn EditorWidget>) -> Self {
        Self { widget }
    }

    /// Access the underlying widget operations.
    pub fn widget(&self) -> &dyn EditorWidget {
        &*self.widget
    }
}

impl fmt::Debug for EditorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EditorHandle")
    }
}

// =============================================================================
// Tab State
// =============================================================================

/// The mutable record for one editor tab.
///
/// Fields are independently settable: applying one change never implicitly
/// resets another. Pinning survives re-execution; changing the database
/// does not clear unsaved content.
#[derive(Debug, Clone, Default)]
pub struct TabState {
    /// Current query text. Any string is valid buffer content, including
    /// syntactically invalid SQL.
    pub content: String,

    /// Selected database; `None` until the first selection.
    pub current_database: Option<DatabaseName>,

    /// Whether the table view is locked to a pinned layout.
    pub pinned_result: bool,

    /// Results of the latest execution; `None` before any execution.
    /// Replaced as a whole, never partially updated.
    pub queries_result: Option<ResultSet>,

    /// Back-reference to the live editor widget; `None` before mount and
    /// after unmount.
    pub editor_handle: Option<EditorHandle>,
}

/// A named mutation of exactly one [`TabState`] field.
#[derive(Debug, Clone)]
pub enum FieldChange {
    /// Replace the buffer content.
    Content(String),

    /// Change the selected database.
    CurrentDatabase(Option<DatabaseName>),

    /// Set or clear the pin flag.
    PinnedResult(bool),

    /// Replace the whole result set.
    QueriesResult(Option<ResultSet>),

    /// Set (mount) or clear (unmount) the editor back-reference.
    EditorHandle(Option<EditorHandle>),
}

impl TabState {
    /// Apply one field change. Exactly one field is mutated.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Content(content) => self.content = content,
            FieldChange::CurrentDatabase(db) => self.current_database = db,
            FieldChange::PinnedResult(pinned) => self.pinned_result = pinned,
            FieldChange::QueriesResult(result) => self.queries_result = result,
            FieldChange::EditorHandle(handle) => self.editor_handle = handle,
        }
    }
}

// =============================================================================
// Tab State Cell
// =============================================================================

/// Shared, observable owner of one [`TabState`].
///
/// Every mutation method broadcasts a snapshot of the new state. Repeated
/// application of the same change is safe and converges on the same state.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the state (never poisons) and
/// `tokio::sync::watch` for broadcasts. Handlers run to completion under a
/// single write lock, so readers see either the previous or the next
/// complete state.
pub struct TabStateCell {
    inner: RwLock<TabState>,
    tx: watch::Sender<TabState>,
    rx: watch::Receiver<TabState>,
}

impl TabStateCell {
    /// Create a cell with default tab state.
    pub fn new() -> Self {
        Self::with_state(TabState::default())
    }

    /// Create a cell with an initial state.
    pub fn with_state(state: TabState) -> Self {
        let (tx, rx) = watch::channel(state.clone());
        Self {
            inner: RwLock::new(state),
            tx,
            rx,
        }
    }

    /// Apply one field change and broadcast the new state.
    pub fn change_field(&self, change: FieldChange) {
        let snapshot = {
            let mut inner = self.inner.write();
            tracing::debug!(?change, "Applying field change");
            inner.apply(change);
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
    }

    /// Get a snapshot of the current state.
    pub fn snapshot(&self) -> TabState {
        self.inner.read().clone()
    }

    /// Read the state with a closure, without cloning.
    pub fn with_state_ref<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TabState) -> R,
    {
        let inner = self.inner.read();
        f(&inner)
    }

    /// Run a closure against the mounted editor widget.
    ///
    /// Returns `false` if no editor is mounted; the effect is discarded.
    /// This is the discard rule for late completion callbacks arriving
    /// after unmount.
    pub fn with_editor<F>(&self, f: F) -> bool
    where
        F: FnOnce(&dyn EditorWidget),
    {
        let inner = self.inner.read();
        match &inner.editor_handle {
            Some(handle) => {
                f(handle.widget());
                true
            }
            None => {
                tracing::debug!("No editor mounted, discarding editor effect");
                false
            }
        }
    }

    /// Subscribe to state changes.
    ///
    /// The receiver gets the current state immediately and all future
    /// changes. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<TabState> {
        self.rx.clone()
    }
}

impl Default for TabStateCell {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use querypad_core::StatementResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingWidget {
        focus_calls: AtomicUsize,
    }

    impl CountingWidget {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                focus_calls: AtomicUsize::new(0),
            })
        }
    }

    impl EditorWidget for CountingWidget {
        fn focus(&self) {
            self.focus_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn one_result() -> ResultSet {
        ResultSet::new(vec![StatementResult::ok(
            "SELECT 1",
            vec!["value".to_string()],
            vec![vec![serde_json::json!(1)]],
            5,
        )])
    }

    #[test]
    fn test_default_state() {
        let state = TabState::default();
        assert_eq!(state.content, "");
        assert!(state.current_database.is_none());
        assert!(!state.pinned_result);
        assert!(state.queries_result.is_none());
        assert!(state.editor_handle.is_none());
    }

    #[test]
    fn test_apply_mutates_exactly_one_field() {
        let mut state = TabState {
            content: "SELECT 1".to_string(),
            current_database: Some("default".into()),
            pinned_result: true,
            queries_result: Some(one_result()),
            editor_handle: None,
        };

        state.apply(FieldChange::Content("SELECT 2".to_string()));
        assert_eq!(state.content, "SELECT 2");
        assert_eq!(state.current_database, Some("default".into()));
        assert!(state.pinned_result);
        assert!(state.queries_result.is_some());
    }

    #[test]
    fn test_pin_survives_result_replacement() {
        let mut state = TabState::default();
        state.apply(FieldChange::PinnedResult(true));
        state.apply(FieldChange::QueriesResult(Some(one_result())));
        assert!(state.pinned_result);

        state.apply(FieldChange::QueriesResult(Some(one_result())));
        assert!(state.pinned_result);
    }

    #[test]
    fn test_database_change_keeps_content() {
        let mut state = TabState::default();
        state.apply(FieldChange::Content("SELECT 1".to_string()));
        state.apply(FieldChange::CurrentDatabase(Some("system".into())));
        assert_eq!(state.content, "SELECT 1");
    }

    #[test]
    fn test_change_field_broadcasts() {
        let cell = TabStateCell::new();
        let rx = cell.subscribe();

        assert_eq!(rx.borrow().content, "");

        cell.change_field(FieldChange::Content("SELECT 1".to_string()));
        assert_eq!(rx.borrow().content, "SELECT 1");

        cell.change_field(FieldChange::PinnedResult(true));
        assert!(rx.borrow().pinned_result);
        // Earlier change still visible in the same snapshot
        assert_eq!(rx.borrow().content, "SELECT 1");
    }

    #[test]
    fn test_change_field_is_idempotent_safe() {
        let cell = TabStateCell::new();
        cell.change_field(FieldChange::Content("SELECT 1".to_string()));
        cell.change_field(FieldChange::Content("SELECT 1".to_string()));
        assert_eq!(cell.snapshot().content, "SELECT 1");
    }

    #[test]
    fn test_with_editor_runs_when_mounted() {
        let cell = TabStateCell::new();
        let widget = CountingWidget::new();
        cell.change_field(FieldChange::EditorHandle(Some(EditorHandle::new(
            widget.clone(),
        ))));

        assert!(cell.with_editor(|editor| editor.focus()));
        assert_eq!(widget.focus_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_editor_discards_after_unmount() {
        let cell = TabStateCell::new();
        let widget = CountingWidget::new();
        cell.change_field(FieldChange::EditorHandle(Some(EditorHandle::new(
            widget.clone(),
        ))));
        cell.change_field(FieldChange::EditorHandle(None));

        assert!(!cell.with_editor(|editor| editor.focus()));
        assert_eq!(widget.focus_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmount_does_not_touch_content() {
        let cell = TabStateCell::new();
        cell.change_field(FieldChange::Content("SELECT 1".to_string()));
        cell.change_field(FieldChange::EditorHandle(Some(EditorHandle::new(
            CountingWidget::new(),
        ))));
        cell.change_field(FieldChange::EditorHandle(None));

        let state = cell.snapshot();
        assert!(state.editor_handle.is_none());
        assert_eq!(state.content, "SELECT 1");
    }
}
