//! Tab interaction controller.
//!
//! The controller receives raw UI events from the editor toolbar, the
//! result-pane toolbar, and the save dialog, and translates each into a tab
//! state delta or a named delegated command. It holds no state of its own
//! and performs no I/O, which is what makes it unit-testable without
//! mounting any rendering collaborator.
//!
//! No handler returns a value or propagates a fault: unrecognized actions
//! and violated preconditions degrade to a no-op.

use crate::collab::{FieldChangeSink, QueryExecutor, SaveDialog};
use crate::state::{EditorHandle, FieldChange};
use querypad_core::{Database, QuerySelector, StatementLocator, TabId};
use std::sync::Arc;

// =============================================================================
// Event Vocabulary
// =============================================================================

/// Actions dispatched from the editor toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Request the save dialog for this tab.
    Save,

    /// Toggle fullscreen. Handled by a layout collaborator, not here.
    Fullscreen,

    /// Run the statement under the cursor.
    RunCurrent,

    /// Run the whole buffer.
    RunAll,

    /// Reformat the buffer. Handled by the editor itself, not here.
    Format,
}

/// Actions dispatched from the result-pane toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// Lock or unlock the table view layout.
    TogglePin,

    /// Export the visible results. Handled by an export collaborator.
    Export,
}

// =============================================================================
// Tab Controller
// =============================================================================

/// Translates UI events for one tab into state deltas and delegated
/// commands.
pub struct TabController {
    tab: TabId,
    sink: Arc<dyn FieldChangeSink>,
    executor: Arc<dyn QueryExecutor>,
    save: Arc<dyn SaveDialog>,
}

impl TabController {
    /// Create a controller for one tab.
    pub fn new(
        tab: TabId,
        sink: Arc<dyn FieldChangeSink>,
        executor: Arc<dyn QueryExecutor>,
        save: Arc<dyn SaveDialog>,
    ) -> Self {
        Self {
            tab,
            sink,
            executor,
            save,
        }
    }

    /// The tab this controller drives.
    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// The buffer content changed. Any string is valid, including
    /// syntactically invalid SQL; syntax checking is out of scope.
    pub fn on_content_change(&self, content: impl Into<String>) {
        self.sink.change_field(FieldChange::Content(content.into()));
    }

    /// The user picked a database. Resolving the name is the structure
    /// provider's concern, not the controller's.
    pub fn on_database_change(&self, db: &Database) {
        self.sink
            .change_field(FieldChange::CurrentDatabase(Some(db.name.clone())));
    }

    /// The editor widget mounted (`Some`) or unmounted (`None`). Both are
    /// legitimate, not erroneous.
    pub fn set_editor_handle(&self, handle: Option<EditorHandle>) {
        self.sink.change_field(FieldChange::EditorHandle(handle));
    }

    /// An editor toolbar action was dispatched.
    pub fn on_editor_action(&self, action: EditorAction, payload: Option<StatementLocator>) {
        match action {
            EditorAction::Save => {
                tracing::debug!(tab = %self.tab, "Requesting save dialog");
                self.save.show_save_modal(self.tab);
            }
            EditorAction::RunCurrent => match payload {
                Some(locator) => {
                    tracing::debug!(tab = %self.tab, "Delegating RunCurrent");
                    self.executor
                        .exec_queries(self.tab, QuerySelector::Current(locator));
                }
                None => {
                    tracing::warn!(tab = %self.tab, "RunCurrent without a locator, ignoring");
                }
            },
            EditorAction::RunAll => {
                tracing::debug!(tab = %self.tab, "Delegating RunAll");
                self.executor
                    .exec_queries(self.tab, QuerySelector::WholeBuffer);
            }
            // Fullscreen belongs to the layout collaborator, Format to the
            // editor widget. Unrecognized actions must never be fatal.
            EditorAction::Fullscreen | EditorAction::Format => {}
        }
    }

    /// A result-pane toolbar action was dispatched.
    pub fn on_result_action(&self, action: ResultAction) {
        match action {
            ResultAction::TogglePin => {
                let pinned = self.sink.snapshot().pinned_result;
                self.sink.change_field(FieldChange::PinnedResult(!pinned));
            }
            ResultAction::Export => {}
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
