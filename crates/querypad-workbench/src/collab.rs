//! Collaborator contracts consumed by the interaction controller.
//!
//! The controller never implements these; it only calls them. Keeping the
//! seams as traits lets controller behavior be tested without mounting an
//! editor, an execution engine, or a dialog shell.

use crate::state::{FieldChange, TabState};
use querypad_core::{QuerySelector, TabId};

/// Applies named field mutations to one tab's state.
///
/// Implementations must be idempotent-safe: applying the same change twice
/// converges on the same state. `snapshot` exposes the current state so the
/// controller can derive toggles from it.
pub trait FieldChangeSink: Send + Sync {
    /// Apply one field mutation.
    fn change_field(&self, change: FieldChange);

    /// Snapshot of the current tab state.
    fn snapshot(&self) -> TabState;
}

impl FieldChangeSink for crate::state::TabStateCell {
    fn change_field(&self, change: FieldChange) {
        crate::state::TabStateCell::change_field(self, change)
    }

    fn snapshot(&self) -> TabState {
        crate::state::TabStateCell::snapshot(self)
    }
}

/// Starts asynchronous query execution.
///
/// `exec_queries` returns immediately; completion is observed later through
/// the field-change sink (whole result set replacement) and the execution
/// tracker. Failures surface as error entries inside the eventual result
/// set, never as a fault back to the caller.
pub trait QueryExecutor: Send + Sync {
    /// Start executing the selected statements for a tab.
    fn exec_queries(&self, tab: TabId, selector: QuerySelector);
}

/// Presentation and persistence of a tab rename/save.
///
/// The controller supplies only the tab identity and delegates the rest.
pub trait SaveDialog: Send + Sync {
    /// Present the save dialog for a tab.
    fn show_save_modal(&self, tab: TabId);

    /// Dismiss the save dialog.
    fn hide_save_modal(&self);

    /// Persist the edited tab.
    fn save_edited_tab(&self);
}

// =============================================================================
// Recording Mocks for Testing
// =============================================================================
