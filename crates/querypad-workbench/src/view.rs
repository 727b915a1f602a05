//! View composition.
//!
//! Given the current tab state, the execution tracker, and the workbench's
//! active save request, decide which data-bearing component receives which
//! slice of state. This is a pure derivation: nothing here owns state, and
//! the result list is computed once so the table pane and the chart pane can
//! never disagree on result order or contents.

use crate::progress::ExecutionTracker;
use crate::state::TabState;
use crate::ui_state::SaveRequest;
use querypad_core::{DatabaseName, ExecStats, ServerStructure, StatementResult, TabId};
use std::sync::Arc;

// =============================================================================
// View Plan
// =============================================================================

/// Data handed to the editor component.
#[derive(Debug, Clone)]
pub struct EditorPane {
    /// Buffer content.
    pub content: String,

    /// Selected database, if any.
    pub current_database: Option<DatabaseName>,

    /// Catalog for the database picker; empty when the provider is
    /// unavailable.
    pub structure: ServerStructure,

    /// Aggregate statistics of the latest execution, if any.
    pub stats: Option<ExecStats>,
}

/// Data handed to the table view.
#[derive(Debug, Clone)]
pub struct TablePane {
    /// Statement outcomes in execution order.
    pub items: Arc<[StatementResult]>,

    /// Lock the layout against reflow when new results arrive.
    pub locked: bool,

    /// Show the progress indicator above the grid.
    pub show_progress: bool,
}

/// Data handed to the chart view.
///
/// The pin flag is a table-view concept and deliberately does not lock the
/// chart layout.
#[derive(Debug, Clone)]
pub struct ChartPane {
    /// Statement outcomes, same sequence as the table pane.
    pub items: Arc<[StatementResult]>,

    /// Show the progress indicator above the charts.
    pub show_progress: bool,
}

/// Data handed to the save dialog when it should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogPlan {
    /// Tab being saved.
    pub tab: TabId,

    /// Title field value.
    pub title: String,
}

/// Everything the tab page renders for one frame.
#[derive(Debug, Clone)]
pub struct ViewPlan {
    pub editor: EditorPane,
    pub table: TablePane,
    pub chart: ChartPane,
    pub save_dialog: Option<SaveDialogPlan>,
}

// =============================================================================
// Composition
// =============================================================================

/// Compose the view plan for one tab.
///
/// `save_request` is the workbench's active save request; the dialog is
/// planned only when the request's tab id matches `tab`.
pub fn compose(
    tab: TabId,
    state: &TabState,
    tracker: &ExecutionTracker,
    structure: Option<&ServerStructure>,
    save_request: Option<&SaveRequest>,
) -> ViewPlan {
    // Derived once; both panes receive the identical sequence.
    let result_list: Arc<[StatementResult]> = state
        .queries_result
        .as_ref()
        .map(|r| r.list.clone())
        .unwrap_or_default();

    let show_progress = tracker.is_executing(tab);

    ViewPlan {
        editor: EditorPane {
            content: state.content.clone(),
            current_database: state.current_database.clone(),
            structure: structure.cloned().unwrap_or_else(ServerStructure::empty),
            stats: state.queries_result.as_ref().map(|r| r.total_stats),
        },
        table: TablePane {
            items: result_list.clone(),
            locked: state.pinned_result,
            show_progress,
        },
        chart: ChartPane {
            items: result_list,
            show_progress,
        },
        save_dialog: save_request.filter(|r| r.tab == tab).map(|r| SaveDialogPlan {
            tab: r.tab,
            title: r.title.clone(),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================
