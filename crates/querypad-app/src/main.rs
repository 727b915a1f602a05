//! Querypad demo session - main entry point.
//!
//! Wires one workbench tab to the stub execution collaborator and runs a
//! short scripted interaction: edit the buffer, pick a database, run the
//! buffer, observe the delivered results, pin the table view, and walk
//! through a save request.

mod exec;

use exec::StubExecutor;
use querypad_core::{AppConfig, Database, ServerStructure, TabId};
use querypad_workbench::{
    compose, EditorAction, EditorHandle, EditorWidget, ExecutionTracker, ResultAction,
    SaveDialog, TabController, TabStateCell, UiState, ViewPlan,
};
use std::sync::Arc;

// =============================================================================
// Demo Editor Widget
// =============================================================================

/// Stand-in for the rich editor widget; logs programmatic operations.
struct DemoEditor;

impl EditorWidget for DemoEditor {
    fn focus(&self) {
        tracing::info!("Editor focused");
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Log what each component would receive this frame.
fn log_plan(label: &str, plan: &ViewPlan) {
    tracing::info!(
        label,
        content = %plan.editor.content,
        database = ?plan.editor.current_database,
        results = plan.table.items.len(),
        locked = plan.table.locked,
        in_progress = plan.table.show_progress,
        save_dialog = plan.save_dialog.is_some(),
        "View plan"
    );
    for (i, item) in plan.table.items.iter().enumerate() {
        match &item.error {
            Some(error) => tracing::info!(i, sql = %item.sql, %error, "Result item failed"),
            None => tracing::info!(i, sql = %item.sql, rows = item.rows.len(), "Result item"),
        }
    }
}

// =============================================================================
// Scripted Session
// =============================================================================

async fn run_session(config: AppConfig) {
    let structure = ServerStructure {
        databases: vec![
            Database::new("default").with_tables(vec!["events".to_string()]),
            Database::new("analytics").with_tables(vec!["sessions".to_string()]),
        ],
    };

    let tab = TabId::new();
    let cell = Arc::new(TabStateCell::new());
    let tracker = Arc::new(ExecutionTracker::new());
    let ui = Arc::new(UiState::new());
    let executor = Arc::new(StubExecutor::new(cell.clone(), tracker.clone()));
    let controller = TabController::new(tab, cell.clone(), executor, ui.clone());

    // Mount the editor and preselect the configured database if it exists
    controller.set_editor_handle(Some(EditorHandle::new(Arc::new(DemoEditor))));
    if let Some(name) = config.execution.default_database {
        let name = name.into();
        match structure.database(&name) {
            Some(db) => controller.on_database_change(db),
            None => tracing::warn!(database = %name.as_ref(), "Configured database not in catalog"),
        }
    }

    // Edit and run the whole buffer
    controller.on_content_change("SELECT 1; SELECT now(); DROP TABLE events;");
    controller.on_editor_action(EditorAction::RunAll, None);
    log_plan(
        "in-flight",
        &compose(tab, &cell.snapshot(), &tracker, Some(&structure), None),
    );

    // Wait for the execution collaborator to deliver the result set
    let mut rx = cell.subscribe();
    while rx.borrow().queries_result.is_none() {
        rx.changed().await.expect("state cell closed");
    }
    log_plan(
        "completed",
        &compose(tab, &cell.snapshot(), &tracker, Some(&structure), None),
    );

    // Pin the table view, then walk through a save request
    controller.on_result_action(ResultAction::TogglePin);
    controller.on_editor_action(EditorAction::Save, None);
    ui.change_title(format!("{} 1", config.editor.untitled_prefix));
    log_plan(
        "saving",
        &compose(
            tab,
            &cell.snapshot(),
            &tracker,
            Some(&structure),
            ui.active_save().as_ref(),
        ),
    );
    ui.save_edited_tab();

    controller.set_editor_handle(None);
    tracing::info!("Session finished");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Querypad starting...");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default config: {}", e);
            AppConfig::default()
        }
    };

    run_session(config).await;
}
