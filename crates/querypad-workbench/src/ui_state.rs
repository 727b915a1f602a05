//! Workbench-level UI state.
//!
//! Holds the active save request: "the tab currently being renamed/saved".
//! The save dialog itself is a rendering collaborator; this state only
//! decides for which tab it should be shown. View composition filters the
//! request by stable tab id, never by reference comparison.

use crate::collab::SaveDialog;
use parking_lot::RwLock;
use querypad_core::TabId;

/// The tab currently being renamed/saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Tab the dialog belongs to.
    pub tab: TabId,

    /// Title being edited in the dialog.
    pub title: String,
}

/// Workbench UI state shared across tabs.
#[derive(Default)]
pub struct UiState {
    active_save: RwLock<Option<SaveRequest>>,
}

impl UiState {
    /// Create empty UI state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active save request, if any.
    pub fn active_save(&self) -> Option<SaveRequest> {
        self.active_save.read().clone()
    }

    /// Update the title being edited. No-op when no dialog is open.
    pub fn change_title(&self, title: impl Into<String>) {
        if let Some(request) = self.active_save.write().as_mut() {
            request.title = title.into();
        }
    }

    /// Take the active request, closing the dialog.
    pub fn take_request(&self) -> Option<SaveRequest> {
        self.active_save.write().take()
    }
}

impl SaveDialog for UiState {
    fn show_save_modal(&self, tab: TabId) {
        let mut active = self.active_save.write();
        // Re-requesting for the same tab keeps the edited title
        if active.as_ref().map(|r| r.tab) != Some(tab) {
            tracing::debug!(%tab, "Opening save dialog");
            *active = Some(SaveRequest {
                tab,
                title: String::new(),
            });
        }
    }

    fn hide_save_modal(&self) {
        tracing::debug!("Closing save dialog");
        *self.active_save.write() = None;
    }

    fn save_edited_tab(&self) {
        // Persistence of saved queries lives outside this core; the request
        // is consumed and handed to the persistence collaborator by the app.
        if let Some(request) = self.take_request() {
            tracing::info!(tab = %request.tab, title = %request.title, "Tab save requested");
        }
    }
}
