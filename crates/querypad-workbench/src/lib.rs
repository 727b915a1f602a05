//! Tab state and interaction orchestration for the Querypad workbench.
//!
//! One workbench tab owns an editable query buffer, a target database
//! selection, the results of executed queries, and the presentation choice
//! between table and chart views. This crate contains the state-machine
//! side of that tab:
//! - [`TabState`]/[`TabStateCell`]: the observable per-tab record
//! - [`ResultRegistry`]: ordered statement outcomes with derived stats
//! - [`ExecutionTracker`]: session-scoped in-flight query list
//! - [`TabController`]: translates raw UI events into state deltas and
//!   delegated commands
//! - [`compose`]: decides which component receives which slice of state
//!
//! Rendering widgets, the execution engine, and persistence are external
//! collaborators consumed through the traits in [`collab`].

pub mod collab;
pub mod controller;
pub mod progress;
pub mod registry;
pub mod state;
pub mod ui_state;
pub mod view;

pub use collab::{FieldChangeSink, QueryExecutor, SaveDialog};
pub use controller::{EditorAction, ResultAction, TabController};
pub use progress::{ExecutingQuery, ExecutionTracker};
pub use registry::ResultRegistry;
pub use state::{EditorHandle, EditorWidget, FieldChange, TabState, TabStateCell};
pub use ui_state::{SaveRequest, UiState};
pub use view::{compose, ChartPane, EditorPane, SaveDialogPlan, TablePane, ViewPlan};
