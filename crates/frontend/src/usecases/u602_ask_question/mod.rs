//! u602 Ask Question (MVVM Standard)
//!
//! Structure:
//! - state.rs: transcript state machine, DOM-free
//! - api.rs: one question against the backend
//! - view_model.rs: AskQuestionVm with RwSignals
//! - view.rs: Main component AskQuestionPanel

pub mod api;
pub mod state;
mod view;
mod view_model;

pub use view::AskQuestionPanel;
pub use view_model::AskQuestionVm;
