//! u601 Upload Documents (MVVM Standard)
//!
//! Structure:
//! - state.rs: selection/status state machine, DOM-free
//! - api.rs: one upload attempt against the backend
//! - view_model.rs: UploadDocumentsVm with the state signal
//! - view.rs: Main component UploadDocumentsPanel

pub mod api;
pub mod state;
mod view;
mod view_model;

pub use view::UploadDocumentsPanel;
pub use view_model::UploadDocumentsVm;
