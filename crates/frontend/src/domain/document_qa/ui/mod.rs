//! PDF Q&A UI Module (MVVM Standard)
//!
//! Structure:
//! - state.rs: ChatState transitions (pure, unit-tested)
//! - model.rs: API functions
//! - view_model.rs: DocumentQaVm with RwSignals
//! - view.rs: Main component ChatUploadView

mod model;
mod state;
mod view;
mod view_model;

pub use state::{ChatState, UploadStatus};
pub use view::ChatUploadView;
pub use view_model::DocumentQaVm;
