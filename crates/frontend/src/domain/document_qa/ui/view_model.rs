//! PDF Q&A - View Model

use super::state::ChatState;
use contracts::domain::document_qa::dto::AskQuestionRequest;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentQaVm {
    pub state: RwSignal<ChatState>,
    pub draft: RwSignal<String>,
    pub is_asking: RwSignal<bool>,
    pub upload_error: RwSignal<Option<String>>,
}

impl DocumentQaVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChatState::new()),
            draft: RwSignal::new(String::new()),
            is_asking: RwSignal::new(false),
            upload_error: RwSignal::new(None),
        }
    }

    /// Accept the current draft for sending.
    ///
    /// Appends the user message and clears the draft synchronously, in
    /// the same step, before any request goes out. Whitespace-only
    /// drafts return `None` and leave both draft and conversation
    /// untouched.
    pub fn accept_question(&self) -> Option<AskQuestionRequest> {
        let draft = self.draft.get_untracked();
        let request = self
            .state
            .try_update(|s| s.submit_question(&draft))
            .flatten()?;
        self.draft.set(String::new());
        Some(request)
    }
}

impl Default for DocumentQaVm {
    fn default() -> Self {
        Self::new()
    }
}
