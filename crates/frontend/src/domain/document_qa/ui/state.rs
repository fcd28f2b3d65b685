//! PDF Q&A - view state transitions
//!
//! All state changes of the chat view live here as plain functions over
//! `ChatState`, so the exchange rules can be unit-tested without a DOM.
//! The view layer only wires DOM events and network futures to these
//! transitions.

use contracts::domain::document_qa::dto::{AskQuestionRequest, Message};

/// Bot reply when the backend answered 2xx without a usable `answer` field.
pub const NO_ANSWER_FALLBACK: &str = "No answer found.";
/// Bot reply for any failed exchange (non-2xx or transport error).
pub const TRY_AGAIN_LATER: &str = "Try again later.";

/// Upload lifecycle phase. `Upload` is the idle label before the first
/// selection; a new selection from any phase re-enters `Uploading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Upload,
    Uploading,
    Uploaded,
    UploadFailed,
}

impl UploadStatus {
    /// Label shown on the upload button.
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Upload => "Upload",
            UploadStatus::Uploading => "Uploading...",
            UploadStatus::Uploaded => "Uploaded",
            UploadStatus::UploadFailed => "Upload Failed",
        }
    }
}

/// Client-side state of the chat view: the append-only conversation plus
/// the single tracked upload. One active file per session; a new upload
/// replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub file_name: Option<String>,
    pub status: UploadStatus,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a question draft for sending.
    ///
    /// Returns `None` for whitespace-only drafts (silent no-op, nothing
    /// appended). Otherwise appends the user message with the raw,
    /// untrimmed text and returns the request to send, carrying the
    /// current `file_name` (possibly `None` when nothing was uploaded).
    /// The caller must clear its draft exactly when this returns `Some`.
    pub fn submit_question(&mut self, draft: &str) -> Option<AskQuestionRequest> {
        if draft.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(draft.to_string()));
        Some(AskQuestionRequest {
            filename: self.file_name.clone(),
            question: draft.to_string(),
        })
    }

    /// Append the single bot message that completes an exchange.
    pub fn record_reply(&mut self, text: String) {
        self.messages.push(Message::bot(text));
    }

    /// A file was selected: optimistic local name, status `Uploading...`.
    pub fn begin_upload(&mut self, local_name: String) {
        self.file_name = Some(local_name);
        self.status = UploadStatus::Uploading;
    }

    /// Upload confirmed; `resolved_name` is the canonical stored name.
    pub fn upload_succeeded(&mut self, resolved_name: String) {
        self.file_name = Some(resolved_name);
        self.status = UploadStatus::Uploaded;
    }

    /// Upload failed (non-2xx or transport). The optimistic name is kept.
    pub fn upload_failed(&mut self) {
        self.status = UploadStatus::UploadFailed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::document_qa::dto::{AskQuestionResponse, MessageSender};

    #[test]
    fn test_accepted_question_grows_conversation_by_two() {
        let mut state = ChatState::new();
        let req = state.submit_question("What is the capital of France?");
        assert!(req.is_some());
        assert_eq!(state.messages.len(), 1);

        state.record_reply("Paris".to_string());
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].sender, MessageSender::User);
        assert_eq!(state.messages[1].sender, MessageSender::Bot);
        assert_eq!(state.messages[1].text, "Paris");
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut state = ChatState::new();
        assert!(state.submit_question("").is_none());
        assert!(state.submit_question("   \t\n").is_none());
        assert_eq!(state, ChatState::new());
    }

    #[test]
    fn test_question_keeps_raw_untrimmed_text() {
        let mut state = ChatState::new();
        let req = state.submit_question("  padded question  ").unwrap();
        assert_eq!(state.messages[0].text, "  padded question  ");
        assert_eq!(req.question, "  padded question  ");
    }

    #[test]
    fn test_question_sent_with_null_filename_before_upload() {
        let mut state = ChatState::new();
        let req = state.submit_question("anything?").unwrap();
        assert_eq!(req.filename, None);
    }

    #[test]
    fn test_question_carries_current_file_name() {
        let mut state = ChatState::new();
        state.begin_upload("draft.pdf".to_string());
        state.upload_succeeded("report.pdf".to_string());
        let req = state.submit_question("summarize").unwrap();
        assert_eq!(req.filename, Some("report.pdf".to_string()));
    }

    #[test]
    fn test_answer_fallback_text() {
        let mut state = ChatState::new();
        state.submit_question("q").unwrap();
        let resp: AskQuestionResponse = serde_json::from_str("{}").unwrap();
        state.record_reply(
            resp.answer_text()
                .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string()),
        );
        assert_eq!(state.messages[1].text, "No answer found.");
    }

    #[test]
    fn test_failed_exchange_appends_try_again_later() {
        let mut state = ChatState::new();
        state.submit_question("q").unwrap();
        state.record_reply(TRY_AGAIN_LATER.to_string());
        assert_eq!(state.messages[1].text, "Try again later.");
        assert_eq!(state.messages.len(), 2);
    }

    #[test]
    fn test_upload_state_machine() {
        let mut state = ChatState::new();
        assert_eq!(state.status, UploadStatus::Upload);
        assert_eq!(state.status.label(), "Upload");

        state.begin_upload("local.pdf".to_string());
        assert_eq!(state.status, UploadStatus::Uploading);
        assert_eq!(state.status.label(), "Uploading...");
        assert_eq!(state.file_name, Some("local.pdf".to_string()));

        state.upload_succeeded("report.pdf".to_string());
        assert_eq!(state.status, UploadStatus::Uploaded);
        assert_eq!(state.status.label(), "Uploaded");
        assert_eq!(state.file_name, Some("report.pdf".to_string()));

        // A later selection re-enters Uploading and can fail.
        state.begin_upload("second.pdf".to_string());
        assert_eq!(state.status, UploadStatus::Uploading);
        state.upload_failed();
        assert_eq!(state.status, UploadStatus::UploadFailed);
        assert_eq!(state.status.label(), "Upload Failed");
        // Optimistic name survives a failed upload.
        assert_eq!(state.file_name, Some("second.pdf".to_string()));
    }

    #[test]
    fn test_upload_does_not_touch_conversation() {
        let mut state = ChatState::new();
        state.submit_question("q").unwrap();
        state.record_reply("a".to_string());
        let messages = state.messages.clone();

        state.begin_upload("doc.pdf".to_string());
        state.upload_failed();
        assert_eq!(state.messages, messages);
    }
}
