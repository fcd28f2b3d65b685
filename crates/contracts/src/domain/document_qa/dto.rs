use serde::{Deserialize, Serialize};

/// Who authored a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Bot,
}

/// One entry in the conversation thread. Immutable once created;
/// the conversation itself is append-only for the lifetime of the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: MessageSender,
}

impl Message {
    pub fn user(text: String) -> Self {
        Self {
            text,
            sender: MessageSender::User,
        }
    }

    pub fn bot(text: String) -> Self {
        Self {
            text,
            sender: MessageSender::Bot,
        }
    }
}

/// Success body of `POST /upload_pdf/`
///
/// `message` is human-readable confirmation text which usually carries the
/// stored filename in single quotes ("File 'doc.pdf' uploaded ...").
/// Newer DocumentService builds also return the name in the structured
/// `stored_file_name` field; when present it wins over message parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPdfResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_file_name: Option<String>,
}

impl UploadPdfResponse {
    /// Resolve the canonical stored filename for this upload.
    ///
    /// Precedence: structured field, then the first non-empty
    /// single-quoted substring of `message`, then the local file name
    /// the user selected.
    pub fn resolve_stored_name(&self, local_name: &str) -> String {
        if let Some(name) = self.stored_file_name.as_deref() {
            if !name.is_empty() {
                return name.to_string();
            }
        }
        extract_quoted_name(&self.message)
            .unwrap_or(local_name)
            .to_string()
    }
}

/// Request body of `POST /ask_question/`
///
/// `filename` is null when no upload has completed yet; the request is
/// still sent and the backend's reply is passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionRequest {
    pub filename: Option<String>,
    pub question: String,
}

/// Success body of `POST /ask_question/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskQuestionResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl AskQuestionResponse {
    /// Answer text to display, or `None` when the field is absent or
    /// empty (the caller substitutes its fallback text).
    pub fn answer_text(self) -> Option<String> {
        self.answer.filter(|a| !a.is_empty())
    }
}

/// First substring enclosed in single quotes, or `None` when the text has
/// no quote pair. An empty pair `''` counts as absent so callers fall
/// back to the local name.
pub fn extract_quoted_name(message: &str) -> Option<&str> {
    let start = message.find('\'')?;
    let rest = &message[start + 1..];
    let end = rest.find('\'')?;
    let name = &rest[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quoted_name() {
        assert_eq!(
            extract_quoted_name("File 'report.pdf' uploaded successfully to Cloudinary."),
            Some("report.pdf")
        );
        assert_eq!(extract_quoted_name("upload ok"), None);
        assert_eq!(extract_quoted_name("File '' stored"), None);
        assert_eq!(extract_quoted_name("unterminated 'name"), None);
        assert_eq!(
            extract_quoted_name("first 'a.pdf' then 'b.pdf'"),
            Some("a.pdf")
        );
    }

    #[test]
    fn test_resolve_stored_name_from_message() {
        let resp = UploadPdfResponse {
            message: "File 'report.pdf' saved".to_string(),
            stored_file_name: None,
        };
        assert_eq!(resp.resolve_stored_name("local.pdf"), "report.pdf");
    }

    #[test]
    fn test_resolve_stored_name_falls_back_to_local() {
        let resp = UploadPdfResponse {
            message: "upload complete".to_string(),
            stored_file_name: None,
        };
        assert_eq!(resp.resolve_stored_name("local.pdf"), "local.pdf");
    }

    #[test]
    fn test_resolve_stored_name_prefers_structured_field() {
        let resp = UploadPdfResponse {
            message: "File 'other.pdf' saved".to_string(),
            stored_file_name: Some("canonical.pdf".to_string()),
        };
        assert_eq!(resp.resolve_stored_name("local.pdf"), "canonical.pdf");
    }

    #[test]
    fn test_answer_text_fallback_on_absent_or_empty() {
        let with_answer: AskQuestionResponse =
            serde_json::from_str(r#"{"answer":"Paris"}"#).unwrap();
        assert_eq!(with_answer.answer_text(), Some("Paris".to_string()));

        let absent: AskQuestionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.answer_text(), None);

        let empty: AskQuestionResponse = serde_json::from_str(r#"{"answer":""}"#).unwrap();
        assert_eq!(empty.answer_text(), None);
    }

    #[test]
    fn test_ask_request_wire_shape() {
        let req = AskQuestionRequest {
            filename: None,
            question: "What is the capital?".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"filename":null,"question":"What is the capital?"}"#);
    }

    #[test]
    fn test_message_sender_wire_shape() {
        let user_msg = Message::user("hi".to_string());
        assert_eq!(
            serde_json::to_string(&user_msg).unwrap(),
            r#"{"text":"hi","sender":"user"}"#
        );
        let bot_msg: Message = serde_json::from_str(r#"{"text":"hello","sender":"bot"}"#).unwrap();
        assert_eq!(bot_msg.sender, MessageSender::Bot);
    }
}
