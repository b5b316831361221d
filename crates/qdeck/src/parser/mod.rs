pub mod choices;
pub mod markdown;

/// One authored question, before or after it has been persisted.
///
/// Drafts come out of [`markdown::decode`]: freshly typed ones carry no
/// id, ones loaded from a stored round get an id stamped by the store.
/// Editing never mutates a draft in place; the edited text is decoded
/// again from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: Option<String>,
    pub text: String,
    pub answer: String,
    pub is_new: bool,
}

impl QuestionDraft {
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            answer: answer.into(),
            is_new: true,
        }
    }

    /// Whether this draft is ready to persist. The codec itself accepts
    /// missing answers; callers gate on this before writing a round out.
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty() && !self.answer.trim().is_empty()
    }
}
