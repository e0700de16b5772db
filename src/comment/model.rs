use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::post::post_model::Author;

pub const COMMENT_REQUIRED_MESSAGE: &str = "O comentário não pode ser vazio";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub like_count: u64,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(content: String, author: Author) -> Self {
        Comment {
            id: Uuid::new_v4(),
            content,
            like_count: 0,
            author,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    /// Nothing but whitespace typed; submit is disabled
    Empty,
    NonEmpty,
}

/// Pending text in a post's comment box
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub text: String,
    /// Set after a rejected submission, cleared on the next edit
    pub show_required_hint: bool,
}

impl CommentDraft {
    pub fn state(&self) -> DraftState {
        if self.text.trim().is_empty() {
            DraftState::Empty
        } else {
            DraftState::NonEmpty
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state() == DraftState::NonEmpty
    }

    pub fn update(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.show_required_hint = false;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.show_required_hint = false;
    }

    pub fn reject(&mut self) {
        self.show_required_hint = true;
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.show_required_hint.then_some(COMMENT_REQUIRED_MESSAGE)
    }
}

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateDraftRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct DeleteMatchingQuery {
    pub content: String,
}

/// Body of the HTML comment form
#[derive(Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_tracks_empty_and_non_empty() {
        let mut draft = CommentDraft::default();
        assert_eq!(draft.state(), DraftState::Empty);
        assert!(!draft.can_submit());

        draft.update("   ");
        assert_eq!(draft.state(), DraftState::Empty);

        draft.update("  a ");
        assert_eq!(draft.state(), DraftState::NonEmpty);
        assert!(draft.can_submit());

        draft.clear();
        assert_eq!(draft.state(), DraftState::Empty);
    }

    #[test]
    fn hint_is_cleared_by_the_next_edit() {
        let mut draft = CommentDraft::default();
        draft.reject();
        assert_eq!(draft.hint(), Some(COMMENT_REQUIRED_MESSAGE));

        draft.update("o");
        assert_eq!(draft.hint(), None);
    }
}
