use serde::Serialize;
use uuid::Uuid;

use crate::comment::model::{COMMENT_REQUIRED_MESSAGE, Comment, CommentDraft};
use crate::post::post_model::{Author, Post};
use crate::utils::error::CustomError;

/// A post together with the comment list and pending input it owns.
///
/// Every post in the feed has its own `PostState`; nothing here is shared
/// between posts. Comment order is insertion order.
#[derive(Debug, Serialize, Clone)]
pub struct PostState {
    #[serde(flatten)]
    pub post: Post,
    comments: Vec<Comment>,
    draft: CommentDraft,
    #[serde(skip)]
    commenter: Author,
}

impl PostState {
    pub fn new(post: Post, initial_comments: Vec<String>, commenter: Author) -> Self {
        let comments = initial_comments
            .into_iter()
            .map(|content| Comment::new(content, commenter.clone()))
            .collect();

        PostState {
            post,
            comments,
            draft: CommentDraft::default(),
            commenter,
        }
    }

    pub fn id(&self) -> Uuid {
        self.post.id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft.update(text);
    }

    /// Append `text` as a new comment. The text is stored as typed, only the
    /// emptiness check trims it.
    pub fn submit_comment(&mut self, text: &str) -> Result<&Comment, CustomError> {
        if text.trim().is_empty() {
            self.draft.update(text);
            self.draft.reject();
            return Err(CustomError::ValidationError(COMMENT_REQUIRED_MESSAGE.to_string()));
        }

        let comment = Comment::new(text.to_string(), self.commenter.clone());
        self.comments.push(comment);
        self.draft.clear();

        let len = self.comments.len();
        Ok(&self.comments[len - 1])
    }

    pub fn submit_draft(&mut self) -> Result<&Comment, CustomError> {
        let text = self.draft.text.clone();
        self.submit_comment(&text)
    }

    /// Returns whether a comment was removed
    pub fn delete_comment(&mut self, comment_id: Uuid) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != comment_id);
        self.comments.len() != before
    }

    /// Remove every comment whose text equals `content`; returns how many went
    pub fn delete_comments_matching(&mut self, content: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|c| c.content != content);
        before - self.comments.len()
    }

    pub fn like_comment(&mut self, comment_id: Uuid) -> Option<&Comment> {
        let comment = self.comments.iter_mut().find(|c| c.id == comment_id)?;
        comment.like_count = comment.like_count.saturating_add(1);
        Some(comment)
    }
}
