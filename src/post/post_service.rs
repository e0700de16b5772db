use tokio::sync::RwLock;
use uuid::Uuid;

use crate::comment::model::Comment;
use crate::post::post_model::{Author, PostSeed};
use crate::post::post_state::PostState;
use crate::utils::error::CustomError;

/// Holds every post of the feed in seed order
pub struct PostService {
    posts: RwLock<Vec<PostState>>,
}

impl PostService {
    pub fn from_seed(seed: Vec<PostSeed>, commenter: Author) -> Self {
        let posts = seed
            .into_iter()
            .map(|entry| {
                let (post, comments) = entry.into_post();
                PostState::new(post, comments, commenter.clone())
            })
            .collect::<Vec<_>>();

        log::info!("Feed ready with {} posts", posts.len());
        PostService {
            posts: RwLock::new(posts),
        }
    }

    pub async fn list_posts(&self) -> Vec<PostState> {
        self.posts.read().await.clone()
    }

    pub async fn get_post(&self, post_id: Uuid) -> Result<PostState, CustomError> {
        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|p| p.id() == post_id)
            .cloned()
            .ok_or_else(|| CustomError::NotFoundError("Post not found".into()))
    }

    /// Run `f` against one post under the write lock
    async fn with_post<T>(
        &self,
        post_id: Uuid,
        f: impl FnOnce(&mut PostState) -> Result<T, CustomError>,
    ) -> Result<T, CustomError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id() == post_id)
            .ok_or_else(|| CustomError::NotFoundError("Post not found".into()))?;
        f(post)
    }

    pub async fn add_comment(&self, post_id: Uuid, content: &str) -> Result<Comment, CustomError> {
        self.with_post(post_id, |post| match post.submit_comment(content) {
            Ok(comment) => {
                log::info!("Comment {} added to post {}", comment.id, post_id);
                Ok(comment.clone())
            }
            Err(e) => {
                log::warn!("Rejected comment on post {}: {}", post_id, e);
                Err(e)
            }
        })
        .await
    }

    /// Publish whatever is pending in the post's comment box
    pub async fn submit_draft(&self, post_id: Uuid) -> Result<Comment, CustomError> {
        self.with_post(post_id, |post| match post.submit_draft() {
            Ok(comment) => {
                log::info!(
                    "Draft published as comment {} on post {}",
                    comment.id,
                    post_id
                );
                Ok(comment.clone())
            }
            Err(e) => {
                log::warn!("Rejected draft on post {}: {}", post_id, e);
                Err(e)
            }
        })
        .await
    }

    pub async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<bool, CustomError> {
        self.with_post(post_id, |post| {
            let deleted = post.delete_comment(comment_id);
            if deleted {
                log::info!("Comment {} removed from post {}", comment_id, post_id);
            } else {
                log::debug!(
                    "Comment {} not on post {}, nothing removed",
                    comment_id,
                    post_id
                );
            }
            Ok(deleted)
        })
        .await
    }

    pub async fn delete_comments_matching(
        &self,
        post_id: Uuid,
        content: &str,
    ) -> Result<usize, CustomError> {
        self.with_post(post_id, |post| {
            let removed = post.delete_comments_matching(content);
            log::info!("Removed {} matching comments from post {}", removed, post_id);
            Ok(removed)
        })
        .await
    }

    pub async fn like_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Comment, CustomError> {
        self.with_post(post_id, |post| {
            let comment = post
                .like_comment(comment_id)
                .ok_or_else(|| CustomError::NotFoundError("Comment not found".into()))?;
            log::debug!("Comment {} now has {} likes", comment.id, comment.like_count);
            Ok(comment.clone())
        })
        .await
    }

    pub async fn update_draft(
        &self,
        post_id: Uuid,
        text: String,
    ) -> Result<PostState, CustomError> {
        self.with_post(post_id, |post| {
            post.update_draft(text);
            Ok(post.clone())
        })
        .await
    }
}
