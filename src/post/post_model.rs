use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub avatar_url: String,
    pub role: String,
}

/// One unit of post body
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph(String),
    Link(String),
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub published_at: DateTime<FixedOffset>,
    pub content: Vec<ContentBlock>,
    pub tags: Vec<String>,
}

/// A post as written in the seed file, before it gets an id
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostSeed {
    pub author: Author,
    pub published_at: DateTime<FixedOffset>,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_comments")]
    pub comments: Vec<String>,
}

fn default_comments() -> Vec<String> {
    vec!["Post muito bacana".to_string()]
}

impl PostSeed {
    pub fn into_post(self) -> (Post, Vec<String>) {
        let post = Post {
            id: Uuid::new_v4(),
            author: self.author,
            published_at: self.published_at,
            content: self.content,
            tags: self.tags,
        };
        (post, self.comments)
    }
}
