// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId};

/// Persisted comment row. `article_id` is the back-reference to the owning
/// article; `None` marks an unattached comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub article_id: Option<ArticleId>,
}

impl Comment {
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == Some(article_id)
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub article_id: Option<ArticleId>,
}

impl NewComment {
    pub fn for_article(article_id: ArticleId, content: impl Into<String>) -> Self {
        Self {
            content: CommentContent::new(content),
            article_id: Some(article_id),
        }
    }
}
