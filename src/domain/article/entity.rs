// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};

/// Persisted article row. Its comments are not held here; they are looked up
/// by foreign key through `CommentReadRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
}

impl NewArticle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: ArticleTitle::new(title),
        }
    }
}
