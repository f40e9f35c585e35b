use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    /// Comments whose `article_id` matches. Does not check that the article
    /// exists; an unknown id yields an empty vector.
    async fn list_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;

    /// Batch form of `list_by_article_id` for attaching comments to a page of
    /// articles with a single query.
    async fn list_by_article_ids(&self, article_ids: &[ArticleId]) -> DomainResult<Vec<Comment>>;
}
