use std::sync::Arc;

use crate::{
    application::{dto::CommentRead, error::ApplicationResult},
    domain::{article::ArticleId, comment::CommentReadRepository},
};

pub struct ListCommentsByArticleQuery {
    pub article_id: i64,
}

pub struct CommentQueryService {
    read_repo: Arc<dyn CommentReadRepository>,
}

impl CommentQueryService {
    pub fn new(read_repo: Arc<dyn CommentReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Comments attached to the given article id. An id with no comments,
    /// including one that matches no article, yields an empty list.
    pub async fn list_comments_by_article_id(
        &self,
        query: ListCommentsByArticleQuery,
    ) -> ApplicationResult<Vec<CommentRead>> {
        let comments = self
            .read_repo
            .list_by_article_id(ArticleId::new(query.article_id))
            .await?;

        Ok(comments
            .into_iter()
            .map(CommentRead::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }
}
