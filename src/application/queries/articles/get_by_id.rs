use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleRead,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleRead> {
        let id = ArticleId::new(query.id);
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = self.comment_repo.list_by_article_id(id).await?;
        Ok(ArticleRead::from_parts(article, comments)?)
    }
}
