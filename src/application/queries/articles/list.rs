use std::collections::HashMap;

use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleRead, error::ApplicationResult},
    domain::{
        article::ArticleId,
        comment::Comment,
    },
};

impl ArticleQueryService {
    /// Every article with its comments attached. Articles keep the order the
    /// store returned them in.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleRead>> {
        let articles = self.read_repo.list().await?;
        if articles.is_empty() {
            tracing::debug!("no articles found");
            return Ok(Vec::new());
        }

        let ids: Vec<ArticleId> = articles.iter().map(|article| article.id).collect();
        let mut by_article = group_by_article(self.comment_repo.list_by_article_ids(&ids).await?);

        let items = articles
            .into_iter()
            .map(|article| {
                let comments = by_article.remove(&article.id).unwrap_or_default();
                ArticleRead::from_parts(article, comments)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

fn group_by_article(comments: Vec<Comment>) -> HashMap<ArticleId, Vec<Comment>> {
    let mut grouped: HashMap<ArticleId, Vec<Comment>> = HashMap::new();
    for comment in comments {
        if let Some(article_id) = comment.article_id {
            grouped.entry(article_id).or_default().push(comment);
        }
    }
    grouped
}
