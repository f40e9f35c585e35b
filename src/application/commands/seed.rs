// src/application/commands/seed.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleRead, error::ApplicationResult, queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, NewArticle},
        comment::{CommentWriteRepository, NewComment},
    },
};

const COMMENTS_PER_ARTICLE: usize = 2;

/// Populates the store with a numbered sample article and two comments.
pub struct DemoSeeder {
    article_read: Arc<dyn ArticleReadRepository>,
    article_write: Arc<dyn ArticleWriteRepository>,
    comment_write: Arc<dyn CommentWriteRepository>,
    article_queries: Arc<ArticleQueryService>,
}

impl DemoSeeder {
    pub fn new(
        article_read: Arc<dyn ArticleReadRepository>,
        article_write: Arc<dyn ArticleWriteRepository>,
        comment_write: Arc<dyn CommentWriteRepository>,
        article_queries: Arc<ArticleQueryService>,
    ) -> Self {
        Self {
            article_read,
            article_write,
            comment_write,
            article_queries,
        }
    }

    /// Inserts "Sample Article {n + 1}", where `n` is the current article
    /// count, followed by its comments. Each insert stands alone; a failure
    /// part way leaves the rows written so far in place.
    pub async fn seed(&self) -> ApplicationResult<ArticleRead> {
        let existing = self.article_read.count().await?;
        let article = self
            .article_write
            .insert(NewArticle::new(format!("Sample Article {}", existing + 1)))
            .await?;

        let mut comments = Vec::with_capacity(COMMENTS_PER_ARTICLE);
        for n in 1..=COMMENTS_PER_ARTICLE {
            let comment = self
                .comment_write
                .insert(NewComment::for_article(
                    article.id,
                    format!("This is comment {n}."),
                ))
                .await?;
            comments.push(comment);
        }

        tracing::info!(
            article_id = %article.id,
            comments = comments.len(),
            "seeded demo article"
        );

        Ok(ArticleRead::from_parts(article, comments)?)
    }

    /// First article in storage order, with its comments.
    pub async fn first_article(&self) -> ApplicationResult<Option<ArticleRead>> {
        let articles = self.article_queries.list_articles().await?;
        Ok(articles.into_iter().next())
    }
}
