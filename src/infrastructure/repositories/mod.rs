// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod sqlite_article;
mod sqlite_comment;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::{PostgresCommentReadRepository, PostgresCommentWriteRepository};
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_comment::{SqliteCommentReadRepository, SqliteCommentWriteRepository};

use crate::domain::{
    article::{Article, ArticleId, ArticleTitle},
    comment::{Comment, CommentContent, CommentId},
};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct ArticleRow {
    id: i64,
    title: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title),
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CommentRow {
    id: i64,
    content: String,
    article_id: Option<i64>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::new(row.id),
            content: CommentContent::new(row.content),
            article_id: row.article_id.map(ArticleId::new),
        }
    }
}
