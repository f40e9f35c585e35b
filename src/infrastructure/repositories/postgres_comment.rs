// src/infrastructure/repositories/postgres_comment.rs
use super::{CommentRow, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentReadRepository, CommentWriteRepository, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresCommentWriteRepository {
    pool: PgPool,
}

impl PostgresCommentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (content, article_id) VALUES ($1, $2)
             RETURNING id, content, article_id",
        )
        .bind(comment.content.as_str())
        .bind(comment.article_id.map(i64::from))
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn list_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, article_id FROM comments WHERE article_id = $1 ORDER BY id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_article_ids(&self, article_ids: &[ArticleId]) -> DomainResult<Vec<Comment>> {
        if article_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = article_ids.iter().copied().map(i64::from).collect();
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, article_id FROM comments WHERE article_id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
