use super::{CommentRow, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentReadRepository, CommentWriteRepository, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

// Stays well under SQLite's bound-parameter limit (32766).
const MAX_IDS_PER_QUERY: usize = 500;

#[derive(Clone)]
pub struct SqliteCommentWriteRepository {
    pool: SqlitePool,
}

impl SqliteCommentWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: SqlitePool,
}

impl SqliteCommentReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (content, article_id) VALUES (?, ?) RETURNING id, content, article_id",
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
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn list_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, article_id FROM comments WHERE article_id = ? ORDER BY id",
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

        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let mut rows = Vec::new();
        for chunk in article_ids.chunks(MAX_IDS_PER_QUERY) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT id, content, article_id FROM comments WHERE article_id IN (",
            );
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(i64::from(*id));
            }
            separated.push_unseparated(")");

            rows.extend(
                builder
                    .build_query_as::<CommentRow>()
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(map_sqlx)?,
            );
        }
        rows.sort_unstable_by_key(|row| row.id);

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
