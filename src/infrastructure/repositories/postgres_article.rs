// src/infrastructure/repositories/postgres_article.rs
use super::{ArticleRow, map_sqlx};
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title) VALUES ($1) RETURNING id, title",
        )
        .bind(article.title.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, ArticleRow>("SELECT id, title FROM articles ORDER BY id")
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>("SELECT id, title FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> DomainResult<u64> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total)
            .map_err(|_| DomainError::Persistence(format!("invalid article count {total}")))
    }
}
