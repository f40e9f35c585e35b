// src/infrastructure/database.rs
use crate::application::services::Repositories;
use crate::infrastructure::repositories::{
    PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCommentReadRepository,
    PostgresCommentWriteRepository, SqliteArticleReadRepository, SqliteArticleWriteRepository,
    SqliteCommentReadRepository, SqliteCommentWriteRepository,
};
use sqlx::{
    PgPool, SqlitePool,
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, sync::Arc};

/// Process-wide connection pool. Repositories borrow one connection from it
/// per operation; the pool itself is never handed to request handlers.
#[derive(Clone, Debug)]
pub enum DatabasePool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DatabasePool {
    pub const fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }

    pub fn repositories(&self) -> Repositories {
        match self {
            Self::Postgres(pool) => Repositories {
                article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
                article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
                comment_read: Arc::new(PostgresCommentReadRepository::new(pool.clone())),
                comment_write: Arc::new(PostgresCommentWriteRepository::new(pool.clone())),
            },
            Self::Sqlite(pool) => Repositories {
                article_read: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
                article_write: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
                comment_read: Arc::new(SqliteCommentReadRepository::new(pool.clone())),
                comment_write: Arc::new(SqliteCommentWriteRepository::new(pool.clone())),
            },
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DatabasePool, sqlx::Error> {
    if database_url.starts_with("sqlite:") {
        init_sqlite_pool(database_url, max_connections)
            .await
            .map(DatabasePool::Sqlite)
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(DatabasePool::Postgres(pool))
    }
}

async fn init_sqlite_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Every connection to `:memory:` opens its own database, so keep exactly
    // one alive for the lifetime of the pool.
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

/// Creates the `articles` and `comments` tables when they are missing.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), sqlx::migrate::MigrateError> {
    match pool {
        DatabasePool::Postgres(pool) => sqlx::migrate!("./migrations/postgres").run(pool).await,
        DatabasePool::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await,
    }
}
