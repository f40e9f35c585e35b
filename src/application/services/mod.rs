// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::seed::DemoSeeder,
        queries::{articles::ArticleQueryService, comments::CommentQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::{CommentReadRepository, CommentWriteRepository},
    },
};

/// Repository handles for one storage backend.
#[derive(Clone)]
pub struct Repositories {
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub comment_read: Arc<dyn CommentReadRepository>,
    pub comment_write: Arc<dyn CommentWriteRepository>,
}

/// Request-independent context shared by every handler.
pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub seeder: Arc<DemoSeeder>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comment_read),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&repos.comment_read)));
        let seeder = Arc::new(DemoSeeder::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.comment_write),
            Arc::clone(&article_queries),
        ));

        Self {
            article_queries,
            comment_queries,
            seeder,
        }
    }
}
