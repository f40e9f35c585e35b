use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, comment::CommentReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
        }
    }
}
