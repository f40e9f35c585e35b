// tests/support/mocks.rs
use article_board::domain::{
    article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle},
    comment::{Comment, CommentId, CommentReadRepository, CommentWriteRepository, NewComment},
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory article/comment store standing in for a database.
#[derive(Default)]
pub struct InMemoryStore {
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unattached comment, which no article-scoped lookup may return.
    pub fn push_orphan_comment(&self, content: &str) {
        let mut comments = self.comments.lock().unwrap();
        let id = comments.len() as i64 + 1;
        comments.push(Comment {
            id: CommentId::new(id),
            content: article_board::domain::comment::CommentContent::new(content),
            article_id: None,
        });
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let created = Article {
            id: ArticleId::new(articles.len() as i64 + 1),
            title: article.title,
        };
        articles.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.articles.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        if let Some(article_id) = comment.article_id {
            let exists = self
                .articles
                .lock()
                .unwrap()
                .iter()
                .any(|a| a.id == article_id);
            if !exists {
                return Err(DomainError::Persistence("FOREIGN KEY constraint failed".into()));
            }
        }

        let mut comments = self.comments.lock().unwrap();
        let created = Comment {
            id: CommentId::new(comments.len() as i64 + 1),
            content: comment.content,
            article_id: comment.article_id,
        };
        comments.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryStore {
    async fn list_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.belongs_to(article_id))
            .cloned()
            .collect())
    }

    async fn list_by_article_ids(&self, article_ids: &[ArticleId]) -> DomainResult<Vec<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id.is_some_and(|id| article_ids.contains(&id)))
            .cloned()
            .collect())
    }
}

/// Article repository whose every call fails as if the database were gone.
pub struct UnavailableArticleRepo;

#[async_trait]
impl ArticleReadRepository for UnavailableArticleRepo {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn count(&self) -> DomainResult<u64> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
