// tests/support/helpers.rs
use super::mocks::InMemoryStore;
use article_board::application::services::{ApplicationServices, Repositories};
use article_board::domain::article::{ArticleWriteRepository, NewArticle};
use article_board::domain::comment::{CommentWriteRepository, NewComment};
use article_board::infrastructure::database::{self, DatabasePool};
use article_board::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn memory_repositories(store: &Arc<InMemoryStore>) -> Repositories {
    Repositories {
        article_read: store.clone(),
        article_write: store.clone(),
        comment_read: store.clone(),
        comment_write: store.clone(),
    }
}

pub fn router_for(repos: Repositories) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(repos));
    build_router(HttpState { services })
}

pub fn make_memory_router(store: &Arc<InMemoryStore>) -> axum::Router {
    router_for(memory_repositories(store))
}

/// Migrated in-memory SQLite database.
pub async fn sqlite_pool() -> DatabasePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open sqlite");
    database::run_migrations(&pool).await.expect("migrate");
    pool
}

/// Inserts an article and its comments through the write repositories and
/// returns the new article id.
pub async fn create_article(repos: &Repositories, title: &str, comments: &[&str]) -> i64 {
    let article = repos
        .article_write
        .insert(NewArticle::new(title))
        .await
        .expect("insert article");
    for content in comments {
        repos
            .comment_write
            .insert(NewComment::for_article(article.id, *content))
            .await
            .expect("insert comment");
    }
    article.id.into()
}

pub async fn get(app: &axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// Asserts the status and a JSON content type, then returns the parsed body.
pub async fn json_body(resp: Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body_bytes)
    );
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

/// Asserts an `ErrorResponse` body with the expected status and reason.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    let json = json_body(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
