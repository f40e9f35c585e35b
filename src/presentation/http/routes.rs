// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments},
    openapi::{self, MessageResponse, StatusResponse},
};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/", get(root))
        .route("/health", get(health))
        .route("/articles", get(articles::list_articles))
        .route("/articles/", get(articles::list_articles))
        .route("/articles/{article_id}", get(articles::get_article_by_id))
        .route(
            "/comments/articles/{article_id}/comments",
            get(comments::list_comments_by_article_id),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner.", body = MessageResponse)
    ),
    tag = "System"
)]
pub async fn root() -> axum::Json<MessageResponse> {
    axum::Json(MessageResponse {
        message: "Service is running!".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
