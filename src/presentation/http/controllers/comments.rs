// src/presentation/http/controllers/comments.rs
use crate::application::{dto::CommentRead, queries::comments::ListCommentsByArticleQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::IdPath;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Unknown article ids answer with an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/comments/articles/{article_id}/comments",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Comments attached to the article.", body = [CommentRead])
    ),
    tag = "Comments"
)]
pub async fn list_comments_by_article_id(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
) -> HttpResult<Json<Vec<CommentRead>>> {
    state
        .services
        .comment_queries
        .list_comments_by_article_id(ListCommentsByArticleQuery { article_id })
        .await
        .into_http()
        .map(Json)
}
