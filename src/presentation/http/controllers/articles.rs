// src/presentation/http/controllers/articles.rs
use crate::application::{dto::ArticleRead, queries::articles::GetArticleByIdQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::IdPath;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/articles/",
    responses(
        (status = 200, description = "All articles with their comments.", body = [ArticleRead])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleRead>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article with its comments.", body = ArticleRead),
        (status = 404, description = "No article has this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Json<ArticleRead>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
