use crate::application::dto::CommentRead;
use crate::domain::article::Article;
use crate::domain::comment::Comment;
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleRead {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub comments: Vec<CommentRead>,
}

impl ArticleRead {
    /// Builds the projection from an article and the comments loaded for it.
    pub fn from_parts(article: Article, comments: Vec<Comment>) -> DomainResult<Self> {
        let comments = comments
            .into_iter()
            .map(CommentRead::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            comments,
        })
    }
}
