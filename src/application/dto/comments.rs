use crate::domain::comment::Comment;
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentRead {
    pub id: i64,
    pub content: String,
    pub article_id: i64,
}

impl TryFrom<Comment> for CommentRead {
    type Error = DomainError;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        let article_id = comment.article_id.ok_or_else(|| {
            DomainError::Validation(format!(
                "comment {} is not attached to an article",
                i64::from(comment.id)
            ))
        })?;

        Ok(Self {
            id: comment.id.into(),
            content: comment.content.into_inner(),
            article_id: article_id.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleId;
    use crate::domain::comment::{CommentContent, CommentId};

    #[test]
    fn attached_comment_projects_all_fields() {
        let comment = Comment {
            id: CommentId::new(3),
            content: CommentContent::new("first"),
            article_id: Some(ArticleId::new(9)),
        };

        let read = CommentRead::try_from(comment).unwrap();
        assert_eq!(
            read,
            CommentRead {
                id: 3,
                content: "first".into(),
                article_id: 9,
            }
        );
    }

    #[test]
    fn unattached_comment_is_rejected() {
        let comment = Comment {
            id: CommentId::new(3),
            content: CommentContent::new("orphan"),
            article_id: None,
        };

        assert!(matches!(
            CommentRead::try_from(comment),
            Err(DomainError::Validation(_))
        ));
    }
}
