pub mod articles;
pub mod comments;

pub use articles::ArticleRead;
pub use comments::CommentRead;
