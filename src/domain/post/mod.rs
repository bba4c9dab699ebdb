pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewComment, NewPost, POST_KIND, Post, PostUpdate};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository};
pub use value_objects::{
    AuthorId, CommentContent, CommentId, DEFAULT_FEATURED_IMAGE, FeaturedImage, PostContent,
    PostExcerpt, PostId, PostTitle, Tags,
};
