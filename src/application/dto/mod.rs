pub mod categories;
pub mod posts;

pub use categories::{CategoryDto, CategoryListDto};
pub use posts::{CommentDto, PostDto, PostPageDto};
