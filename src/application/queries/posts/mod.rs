// src/application/queries/posts/mod.rs
mod list;
mod search;
mod service;

pub use list::ListPostsQuery;
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
