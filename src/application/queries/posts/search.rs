// src/application/queries/posts/search.rs
use super::{PostQueryService, list::normalize_limit};
use crate::application::{
    dto::PostDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct SearchPostsQuery {
    pub query: String,
    pub limit: u32,
}

impl PostQueryService {
    /// Case-insensitive substring match over title, content and tags.
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let needle = query.query.trim();
        if needle.is_empty() {
            return Err(ApplicationError::validation("search query is required"));
        }

        let records = self
            .read_repo
            .search(needle, normalize_limit(query.limit))
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
