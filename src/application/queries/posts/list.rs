// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::PostPageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryId, post::PostListFilter},
};

pub(super) const DEFAULT_LIMIT: u32 = 10;
pub(super) const MAX_LIMIT: u32 = 100;

pub struct ListPostsQuery {
    pub page: u32,
    pub limit: u32,
    pub category_id: Option<i64>,
    pub published: Option<bool>,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            category_id: None,
            published: None,
        }
    }
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostPageDto> {
        if query.page == 0 {
            return Err(ApplicationError::validation("page starts at 1"));
        }
        let limit = normalize_limit(query.limit);
        let filter = PostListFilter {
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            published: query.published,
        };
        let offset = u64::from(query.page - 1) * u64::from(limit);

        let (records, total) = self.read_repo.list_page(filter, offset, limit).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(PostPageDto::new(items, total, query.page, limit))
    }
}

pub(super) fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
