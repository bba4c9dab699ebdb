// src/domain/post/repository.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{Comment, NewComment, NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostListFilter {
    pub category_id: Option<CategoryId>,
    pub published: Option<bool>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `Conflict` when the slug is already taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Returns the post as stored after the increment.
    async fn increment_view_count(&self, id: PostId) -> DomainResult<Post>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Newest first. Returns the page and the total number of matches.
    async fn list_page(
        &self,
        filter: PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)>;
    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Post>>;
    async fn list_missing_slugs(&self) -> DomainResult<Vec<Post>>;
    async fn exists_in_category(&self, category_id: CategoryId) -> DomainResult<bool>;
}
