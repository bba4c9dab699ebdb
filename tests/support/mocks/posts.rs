// tests/support/mocks/posts.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use inkpost_core::domain::category::CategoryId;
use inkpost_core::domain::errors::{DomainError, DomainResult};
use inkpost_core::domain::post::{
    Comment, CommentId, NewComment, NewPost, Post, PostId, PostListFilter, PostReadRepository,
    PostUpdate, PostWriteRepository,
};
use inkpost_core::domain::slug::{Slug, SlugLookup};

/// メモリ上の投稿ストア。slug の一意制約のみ再現する。
#[derive(Default)]
pub struct InMemoryPosts {
    rows: Mutex<BTreeMap<i64, Post>>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn slug_taken(rows: &BTreeMap<i64, Post>, id: Option<PostId>, slug: &Slug) -> bool {
        rows.values()
            .any(|p| p.slug.as_ref() == Some(slug) && Some(p.id) != id)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPosts {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = post.slug.as_ref() {
            if Self::slug_taken(&rows, None, slug) {
                return Err(DomainError::conflict("slug already exists"));
            }
        }
        let next = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Post {
            id: PostId::new(next)?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            author_id: post.author_id,
            category_id: post.category_id,
            tags: post.tags,
            is_published: post.is_published,
            view_count: 0,
            comments: Vec::new(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        rows.insert(next, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        if Self::slug_taken(&rows, Some(update.id), &update.slug) {
            return Err(DomainError::conflict("slug already exists"));
        }
        let row = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::not_found("post not found"))?;
        row.title = update.title;
        row.slug = Some(update.slug);
        row.content = update.content;
        row.excerpt = update.excerpt;
        row.featured_image = update.featured_image;
        row.category_id = update.category_id;
        row.tags = update.tags;
        row.is_published = update.is_published;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("post not found"))
    }

    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut rows = self.rows.lock().unwrap();
        let total: usize = rows.values().map(|p| p.comments.len()).sum();
        let post = rows
            .get_mut(&i64::from(comment.post_id))
            .ok_or_else(|| DomainError::not_found("post not found"))?;
        let stored = Comment {
            id: CommentId::new(total as i64 + 1)?,
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
        };
        post.comments.push(stored.clone());
        Ok(stored)
    }

    async fn increment_view_count(&self, id: PostId) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        let post = rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::not_found("post not found"))?;
        post.view_count += 1;
        Ok(post.clone())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|p| p.slug.as_ref() == Some(slug)).cloned())
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut matching: Vec<Post> = self
            .snapshot()
            .into_iter()
            .filter(|p| filter.category_id.is_none_or(|c| p.category_id == c))
            .filter(|p| filter.published.is_none_or(|flag| p.is_published == flag))
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Post>> {
        let needle = query.to_lowercase();
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|p| {
                p.title.as_str().to_lowercase().contains(&needle)
                    || p.content.as_str().to_lowercase().contains(&needle)
                    || p
                        .tags
                        .as_slice()
                        .iter()
                        .any(|t| t.to_lowercase().contains(&needle))
            })
            .take(limit as usize)
            .collect())
    }

    async fn list_missing_slugs(&self) -> DomainResult<Vec<Post>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|p| p.slug.is_none())
            .collect())
    }

    async fn exists_in_category(&self, category_id: CategoryId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().any(|p| p.category_id == category_id))
    }
}

#[async_trait]
impl SlugLookup for InMemoryPosts {
    type Id = PostId;

    async fn slug_in_use(&self, slug: &Slug, exclude: Option<PostId>) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(Self::slug_taken(&rows, exclude, slug))
    }
}
