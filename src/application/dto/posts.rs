use crate::domain::post::{Comment, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            author_id: comment.author_id.into(),
            content: comment.content.into_inner(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: String,
    pub author_id: i64,
    pub category_id: i64,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub view_count: i64,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let url = post.url();
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.map(|slug| slug.into_inner()),
            url,
            content: post.content.into_inner(),
            excerpt: post.excerpt.map(|e| e.into_inner()),
            featured_image: post.featured_image.into_inner(),
            author_id: post.author_id.into(),
            category_id: post.category_id.into(),
            tags: post.tags.into_inner(),
            is_published: post.is_published,
            view_count: post.view_count,
            comments: post.comments.into_iter().map(CommentDto::from).collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of posts, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPageDto {
    pub items: Vec<PostDto>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl PostPageDto {
    pub fn new(items: Vec<PostDto>, total: u64, page: u32, limit: u32) -> Self {
        let seen = u64::from(page.saturating_sub(1)) * u64::from(limit) + items.len() as u64;
        Self {
            has_more: seen < total,
            items,
            total,
            page,
            limit,
        }
    }
}
