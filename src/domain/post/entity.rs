// src/domain/post/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{
    AuthorId, CommentContent, CommentId, FeaturedImage, PostContent, PostExcerpt, PostId,
    PostTitle, Tags,
};
use crate::domain::slug::{Slug, Sluggable};
use chrono::{DateTime, Utc};

pub const POST_KIND: &str = "post";

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Option<Slug>,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub featured_image: FeaturedImage,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub tags: Tags,
    pub is_published: bool,
    pub view_count: i64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn url(&self) -> Option<String> {
        self.slug.as_ref().map(|slug| format!("/posts/{slug}"))
    }

    /// Apply a new title and report whether it differs from the current one.
    pub fn retitle(&mut self, title: PostTitle, now: DateTime<Utc>) -> bool {
        if self.title == title {
            return false;
        }
        self.title = title;
        self.updated_at = now;
        true
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Sluggable for Post {
    type Id = PostId;
    const KIND: &'static str = POST_KIND;

    fn record_id(&self) -> Option<PostId> {
        Some(self.id)
    }

    fn display_text(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Option<Slug>,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub featured_image: FeaturedImage,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub tags: Tags,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sluggable for NewPost {
    type Id = PostId;
    const KIND: &'static str = POST_KIND;

    fn record_id(&self) -> Option<PostId> {
        None
    }

    fn display_text(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

/// Full replacement of the editable columns of a post row. View count and
/// comments have their own write paths.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub featured_image: FeaturedImage,
    pub category_id: CategoryId,
    pub tags: Tags,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    /// `None` when the post still has no slug.
    pub fn from_post(post: &Post) -> Option<Self> {
        Some(Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone()?,
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            category_id: post.category_id,
            tags: post.tags.clone(),
            is_published: post.is_published,
            updated_at: post.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(4).unwrap(),
            title: PostTitle::new("Hello World").unwrap(),
            slug: Some(Slug::new("hello-world").unwrap()),
            content: PostContent::new("body").unwrap(),
            excerpt: None,
            featured_image: FeaturedImage::default(),
            author_id: AuthorId::new(1).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            tags: Tags::default(),
            is_published: false,
            view_count: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn url_is_built_from_slug() {
        assert_eq!(sample().url().as_deref(), Some("/posts/hello-world"));
    }

    #[test]
    fn retitle_with_same_text_is_not_a_change() {
        let mut post = sample();
        assert!(!post.retitle(PostTitle::new(" Hello World ").unwrap(), Utc::now()));
        assert!(post.retitle(PostTitle::new("Hello Rust").unwrap(), Utc::now()));
    }

    #[test]
    fn sluggable_view_exposes_title_and_id() {
        let post = sample();
        assert_eq!(post.display_text(), "Hello World");
        assert_eq!(post.record_id(), Some(PostId(4)));
    }

    #[test]
    fn update_carries_slug() {
        let post = sample();
        let update = PostUpdate::from_post(&post).unwrap();
        assert_eq!(update.slug.as_str(), "hello-world");
    }
}
