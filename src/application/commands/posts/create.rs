// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{
        category::CategoryId,
        post::{
            AuthorId, FeaturedImage, NewPost, PostContent, PostExcerpt, PostTitle, Tags,
        },
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub author_id: i64,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category_id: Option<i64>,
    author_id: Option<i64>,
    excerpt: Option<String>,
    featured_image: Option<String>,
    tags: Vec<String>,
    is_published: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn featured_image(mut self, featured_image: impl Into<String>) -> Self {
        self.featured_image = Some(featured_image.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn publish(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            category_id: self.category_id.ok_or("category is required")?,
            author_id: self.author_id.ok_or("author is required")?,
            excerpt: self.excerpt,
            featured_image: self.featured_image,
            tags: self.tags,
            is_published: self.is_published,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category_id = CategoryId::new(command.category_id)?;
        let author_id = AuthorId::new(command.author_id)?;
        let excerpt = PostExcerpt::parse_optional(command.excerpt)?;
        let now = self.clock.now();

        let mut post = NewPost {
            title,
            slug: None,
            content,
            excerpt,
            featured_image: FeaturedImage::new(command.featured_image),
            author_id,
            category_id,
            tags: Tags::new(command.tags),
            is_published: command.is_published,
            created_at: now,
            updated_at: now,
        };

        self.slugs.ensure_slug(&mut post, true).await?;
        self.ensure_category_exists(post.category_id).await?;
        self.slugs.ensure_slug(&mut post, false).await?;

        let created = self.write_repo.insert(post).await?;
        tracing::info!(post_id = %created.id, slug = ?created.slug, "post created");
        Ok(created.into())
    }
}
