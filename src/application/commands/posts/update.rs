// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        post::{FeaturedImage, PostContent, PostExcerpt, PostId, PostTitle, PostUpdate, Tags},
    },
};

#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self.load_post(id).await?;

        let UpdatePostCommand {
            id: _,
            title,
            content,
            excerpt,
            featured_image,
            category_id,
            tags,
            is_published,
        } = command;

        let title = title.map(PostTitle::new).transpose()?;
        let content = content.map(PostContent::new).transpose()?;
        let excerpt = excerpt
            .map(|text| PostExcerpt::parse_optional(Some(text)))
            .transpose()?;
        let category_id = category_id.map(CategoryId::new).transpose()?;
        let now = self.clock.now();

        let title_modified = match title {
            Some(title) => post.retitle(title, now),
            None => false,
        };
        if let Some(content) = content {
            post.content = content;
        }
        if let Some(excerpt) = excerpt {
            post.excerpt = excerpt;
        }
        if let Some(image) = featured_image {
            post.featured_image = FeaturedImage::new(Some(image));
        }
        if let Some(category_id) = category_id {
            post.category_id = category_id;
        }
        if let Some(tags) = tags {
            post.tags = Tags::new(tags);
        }
        if let Some(is_published) = is_published {
            post.is_published = is_published;
        }
        post.touch(now);

        self.slugs.ensure_slug(&mut post, title_modified).await?;
        if category_id.is_some() {
            self.ensure_category_exists(post.category_id).await?;
        }
        self.slugs.ensure_slug(&mut post, false).await?;

        let update = PostUpdate::from_post(&post)
            .ok_or_else(|| ApplicationError::infrastructure("post slug was not assigned"))?;
        let updated = self.write_repo.update(update).await?;
        if title_modified {
            tracing::info!(post_id = %updated.id, slug = ?updated.slug, "post retitled");
        }
        Ok(updated.into())
    }
}
