// src/application/commands/posts/view.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::PostId, slug::Slug},
};

pub enum ViewPostCommand {
    ById(i64),
    BySlug(String),
}

impl PostCommandService {
    /// Fetch a post for display and count the view.
    pub async fn view_post(&self, command: ViewPostCommand) -> ApplicationResult<PostDto> {
        let post = match command {
            ViewPostCommand::ById(id) => self.load_post(PostId::new(id)?).await?,
            ViewPostCommand::BySlug(slug) => {
                let slug = Slug::new(slug)?;
                self.read_repo
                    .find_by_slug(&slug)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("post not found"))?
            }
        };

        let viewed = self.write_repo.increment_view_count(post.id).await?;
        Ok(viewed.into())
    }
}
