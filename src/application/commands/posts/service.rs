// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        category::{CategoryId, CategoryReadRepository},
        post::{Post, PostId, PostReadRepository, PostWriteRepository},
        slug::SlugAssigner,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slugs: Arc<SlugAssigner<PostId>>,
    pub(super) clock: Arc<ClockPort>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        slugs: Arc<SlugAssigner<PostId>>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slugs,
            clock,
        }
    }

    pub(super) async fn load_post(&self, id: PostId) -> ApplicationResult<Post> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub(super) async fn ensure_category_exists(&self, id: CategoryId) -> ApplicationResult<()> {
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found("category not found")),
        }
    }
}
