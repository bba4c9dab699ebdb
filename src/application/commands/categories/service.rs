// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::{
        category::{CategoryId, CategoryReadRepository, CategoryWriteRepository},
        post::PostReadRepository,
        slug::SlugAssigner,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) posts: Arc<dyn PostReadRepository>,
    pub(super) slugs: Arc<SlugAssigner<CategoryId>>,
    pub(super) clock: Arc<ClockPort>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        posts: Arc<dyn PostReadRepository>,
        slugs: Arc<SlugAssigner<CategoryId>>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            posts,
            slugs,
            clock,
        }
    }
}
