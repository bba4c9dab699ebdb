// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, maintenance::SlugMaintenanceService,
            posts::PostCommandService,
        },
        ports::ClockPort,
        queries::{categories::CategoryQueryService, posts::PostQueryService},
    },
    domain::{
        category::{CategoryId, CategoryReadRepository, CategoryWriteRepository},
        post::{PostId, PostReadRepository, PostWriteRepository},
        slug::{SlugAssigner, SlugLookup},
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub slug_maintenance: Arc<SlugMaintenanceService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        category_slug_lookup: Arc<dyn SlugLookup<Id = CategoryId>>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        post_slug_lookup: Arc<dyn SlugLookup<Id = PostId>>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let category_slugs = Arc::new(SlugAssigner::new(category_slug_lookup));
        let post_slugs = Arc::new(SlugAssigner::new(post_slug_lookup));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&category_slugs),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_read_repo)));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&category_read_repo),
            Arc::clone(&post_slugs),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let slug_maintenance = Arc::new(SlugMaintenanceService::new(
            category_read_repo,
            category_write_repo,
            category_slugs,
            post_read_repo,
            post_write_repo,
            post_slugs,
        ));

        Self {
            category_commands,
            category_queries,
            post_commands,
            post_queries,
            slug_maintenance,
        }
    }
}
