// src/application/commands/maintenance.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        category::{CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository},
        post::{PostId, PostReadRepository, PostUpdate, PostWriteRepository},
        slug::SlugAssigner,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlugRepairReport {
    pub categories: usize,
    pub posts: usize,
}

/// Backfills slugs on rows that were stored without one.
pub struct SlugMaintenanceService {
    category_read: Arc<dyn CategoryReadRepository>,
    category_write: Arc<dyn CategoryWriteRepository>,
    category_slugs: Arc<SlugAssigner<CategoryId>>,
    post_read: Arc<dyn PostReadRepository>,
    post_write: Arc<dyn PostWriteRepository>,
    post_slugs: Arc<SlugAssigner<PostId>>,
}

impl SlugMaintenanceService {
    pub fn new(
        category_read: Arc<dyn CategoryReadRepository>,
        category_write: Arc<dyn CategoryWriteRepository>,
        category_slugs: Arc<SlugAssigner<CategoryId>>,
        post_read: Arc<dyn PostReadRepository>,
        post_write: Arc<dyn PostWriteRepository>,
        post_slugs: Arc<SlugAssigner<PostId>>,
    ) -> Self {
        Self {
            category_read,
            category_write,
            category_slugs,
            post_read,
            post_write,
            post_slugs,
        }
    }

    /// Runs the persistence-point slug step on every record lacking a slug.
    ///
    /// Records are saved one at a time, so a failure leaves earlier repairs in
    /// place and the run can simply be repeated.
    pub async fn repair_missing_slugs(&self) -> ApplicationResult<SlugRepairReport> {
        let mut report = SlugRepairReport::default();

        for mut category in self.category_read.list_missing_slugs().await? {
            self.category_slugs.ensure_slug(&mut category, false).await?;
            let update = CategoryUpdate::from_category(&category)
                .ok_or_else(|| ApplicationError::infrastructure("category slug was not assigned"))?;
            let saved = self.category_write.update(update).await?;
            tracing::info!(category = %saved.name, slug = ?saved.slug, "repaired category slug");
            report.categories += 1;
        }

        for mut post in self.post_read.list_missing_slugs().await? {
            self.post_slugs.ensure_slug(&mut post, false).await?;
            let update = PostUpdate::from_post(&post)
                .ok_or_else(|| ApplicationError::infrastructure("post slug was not assigned"))?;
            let saved = self.post_write.update(update).await?;
            tracing::info!(post = %saved.title, slug = ?saved.slug, "repaired post slug");
            report.posts += 1;
        }

        Ok(report)
    }
}
