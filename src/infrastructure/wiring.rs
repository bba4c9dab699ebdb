// src/infrastructure/wiring.rs
use crate::application::{ports::ClockPort, services::ApplicationServices};
use crate::domain::{
    category::{CategoryId, CategoryReadRepository, CategoryWriteRepository},
    post::{PostId, PostReadRepository, PostWriteRepository},
    slug::SlugLookup,
};
use crate::infrastructure::repositories::{
    SqliteCategoryReadRepository, SqliteCategoryWriteRepository, SqlitePostReadRepository,
    SqlitePostWriteRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Assemble the application services on top of the SQLite repositories.
///
/// The read repositories double as slug lookups, so slug probes and lookups
/// by slug share one connection pool.
pub fn sqlite_services(pool: Arc<SqlitePool>, clock: Arc<ClockPort>) -> ApplicationServices {
    let category_read = Arc::new(SqliteCategoryReadRepository::new(Arc::clone(&pool)));
    let post_read = Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool)));

    let category_write_repo: Arc<dyn CategoryWriteRepository> =
        Arc::new(SqliteCategoryWriteRepository::new(Arc::clone(&pool)));
    let category_read_repo: Arc<dyn CategoryReadRepository> = category_read.clone();
    let category_slug_lookup: Arc<dyn SlugLookup<Id = CategoryId>> = category_read;

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool)));
    let post_read_repo: Arc<dyn PostReadRepository> = post_read.clone();
    let post_slug_lookup: Arc<dyn SlugLookup<Id = PostId>> = post_read;

    ApplicationServices::new(
        category_write_repo,
        category_read_repo,
        category_slug_lookup,
        post_write_repo,
        post_read_repo,
        post_slug_lookup,
        clock,
    )
}
