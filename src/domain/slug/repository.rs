// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::Slug;
use async_trait::async_trait;

/// Existence probe over one record collection.
///
/// Implementations must back the `slug` column with a unique constraint: the
/// probe is advisory and two concurrent saves can both observe a free
/// candidate. The constraint turns the losing write into a
/// [`DomainError::Conflict`](crate::domain::errors::DomainError::Conflict).
#[async_trait]
pub trait SlugLookup: Send + Sync {
    type Id: Copy + Send + Sync;

    /// Whether a record other than `exclude` already owns `slug`.
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<Self::Id>) -> DomainResult<bool>;
}

/// A record whose URL identifier is derived from a human-readable text.
pub trait Sluggable {
    type Id: Copy + Send + Sync;

    /// Base used when the display text strips down to nothing.
    const KIND: &'static str;

    /// `None` until the record has been persisted.
    fn record_id(&self) -> Option<Self::Id>;
    fn display_text(&self) -> &str;
    fn slug(&self) -> Option<&Slug>;
    fn assign_slug(&mut self, slug: Slug);
}
