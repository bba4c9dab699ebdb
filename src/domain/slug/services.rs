// src/domain/slug/services.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::repository::{SlugLookup, Sluggable};
use crate::domain::slug::value_objects::{Slug, derive_base_slug};

/// Domain service producing collection-unique slugs for one record kind.
pub struct SlugAssigner<Id> {
    lookup: Arc<dyn SlugLookup<Id = Id>>,
}

impl<Id> SlugAssigner<Id>
where
    Id: Copy + Send + Sync + 'static,
{
    pub fn new(lookup: Arc<dyn SlugLookup<Id = Id>>) -> Self {
        Self { lookup }
    }

    /// Probe `base`, then `base-1`, `base-2`, ... until one is free.
    ///
    /// Every probe reads the store again. A probe error aborts the whole
    /// assignment.
    pub async fn assign_unique_slug(&self, base: &str, exclude: Option<Id>) -> DomainResult<Slug> {
        let mut candidate = Slug::new(base)?;
        let mut counter = 1u64;

        while self.lookup.slug_in_use(&candidate, exclude).await? {
            tracing::debug!(slug = %candidate, "slug taken, trying next suffix");
            candidate = Slug::with_suffix(base, counter)?;
            counter += 1;
        }

        Ok(candidate)
    }

    /// Give `record` a slug if it has none or its display text changed.
    ///
    /// Returns whether a slug was (re)assigned. Calling it again with
    /// `display_text_modified = false` on a record that already carries a slug
    /// leaves the slug untouched.
    pub async fn ensure_slug<R>(&self, record: &mut R, display_text_modified: bool) -> DomainResult<bool>
    where
        R: Sluggable<Id = Id> + Send,
    {
        if record.slug().is_some() && !display_text_modified {
            return Ok(false);
        }

        let text = record.display_text();
        if text.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{} needs a non-empty display text to derive a slug",
                R::KIND
            )));
        }

        let derived = derive_base_slug(text);
        let base = if derived.is_empty() {
            R::KIND.to_string()
        } else {
            derived
        };

        let slug = self.assign_unique_slug(&base, record.record_id()).await?;
        record.assign_slug(slug);
        Ok(true)
    }
}
