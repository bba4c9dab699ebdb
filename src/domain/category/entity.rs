// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryDescription, CategoryId, CategoryName};
use crate::domain::slug::{Slug, Sluggable};
use chrono::{DateTime, Utc};

pub const CATEGORY_KIND: &str = "category";

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    /// `None` only for rows written before slugs were assigned on save.
    pub slug: Option<Slug>,
    pub description: Option<CategoryDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn url(&self) -> Option<String> {
        self.slug
            .as_ref()
            .map(|slug| format!("/categories/{slug}"))
    }

    /// Apply a rename and report whether the name actually changed.
    pub fn rename(&mut self, name: CategoryName, now: DateTime<Utc>) -> bool {
        if self.name == name {
            return false;
        }
        self.name = name;
        self.updated_at = now;
        true
    }

    pub fn set_description(&mut self, description: Option<CategoryDescription>, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }
}

impl Sluggable for Category {
    type Id = CategoryId;
    const KIND: &'static str = CATEGORY_KIND;

    fn record_id(&self) -> Option<CategoryId> {
        Some(self.id)
    }

    fn display_text(&self) -> &str {
        self.name.as_str()
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Option<Slug>,
    pub description: Option<CategoryDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sluggable for NewCategory {
    type Id = CategoryId;
    const KIND: &'static str = CATEGORY_KIND;

    fn record_id(&self) -> Option<CategoryId> {
        None
    }

    fn display_text(&self) -> &str {
        self.name.as_str()
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

/// Full replacement of the mutable columns of a category row.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<CategoryDescription>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    /// `None` when the category still has no slug.
    pub fn from_category(category: &Category) -> Option<Self> {
        Some(Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone()?,
            description: category.description.clone(),
            updated_at: category.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("Rust").unwrap(),
            slug: Some(Slug::new("rust").unwrap()),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn rename_to_same_name_is_not_a_change() {
        let mut category = sample();
        let before = category.updated_at;
        let later = before + chrono::Duration::seconds(5);
        assert!(!category.rename(CategoryName::new("Rust").unwrap(), later));
        assert_eq!(category.updated_at, before);
    }

    #[test]
    fn rename_reports_change() {
        let mut category = sample();
        let later = Utc::now() + chrono::Duration::seconds(5);
        assert!(category.rename(CategoryName::new("Go").unwrap(), later));
        assert_eq!(category.name.as_str(), "Go");
        assert_eq!(category.updated_at, later);
    }

    #[test]
    fn url_uses_slug() {
        assert_eq!(sample().url().as_deref(), Some("/categories/rust"));
    }

    #[test]
    fn update_requires_slug() {
        let mut category = sample();
        assert!(CategoryUpdate::from_category(&category).is_some());
        category.slug = None;
        assert!(CategoryUpdate::from_category(&category).is_none());
    }
}
