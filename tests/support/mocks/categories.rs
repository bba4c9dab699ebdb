// tests/support/mocks/categories.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use inkpost_core::domain::category::{
    Category, CategoryId, CategoryName, CategoryReadRepository, CategoryUpdate,
    CategoryWriteRepository, NewCategory,
};
use inkpost_core::domain::errors::{DomainError, DomainResult};
use inkpost_core::domain::slug::{Slug, SlugLookup};

use super::time::fixed_now;

/// メモリ上のカテゴリストア。名前と slug の一意制約を再現する。
#[derive(Default)]
pub struct InMemoryCategories {
    rows: Mutex<BTreeMap<i64, Category>>,
    probes: AtomicUsize,
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// slug なしで保存された古い行を直接追加する
    pub fn seed_without_slug(&self, name: &str) -> CategoryId {
        let mut rows = self.rows.lock().unwrap();
        let id = CategoryId::new(rows.len() as i64 + 1).unwrap();
        rows.insert(
            i64::from(id),
            Category {
                id,
                name: CategoryName::new(name).unwrap(),
                slug: None,
                description: None,
                created_at: fixed_now(),
                updated_at: fixed_now(),
            },
        );
        id
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn check_unique(
        rows: &BTreeMap<i64, Category>,
        id: Option<i64>,
        name: &CategoryName,
        slug: Option<&Slug>,
    ) -> DomainResult<()> {
        for row in rows.values() {
            if Some(i64::from(row.id)) == id {
                continue;
            }
            if &row.name == name {
                return Err(DomainError::conflict("category name already exists"));
            }
            if slug.is_some() && row.slug.as_ref() == slug {
                return Err(DomainError::conflict("slug already exists"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        Self::check_unique(&rows, None, &category.name, category.slug.as_ref())?;
        let next = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Category {
            id: CategoryId::new(next)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        rows.insert(next, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        let id = i64::from(update.id);
        Self::check_unique(&rows, Some(id), &update.name, Some(&update.slug))?;
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("category not found"))?;
        row.name = update.name;
        row.slug = Some(update.slug);
        row.description = update.description;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("category not found"))
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategories {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|c| c.slug.as_ref() == Some(slug)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut all = self.snapshot();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }

    async fn list_missing_slugs(&self) -> DomainResult<Vec<Category>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|c| c.slug.is_none())
            .collect())
    }
}

#[async_trait]
impl SlugLookup for InMemoryCategories {
    type Id = CategoryId;

    async fn slug_in_use(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<bool> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .any(|c| c.slug.as_ref() == Some(slug) && Some(c.id) != exclude))
    }
}
