use super::error::{is_foreign_key_violation, map_sqlx};
use crate::domain::category::{
    Category, CategoryDescription, CategoryId, CategoryName, CategoryReadRepository,
    CategoryUpdate, CategoryWriteRepository, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

macro_rules! category_columns {
    () => {
        "id, name, slug, description, created_at, updated_at"
    };
}

#[derive(Clone)]
pub struct SqliteCategoryWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCategoryReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: row.slug.filter(|s| !s.is_empty()).map(Slug::new).transpose()?,
            description: CategoryDescription::parse_optional(row.description)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for SqliteCategoryWriteRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            description,
            created_at,
            updated_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(concat!(
            "INSERT INTO categories (name, slug, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING ",
            category_columns!()
        ))
        .bind(name.as_str())
        .bind(slug.as_ref().map(|s| s.as_str()))
        .bind(description.as_ref().map(|d| d.as_str()))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            description,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, CategoryRow>(concat!(
            "UPDATE categories SET name = ?, slug = ?, description = ?, updated_at = ? WHERE id = ? RETURNING ",
            category_columns!()
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(|d| d.as_str()))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::not_found("category not found"))?;
        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    DomainError::conflict("category still has posts")
                } else {
                    map_sqlx(err)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("category not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for SqliteCategoryReadRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(concat!(
            "SELECT ",
            category_columns!(),
            " FROM categories WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(concat!(
            "SELECT ",
            category_columns!(),
            " FROM categories WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(concat!(
            "SELECT ",
            category_columns!(),
            " FROM categories ORDER BY name ASC, id ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn list_missing_slugs(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(concat!(
            "SELECT ",
            category_columns!(),
            " FROM categories WHERE slug IS NULL OR slug = '' ORDER BY id ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}

#[async_trait]
impl SlugLookup for SqliteCategoryReadRepository {
    type Id = CategoryId;

    async fn slug_in_use(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<bool> {
        let exclude = exclude.map(i64::from);
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug.as_str())
        .bind(exclude)
        .bind(exclude)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)
    }
}
