use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        let url = category.url();
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.map(|slug| slug.into_inner()),
            url,
            description: category.description.map(|d| d.into_inner()),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub count: usize,
    pub items: Vec<CategoryDto>,
}

impl From<Vec<CategoryDto>> for CategoryListDto {
    fn from(items: Vec<CategoryDto>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
