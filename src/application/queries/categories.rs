// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, CategoryListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryReadRepository},
        slug::Slug,
    },
};

pub struct GetCategoryQuery {
    pub id: i64,
}

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

pub struct CategoryQueryService {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategoryQueryService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<CategoryListDto> {
        let categories = self.read_repo.list().await?;
        let items: Vec<CategoryDto> = categories.into_iter().map(Into::into).collect();
        Ok(items.into())
    }

    pub async fn get_category(&self, query: GetCategoryQuery) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let slug = Slug::new(query.slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
