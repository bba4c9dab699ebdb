// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryDescription, CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let description = CategoryDescription::parse_optional(command.description)?;
        let now = self.clock.now();

        let mut category = NewCategory {
            name,
            slug: None,
            description,
            created_at: now,
            updated_at: now,
        };

        // validation point, then persistence point
        self.slugs.ensure_slug(&mut category, true).await?;
        self.slugs.ensure_slug(&mut category, false).await?;

        let created = self.write_repo.insert(category).await?;
        tracing::info!(category_id = %created.id, slug = ?created.slug, "category created");
        Ok(created.into())
    }
}
