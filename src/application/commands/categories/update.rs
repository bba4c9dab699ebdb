// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryDescription, CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some("")` clears the description, `None` leaves it alone.
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let name = command.name.map(CategoryName::new).transpose()?;
        let description = command
            .description
            .map(|text| CategoryDescription::parse_optional(Some(text)))
            .transpose()?;
        let now = self.clock.now();

        let name_modified = match name {
            Some(name) => category.rename(name, now),
            None => false,
        };
        if let Some(description) = description {
            category.set_description(description, now);
        }

        self.slugs.ensure_slug(&mut category, name_modified).await?;
        self.slugs.ensure_slug(&mut category, false).await?;

        let update = CategoryUpdate::from_category(&category)
            .ok_or_else(|| ApplicationError::infrastructure("category slug was not assigned"))?;
        let updated = self.write_repo.update(update).await?;
        if name_modified {
            tracing::info!(category_id = %updated.id, slug = ?updated.slug, "category renamed");
        }
        Ok(updated.into())
    }
}
