// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        if self.posts.exists_in_category(id).await? {
            return Err(ApplicationError::conflict("category still has posts"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}
