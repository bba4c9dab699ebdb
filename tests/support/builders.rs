// tests/support/builders.rs
use inkpost_core::application::commands::categories::CreateCategoryCommand;
use inkpost_core::application::commands::posts::CreatePostCommand;

pub fn category(name: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.to_string(),
        description: None,
    }
}

pub fn post(title: &str, category_id: i64) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .content("Body text for tests.")
        .category_id(category_id)
        .author_id(1)
        .build()
        .expect("complete post command")
}
