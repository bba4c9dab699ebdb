// src/application/commands/posts/mod.rs
mod comment;
mod create;
mod delete;
mod service;
mod update;
mod view;

pub use comment::AddCommentCommand;
pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
pub use view::ViewPostCommand;
