// src/application/commands/posts/comment.rs
use super::PostCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::post::{AuthorId, CommentContent, NewComment, PostId},
};

pub struct AddCommentCommand {
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
}

impl PostCommandService {
    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)?;
        let author_id = AuthorId::new(command.author_id)?;
        let content = CommentContent::new(command.content)?;
        self.load_post(post_id).await?;

        let comment = self
            .write_repo
            .add_comment(NewComment {
                post_id,
                author_id,
                content,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(comment.into())
    }
}
