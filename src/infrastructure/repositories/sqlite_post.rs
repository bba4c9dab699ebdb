use super::error::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorId, Comment, CommentContent, CommentId, FeaturedImage, NewComment, NewPost, Post,
    PostContent, PostExcerpt, PostId, PostListFilter, PostReadRepository, PostTitle, PostUpdate,
    PostWriteRepository, Tags,
};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

macro_rules! post_columns {
    () => {
        "id, title, slug, content, excerpt, featured_image, author_id, category_id, tags, is_published, view_count, created_at, updated_at"
    };
}

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: Option<String>,
    content: String,
    excerpt: Option<String>,
    featured_image: String,
    author_id: i64,
    category_id: i64,
    tags: String,
    is_published: bool,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, comments: Vec<Comment>) -> DomainResult<Post> {
        let tags: Vec<String> = serde_json::from_str(&self.tags)
            .map_err(|err| DomainError::Persistence(format!("invalid tags column: {err}")))?;

        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: self.slug.filter(|s| !s.is_empty()).map(Slug::new).transpose()?,
            content: PostContent::new(self.content)?,
            excerpt: PostExcerpt::parse_optional(self.excerpt)?,
            featured_image: FeaturedImage::new(Some(self.featured_image)),
            author_id: AuthorId::new(self.author_id)?,
            category_id: CategoryId::new(self.category_id)?,
            tags: Tags::new(tags),
            is_published: self.is_published,
            view_count: self.view_count,
            comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            author_id: AuthorId::new(row.author_id)?,
            content: CommentContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

fn encode_tags(tags: &Tags) -> DomainResult<String> {
    serde_json::to_string(tags.as_slice())
        .map_err(|err| DomainError::Persistence(format!("failed to encode tags: {err}")))
}

/// Unicode lowercase. SQLite `LIKE` only folds ASCII, so search runs over
/// columns folded here.
fn fold(text: &str) -> String {
    text.to_lowercase()
}

fn encode_folded_tags(tags: &Tags) -> DomainResult<String> {
    let folded: Vec<String> = tags.as_slice().iter().map(|tag| fold(tag)).collect();
    serde_json::to_string(&folded)
        .map_err(|err| DomainError::Persistence(format!("failed to encode tags: {err}")))
}

/// `%needle%` with LIKE wildcards in the needle escaped by `\`.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

async fn load_comments(
    pool: &SqlitePool,
    post_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<Comment>>> {
    let mut grouped: HashMap<i64, Vec<Comment>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(grouped);
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT id, post_id, author_id, content, created_at FROM post_comments WHERE post_id IN (",
    );
    let mut separated = builder.separated(", ");
    for id in post_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY created_at ASC, id ASC");

    let rows = builder
        .build_query_as::<CommentRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    for row in rows {
        let comment = Comment::try_from(row)?;
        grouped
            .entry(i64::from(comment.post_id))
            .or_default()
            .push(comment);
    }
    Ok(grouped)
}

async fn hydrate(pool: &SqlitePool, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut comments = load_comments(pool, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let thread = comments.remove(&row.id).unwrap_or_default();
            row.into_post(thread)
        })
        .collect()
}

async fn hydrate_one(pool: &SqlitePool, row: PostRow) -> DomainResult<Post> {
    let mut posts = hydrate(pool, vec![row]).await?;
    posts
        .pop()
        .ok_or_else(|| DomainError::Persistence("post row vanished while loading".into()))
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            featured_image,
            author_id,
            category_id,
            tags,
            is_published,
            created_at,
            updated_at,
        } = post;
        let tags_folded = encode_folded_tags(&tags)?;
        let tags = encode_tags(&tags)?;

        let row = sqlx::query_as::<_, PostRow>(concat!(
            "INSERT INTO posts (title, slug, content, excerpt, featured_image, author_id, category_id, tags, is_published, created_at, updated_at, title_folded, content_folded, tags_folded) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING ",
            post_columns!()
        ))
        .bind(title.as_str())
        .bind(slug.as_ref().map(|s| s.as_str()))
        .bind(content.as_str())
        .bind(excerpt.as_ref().map(|e| e.as_str()))
        .bind(featured_image.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(tags)
        .bind(is_published)
        .bind(created_at)
        .bind(updated_at)
        .bind(fold(title.as_str()))
        .bind(fold(content.as_str()))
        .bind(tags_folded)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_post(Vec::new())
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            featured_image,
            category_id,
            tags,
            is_published,
            updated_at,
        } = update;
        let tags_folded = encode_folded_tags(&tags)?;
        let tags = encode_tags(&tags)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET title_folded = ");
        builder.push_bind(fold(title.as_str()));
        builder.push(", content_folded = ");
        builder.push_bind(fold(content.as_str()));
        builder.push(", tags_folded = ");
        builder.push_bind(tags_folded);
        builder.push(", title = ");
        builder.push_bind(title.into_inner());
        builder.push(", slug = ");
        builder.push_bind(slug.into_inner());
        builder.push(", content = ");
        builder.push_bind(content.into_inner());
        builder.push(", excerpt = ");
        builder.push_bind(excerpt.map(PostExcerpt::into_inner));
        builder.push(", featured_image = ");
        builder.push_bind(featured_image.into_inner());
        builder.push(", category_id = ");
        builder.push_bind(i64::from(category_id));
        builder.push(", tags = ");
        builder.push_bind(tags);
        builder.push(", is_published = ");
        builder.push_bind(is_published);
        builder.push(", updated_at = ");
        builder.push_bind(updated_at);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(concat!(" RETURNING ", post_columns!()));

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("post not found"))?;

        hydrate_one(&self.pool, row).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("post not found"));
        }
        Ok(())
    }

    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            author_id,
            content,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO post_comments (post_id, author_id, content, created_at) VALUES (?, ?, ?, ?) RETURNING id, post_id, author_id, content, created_at",
        )
        .bind(i64::from(post_id))
        .bind(i64::from(author_id))
        .bind(content.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn increment_view_count(&self, id: PostId) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(concat!(
            "UPDATE posts SET view_count = view_count + 1 WHERE id = ? RETURNING ",
            post_columns!()
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("post not found"))?;

        hydrate_one(&self.pool, row).await
    }
}

impl SqlitePostReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: PostListFilter) {
        let mut has_where = false;
        if let Some(category_id) = filter.category_id {
            builder.push(" WHERE category_id = ");
            builder.push_bind(i64::from(category_id));
            has_where = true;
        }
        if let Some(published) = filter.published {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("is_published = ");
            builder.push_bind(published);
        }
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(concat!(
            "SELECT ",
            post_columns!(),
            " FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => hydrate_one(&self.pool, row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(concat!(
            "SELECT ",
            post_columns!(),
            " FROM posts WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => hydrate_one(&self.pool, row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::validation("page offset is out of range"))?;

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(concat!("SELECT ", post_columns!(), " FROM posts"));
        Self::apply_filter(&mut list_builder, filter);
        list_builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        list_builder.push_bind(i64::from(limit));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM posts");
        Self::apply_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = hydrate(&self.pool, rows).await?;
        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Post>> {
        let pattern = like_pattern(&fold(query));
        let rows = sqlx::query_as::<_, PostRow>(concat!(
            "SELECT ",
            post_columns!(),
            " FROM posts WHERE title_folded LIKE ?1 ESCAPE '\\' OR content_folded LIKE ?1 ESCAPE '\\'",
            " OR EXISTS (SELECT 1 FROM json_each(posts.tags_folded) WHERE json_each.value LIKE ?1 ESCAPE '\\')",
            " ORDER BY created_at DESC, id DESC LIMIT ?2"
        ))
        .bind(pattern)
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        hydrate(&self.pool, rows).await
    }

    async fn list_missing_slugs(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(concat!(
            "SELECT ",
            post_columns!(),
            " FROM posts WHERE slug IS NULL OR slug = '' ORDER BY id ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        hydrate(&self.pool, rows).await
    }

    async fn exists_in_category(&self, category_id: CategoryId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE category_id = ?)")
            .bind(i64::from(category_id))
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl SlugLookup for SqlitePostReadRepository {
    type Id = PostId;

    async fn slug_in_use(&self, slug: &Slug, exclude: Option<PostId>) -> DomainResult<bool> {
        let exclude = exclude.map(i64::from);
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug.as_str())
        .bind(exclude)
        .bind(exclude)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)
    }
}
