// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        AddCommentCommand, CreatePostCommand, DeletePostCommand, UpdatePostCommand,
        ViewPostCommand,
    },
    dto::{CommentDto, PostDto, PostPageDto},
    queries::posts::{ListPostsQuery, SearchPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostSearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub author_id: i64,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub author_id: i64,
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Page of posts, newest first.", body = PostPageDto),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostPageDto>> {
    let query = ListPostsQuery {
        page: params.page,
        limit: params.limit,
        category_id: params.category_id,
        published: params.published,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/search",
    params(PostSearchParams),
    responses(
        (status = 200, description = "Posts whose title, content or tags contain the query.", body = [PostDto]),
        (status = 400, description = "Blank query.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostSearchParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .search_posts(SearchPostsQuery {
            query: params.q,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The post. Counts as one view.", body = PostDto),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn view_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .view_post(ViewPostCommand::ById(id))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post. Counts as one view.", body = PostDto),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn view_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .view_post(ViewPostCommand::BySlug(slug))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created with a unique slug.", body = PostDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        category_id: payload.category_id,
        author_id: payload.author_id,
        excerpt: payload.excerpt,
        featured_image: payload.featured_image,
        tags: payload.tags,
        is_published: payload.is_published,
    };

    let created = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated. A new title recomputes the slug.", body = PostDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        featured_image: payload.featured_image,
        category_id: payload.category_id,
        tags: payload.tags,
        is_published: payload.is_published,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post and its comments deleted.", body = StatusResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = AddCommentCommand {
        post_id: id,
        author_id: payload.author_id,
        content: payload.content,
    };

    let comment = state
        .services
        .post_commands
        .add_comment(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}
