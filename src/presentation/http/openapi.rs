// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::get_category_by_slug,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::search_posts,
        crate::presentation::http::controllers::posts::view_post,
        crate::presentation::http::controllers::posts::view_post_by_slug,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::add_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::AddCommentRequest,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryListDto,
            crate::application::dto::PostDto,
            crate::application::dto::PostPageDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Categories", description = "Category management endpoints"),
        (name = "Posts", description = "Post, comment and search endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Inkpost API",
        description = "Blog backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
