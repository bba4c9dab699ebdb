// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

use inkpost_core::application::ports::ClockPort;
use inkpost_core::application::services::ApplicationServices;
use inkpost_core::domain::category::{CategoryId, CategoryReadRepository, CategoryWriteRepository};
use inkpost_core::domain::post::{PostId, PostReadRepository, PostWriteRepository};
use inkpost_core::domain::slug::SlugLookup;
use inkpost_core::infrastructure::{database, wiring};
use inkpost_core::presentation::http::{routes::build_router_with_origins, state::HttpState};

use super::mocks::{FixedClock, InMemoryCategories, InMemoryPosts};

/// モックストア上に組み立てたサービス群と、その背後のストア
pub struct MemoryFixture {
    pub services: ApplicationServices,
    pub categories: Arc<InMemoryCategories>,
    pub posts: Arc<InMemoryPosts>,
}

pub fn memory_services() -> MemoryFixture {
    let categories = Arc::new(InMemoryCategories::new());
    let posts = Arc::new(InMemoryPosts::new());
    let clock: Arc<ClockPort> = Arc::new(FixedClock);

    let category_write: Arc<dyn CategoryWriteRepository> = categories.clone();
    let category_read: Arc<dyn CategoryReadRepository> = categories.clone();
    let category_lookup: Arc<dyn SlugLookup<Id = CategoryId>> = categories.clone();
    let post_write: Arc<dyn PostWriteRepository> = posts.clone();
    let post_read: Arc<dyn PostReadRepository> = posts.clone();
    let post_lookup: Arc<dyn SlugLookup<Id = PostId>> = posts.clone();

    let services = ApplicationServices::new(
        category_write,
        category_read,
        category_lookup,
        post_write,
        post_read,
        post_lookup,
        clock,
    );

    MemoryFixture {
        services,
        categories,
        posts,
    }
}

/// マイグレーション適用済みのインメモリ SQLite プール
pub async fn sqlite_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(pool)
}

pub async fn sqlite_services() -> (ApplicationServices, Arc<SqlitePool>) {
    let pool = sqlite_pool().await;
    let clock: Arc<ClockPort> = Arc::new(FixedClock);
    (wiring::sqlite_services(Arc::clone(&pool), clock), pool)
}

pub async fn make_test_router() -> axum::Router {
    let (services, _pool) = sqlite_services().await;
    let state = HttpState {
        services: Arc::new(services),
    };
    build_router_with_origins(state, &["*".to_string()])
}

/// JSON リクエストを送り、ステータスと JSON ボディを返す
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

/// 生のボディをそのまま送る。壊れた JSON や Content-Type 欠落の確認用
pub async fn send_raw(
    app: &axum::Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    payload: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(payload.to_string())).unwrap();
    send_request(app, request).await
}

async fn send_request(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub fn assert_error_body(status: StatusCode, body: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    let err_field = body.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = body.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
