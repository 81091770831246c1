//! Blog API endpoints.
//!
//! The router is mounted under a prefix chosen by the application.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use super::{created, success, ApiResult};
use crate::models::{Blog, CreateBlogRequest};
use crate::AppState;

/// Routes for listing and creating blog posts, relative to their mount point.
pub fn blog_router() -> Router<AppState> {
    Router::new().route("/", get(list_blogs).post(create_blog))
}

/// GET / - List all blog posts.
pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<Vec<Blog>> {
    let blogs = state.repo.list_blogs().await?;
    success(blogs)
}

/// POST / - Create a new blog post.
pub async fn create_blog(
    State(state): State<AppState>,
    body: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> ApiResult<Blog> {
    let Json(request) = body?;
    let blog = state.repo.create_blog(&request).await?;
    created(blog)
}
