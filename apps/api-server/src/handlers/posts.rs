//! Post endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use blog_core::domain::{CreatePost, PostPatch};
use blog_shared::dto::{PostListResponse, PostResponse};
use blog_shared::ApiResponse;

use super::users::check_page_params;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePostQuery {
    user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    skip: Option<u64>,
    limit: Option<u64>,
}

/// POST /api/v1/posts?user_id=
pub async fn create_post(
    state: web::Data<AppState>,
    query: web::Query<CreatePostQuery>,
    body: web::Json<CreatePost>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(query.user_id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Post created successfully",
        PostResponse::from(post),
    )))
}

/// GET /api/v1/posts?skip=&limit= - skip-mode pagination.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(10);
    check_page_params(1, limit)?;

    let posts = state.posts.list(skip, limit).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Posts retrieved successfully",
        PostListResponse::from(posts),
    )))
}

/// GET /api/v1/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Post retrieved successfully",
        PostResponse::from(post),
    )))
}

/// PUT /api/v1/posts/{post_id} - sparse body, partial-update semantics.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Post updated successfully",
        PostResponse::from(post),
    )))
}

/// DELETE /api/v1/posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Post deleted successfully")))
}
