//! User endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use blog_core::domain::{CreateUser, UserPatch};
use blog_core::error::{DomainError, FieldViolation};
use blog_shared::dto::{UserListResponse, UserResponse};
use blog_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    page: Option<u64>,
    limit: Option<u64>,
    search: Option<String>,
}

/// POST /api/v1/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUser>,
) -> AppResult<HttpResponse> {
    let user = state.users.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User created successfully",
        UserResponse::from(user),
    )))
}

/// GET /api/v1/users?page=&limit=&search=
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<ListUsersQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);
    check_page_params(page, limit)?;

    // An empty search string means no filter.
    let search = query.search.as_deref().filter(|s| !s.is_empty());
    let users = state.users.list(page, limit, search).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Users retrieved successfully",
        UserListResponse::from(users),
    )))
}

/// GET /api/v1/users/{user_id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User retrieved successfully",
        UserResponse::from(user),
    )))
}

/// PUT /api/v1/users/{user_id} - sparse body, partial-update semantics.
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserPatch>,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User updated successfully",
        UserResponse::from(user),
    )))
}

/// DELETE /api/v1/users/{user_id}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.users.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn check_page_params(page: u64, limit: u64) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    if page == 0 {
        violations.push(FieldViolation::new("page", "must be at least 1"));
    }
    if limit == 0 {
        violations.push(FieldViolation::new("limit", "must be at least 1"));
    }
    if limit > MAX_PAGE_SIZE {
        violations.push(FieldViolation::new("limit", "must be at most 100"));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(violations))
    }
}
