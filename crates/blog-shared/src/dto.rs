//! Public projections of the domain entities.
//!
//! The password hash never appears in any of these types.

use blog_core::domain::{Post, Role, User, UserWithPostCount};
use blog_core::pagination::Paginated;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
            birth_date: user.birth_date,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Listing row: display name, email, creation time and owned-post count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListItem {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub posts_count: u64,
}

impl From<UserWithPostCount> for UserListItem {
    fn from(row: UserWithPostCount) -> Self {
        Self {
            id: row.user.id,
            name: format!("{} {}", row.user.first_name, row.user.last_name),
            email: row.user.email,
            created_at: row.user.created_at.to_rfc3339(),
            posts_count: row.post_count,
        }
    }
}

/// Payload of `GET /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserListItem>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl From<Paginated<UserWithPostCount>> for UserListResponse {
    fn from(page: Paginated<UserWithPostCount>) -> Self {
        Self {
            users: page.items.into_iter().map(UserListItem::from).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// Public view of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub views: i32,
    pub rating: Option<f64>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub event_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            views: post.views,
            rating: post.rating,
            published: post.published,
            published_at: post.published_at,
            event_date: post.event_date,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Payload of `GET /api/v1/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl From<Paginated<Post>> for PostListResponse {
    fn from(page: Paginated<Post>) -> Self {
        Self {
            posts: page.items.into_iter().map(PostResponse::from).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}
