use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, Post, User, UserWithPostCount};
use crate::error::RepoError;

/// User repository. Listings are ordered by id descending (most recent first).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// One page of users, each joined with the number of posts they own.
    /// `search` is a case-insensitive substring match OR-ed across
    /// first name, last name and email. A single aggregate join supplies the
    /// post counts; no per-user queries.
    async fn list_with_post_count(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<UserWithPostCount>, RepoError>;

    /// Total users matching the same search filter as `list_with_post_count`.
    async fn count(&self, search: Option<&str>) -> Result<u64, RepoError>;

    /// Insert a new user; the store assigns id and creation timestamp.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    /// Persist a modified user.
    async fn update(&self, user: User) -> Result<User, RepoError>;

    /// Delete a user. Owned posts are removed by the store's cascade.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Post repository. Listings keep the store's insertion order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// One page of posts.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Posts owned by a user. Relationship traversal is always this explicit
    /// call; there is no lazy loading across the repository boundary.
    async fn list_by_user(&self, user_id: i32, offset: u64, limit: u64)
        -> Result<Vec<Post>, RepoError>;

    /// Total number of posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Insert a new post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Persist a modified post.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
