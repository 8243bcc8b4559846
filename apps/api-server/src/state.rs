//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::{PasswordService, PostRepository, UserRepository};
use blog_core::service::{PostService, UserService};
use blog_infra::{connect, Argon2PasswordService, DatabaseConfig, SeaOrmPostRepository,
    SeaOrmUserRepository};

/// Shared application state: the two services, fully wired.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
}

impl AppState {
    /// Connect to the database and wire the services.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = connect(db_config).await?;

        let user_repo: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let post_repo: Arc<dyn PostRepository> = Arc::new(SeaOrmPostRepository::new(db));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        tracing::info!("Application state initialized");

        Ok(Self {
            users: UserService::new(user_repo.clone(), passwords),
            posts: PostService::new(post_repo, user_repo),
        })
    }
}
