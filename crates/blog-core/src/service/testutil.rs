//! In-memory fakes backing the service tests.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewUser, Post, User, UserWithPostCount};
use crate::error::RepoError;
use crate::ports::{PasswordError, PasswordService, PostRepository, UserRepository};

/// In-memory user and post store. Mirrors the relational semantics the
/// services rely on, including cascade delete of owned posts.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
    next_user_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
            next_user_id: AtomicI32::new(1),
        }
    }

    fn matches(user: &User, search: &str) -> bool {
        let term = search.to_lowercase();
        user.first_name.to_lowercase().contains(&term)
            || user.last_name.to_lowercase().contains(&term)
            || user.email.to_lowercase().contains(&term)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list_with_post_count(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<UserWithPostCount>, RepoError> {
        let posts = self.posts.lock().unwrap();
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| search.is_none_or(|term| Self::matches(u, term)))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(users
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|user| {
                let post_count = posts.iter().filter(|p| p.user_id == user.id).count() as u64;
                UserWithPostCount { user, post_count }
            })
            .collect())
    }

    async fn count(&self, search: Option<&str>) -> Result<u64, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| search.is_none_or(|term| Self::matches(u, term)))
            .count() as u64)
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("Email is already registered".to_string()));
        }
        let user = User {
            id: self.next_user_id.fetch_add(1, Ordering::SeqCst),
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
            birth_date: user.birth_date,
            created_at: Utc::now(),
            updated_at: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(RepoError::NotFound);
        }
        // FK cascade.
        self.posts.lock().unwrap().retain(|p| p.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.lock().unwrap().len() as u64)
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// Deterministic hasher so tests can assert the clear text never leaks.
pub struct FakeHasher;

impl PasswordService for FakeHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(format!("$fake${password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        Ok(hash == format!("$fake${password}"))
    }
}
