use std::sync::Arc;

use chrono::Utc;

use crate::domain::{CreateUser, NewUser, User, UserPatch, UserWithPostCount};
use crate::error::DomainError;
use crate::pagination::{PageRequest, Paginated};
use crate::ports::{PasswordService, UserRepository};
use crate::update::ApplyPatch;

/// User use cases: create, get, list with search, partial update, delete.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Create a user. The email must not be taken; the password is hashed
    /// before anything is persisted. The unique index on email backs up this
    /// pre-insert check, so a losing racer still gets a 409.
    pub async fn create(&self, req: CreateUser) -> Result<User, DomainError> {
        req.validate().map_err(DomainError::Validation)?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(DomainError::Duplicate(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = self.passwords.hash(&req.password)?;
        let user = self
            .users
            .insert(NewUser {
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                role: req.role,
                is_active: req.is_active,
                birth_date: req.birth_date,
            })
            .await?;
        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Page-mode listing with optional substring search across first name,
    /// last name and email. Each item carries the owned-post count.
    pub async fn list(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<Paginated<UserWithPostCount>, DomainError> {
        let request = PageRequest::from_page(page, limit);
        let items = self
            .users
            .list_with_post_count(search, request.offset, request.limit)
            .await?;
        let total_items = self.users.count(search).await?;
        Ok(Paginated::new(items, request, total_items))
    }

    /// Partial update: only the fields present in the patch are overwritten.
    /// A provided password is re-hashed, never written as received.
    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<User, DomainError> {
        patch.validate().map_err(DomainError::Validation)?;

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        patch.apply_to(&mut user);
        if let Some(password) = &patch.password {
            user.password_hash = self.passwords.hash(password)?;
        }
        user.updated_at = Some(Utc::now());

        Ok(self.users.update(user).await?)
    }

    /// Delete a user; the store cascades to owned posts.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        self.users.delete(id).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound(format!("User with id {id} does not exist"))
}
