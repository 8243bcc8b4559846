use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::apply_patch_fields;
use crate::error::FieldViolation;
use crate::update::{double_option, ApplyPatch};

/// User role. The field is stored and returned but no use case enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// User entity. The password is only ever held as an irreversible hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload for a user. The id and creation timestamp are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub birth_date: Option<NaiveDate>,
}

/// A user joined with the number of posts they own.
#[derive(Debug, Clone)]
pub struct UserWithPostCount {
    pub user: User,
    pub post_count: u64,
}

/// Request to create a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub birth_date: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();
        check_email(&self.email, &mut violations);
        check_password(&self.password, &mut violations);
        check_first_name(&self.first_name, &mut violations);
        check_last_name(&self.last_name, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Sparse update request for a user. Absent fields are left untouched;
/// `birth_date` may be set to an explicit `null` to clear it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub birth_date: Option<Option<NaiveDate>>,
}

impl UserPatch {
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();
        if let Some(email) = &self.email {
            check_email(email, &mut violations);
        }
        if let Some(password) = &self.password {
            check_password(password, &mut violations);
        }
        if let Some(first_name) = &self.first_name {
            check_first_name(first_name, &mut violations);
        }
        if let Some(last_name) = &self.last_name {
            check_last_name(last_name, &mut violations);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl ApplyPatch<User> for UserPatch {
    fn apply_to(&self, user: &mut User) {
        // The password is deliberately excluded: the service hashes it first.
        apply_patch_fields!(self, user, {
            email,
            first_name,
            last_name,
            role,
            is_active,
            birth_date,
        });
    }
}

// Field limits match the original API contract.
fn check_email(email: &str, violations: &mut Vec<FieldViolation>) {
    if email.is_empty() || !email.contains('@') {
        violations.push(FieldViolation::new("email", "must be a valid email address"));
    }
}

fn check_password(password: &str, violations: &mut Vec<FieldViolation>) {
    if password.chars().count() < 6 {
        violations.push(FieldViolation::new(
            "password",
            "must be at least 6 characters",
        ));
    }
}

fn check_first_name(first_name: &str, violations: &mut Vec<FieldViolation>) {
    if first_name.chars().count() < 3 {
        violations.push(FieldViolation::new(
            "first_name",
            "must be at least 3 characters",
        ));
    }
}

fn check_last_name(last_name: &str, violations: &mut Vec<FieldViolation>) {
    if last_name.chars().count() < 5 {
        violations.push(FieldViolation::new(
            "last_name",
            "must be at least 5 characters",
        ));
    }
}
