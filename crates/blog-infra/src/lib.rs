//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! SeaORM/Postgres repositories and the Argon2 password service.

pub mod auth;
pub mod database;

pub use auth::Argon2PasswordService;
pub use database::{connect, DatabaseConfig, SeaOrmPostRepository, SeaOrmUserRepository};
