//! Database connection management and SeaORM repositories.

mod base;
mod connection;
pub mod entity;
mod repos;

pub use connection::{connect, DatabaseConfig};
pub use repos::{SeaOrmPostRepository, SeaOrmUserRepository};
