//! # Blog Shared
//!
//! The API contract: the response envelope and the public projections of the
//! domain entities. Everything a client sees is defined here.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ApiStatus, FieldError};
