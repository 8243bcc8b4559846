//! Use-case services orchestrating repositories, pagination and the error
//! taxonomy. Services hold their collaborators behind ports, so the HTTP
//! layer and the tests can inject whatever implementation they need.

mod post;
mod user;

pub use post::PostService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod testutil;
