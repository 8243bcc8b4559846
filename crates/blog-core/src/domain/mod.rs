//! Domain entities - the core business objects.

mod post;

mod user;

pub use post::{CreatePost, Post, PostPatch};
pub use user::{CreateUser, NewUser, Role, UnknownRole, User, UserPatch, UserWithPostCount};
