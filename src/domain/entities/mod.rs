//! Core business data structures.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::SimpleUser;
