//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. The user store itself is an external
//! collaborator, reached only through [`UserResolver`].

pub mod link_repository;
pub mod user_resolver;

pub use link_repository::LinkRepository;
pub use user_resolver::UserResolver;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_resolver::MockUserResolver;
