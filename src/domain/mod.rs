//! Domain layer containing business entities and data-access contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the infrastructure layer; repository
//! traits defined here are implemented in `crate::infrastructure`.

pub mod entities;
pub mod repositories;
