//! # Shortlink Store
//!
//! Data-access layer persisting short link mappings in a document database
//! (Cosmos DB via its MongoDB-compatible API).
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB/Cosmos integration
//!
//! It is a library layer consumed by a higher-level service: there is no HTTP
//! surface and no CLI. User persistence is an external collaborator reached
//! through the [`domain::repositories::UserResolver`] trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shortlink_store::config;
//! use shortlink_store::domain::repositories::{LinkRepository, UserResolver};
//! use shortlink_store::infrastructure::persistence::{CosmosLinkRepository, LinkStore};
//!
//! async fn build(users: Arc<dyn UserResolver>) -> anyhow::Result<impl LinkRepository> {
//!     let config = config::load_from_env()?;
//!     let store = LinkStore::shared(&config).await?;
//!     Ok(CosmosLinkRepository::new(store.collection(), users))
//! }
//! ```
//!
//! ## Configuration
//!
//! Connection settings are loaded from environment variables via
//! [`config::StoreConfig`]. See the [`config`] module for available options.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::{StoreConfig, load_from_env};
    pub use crate::domain::entities::{Link, NewLink, SimpleUser};
    pub use crate::domain::repositories::{LinkRepository, UserResolver};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{CosmosLinkRepository, LinkStore};
}
