//! MongoDB/Cosmos repository implementation.
//!
//! Concrete implementation of the domain repository trait over the MongoDB
//! driver (Cosmos DB's Mongo-compatible API).
//!
//! - [`LinkStore`] - connection bootstrap and collection handle
//! - [`CosmosLinkRepository`] - link mapping storage and retrieval

pub mod cosmos_link_repository;
pub mod store;

pub use cosmos_link_repository::{CosmosLinkRepository, LinkDocument};
pub use store::LinkStore;
