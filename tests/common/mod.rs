#![allow(dead_code)]

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::{Client, Collection};
use std::sync::Arc;

use shortlink_store::domain::entities::SimpleUser;
use shortlink_store::domain::repositories::UserResolver;
use shortlink_store::error::AppError;
use shortlink_store::infrastructure::persistence::{CosmosLinkRepository, LinkDocument, LinkStore};

pub const TEST_DATABASE: &str = "shortlink_store_tests";

/// Stand-in for the external user store: resolves every email to a user
/// whose display name is the local part of the address.
pub struct StubUserResolver;

#[async_trait]
impl UserResolver for StubUserResolver {
    async fn resolve_user(&self, email: &str) -> Result<SimpleUser, AppError> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(SimpleUser::new(email, name))
    }
}

/// Returns `None` when `COSMOS_TEST_URI` is not set, so the suite can run
/// without a live database.
async fn test_client() -> Option<Client> {
    let uri = std::env::var("COSMOS_TEST_URI").ok()?;
    Client::with_uri_str(&uri).await.ok()
}

/// Drops any leftover collection and bootstraps a fresh one through
/// [`LinkStore`], so tests run against the real indexes.
pub async fn test_store(name: &str) -> Option<LinkStore> {
    let client = test_client().await?;
    client
        .database(TEST_DATABASE)
        .collection::<LinkDocument>(name)
        .drop()
        .await
        .ok();
    let store = LinkStore::bootstrap(client, TEST_DATABASE, name)
        .await
        .expect("store bootstrap failed");
    Some(store)
}

/// Bootstraps again without dropping, as a second process would.
pub async fn rebootstrap(name: &str) -> Option<LinkStore> {
    let client = test_client().await?;
    let store = LinkStore::bootstrap(client, TEST_DATABASE, name)
        .await
        .expect("store bootstrap failed");
    Some(store)
}

/// Freshly bootstrapped collection handle.
pub async fn test_collection(name: &str) -> Option<Collection<LinkDocument>> {
    Some(test_store(name).await?.collection())
}

/// Untyped handle to the same collection, for planting malformed documents.
pub fn raw_collection(collection: &Collection<LinkDocument>) -> Collection<Document> {
    collection.clone_with_type::<Document>()
}

pub fn repository(collection: Collection<LinkDocument>) -> CosmosLinkRepository {
    CosmosLinkRepository::new(collection, Arc::new(StubUserResolver))
}
