//! MongoDB/Cosmos implementation of the link repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use futures::future::try_join_all;
use mongodb::Collection;
use mongodb::bson::{Bson, doc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, UserResolver};
use crate::error::AppError;

/// Raw persisted shape of a link mapping document.
///
/// Fields default to empty on deserialization so that a document missing a
/// required field surfaces as an integrity error, not a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDocument {
    #[serde(default)]
    pub mapping: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub email: String,
}

impl LinkDocument {
    /// Rejects documents that violate the required shape.
    ///
    /// Every stored record must carry a non-empty `mapping`, `link`, and
    /// `email`; anything else is corrupt.
    fn require_valid(self) -> Result<Self, AppError> {
        if self.mapping.is_empty() || self.link.is_empty() || self.email.is_empty() {
            return Err(AppError::internal(
                "Invalid link document.",
                json!({
                    "mapping": self.mapping,
                    "has_link": !self.link.is_empty(),
                    "has_email": !self.email.is_empty(),
                }),
            ));
        }
        Ok(self)
    }
}

/// Materializes a stored document into a [`Link`], resolving the owner.
async fn resolve_link(
    document: LinkDocument,
    users: &dyn UserResolver,
) -> Result<Link, AppError> {
    let document = document.require_valid()?;
    let user = users.resolve_user(&document.email).await?;
    Ok(Link::new(document.mapping, document.link, user))
}

/// MongoDB/Cosmos repository for link mapping storage and retrieval.
///
/// Holds a shared collection handle (the driver pools connections
/// internally) and an injected [`UserResolver`] for materializing owners on
/// the read path. One network round trip per operation; no transactions.
pub struct CosmosLinkRepository {
    collection: Collection<LinkDocument>,
    users: Arc<dyn UserResolver>,
}

impl CosmosLinkRepository {
    /// Creates a new repository over an existing collection handle.
    pub fn new(collection: Collection<LinkDocument>, users: Arc<dyn UserResolver>) -> Self {
        Self { collection, users }
    }
}

#[async_trait]
impl LinkRepository for CosmosLinkRepository {
    #[instrument(skip(self))]
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let document = LinkDocument {
            mapping: new_link.mapping.clone(),
            link: new_link.link,
            email: new_link.email,
        };

        let result = self.collection.insert_one(&document).await?;
        if matches!(result.inserted_id, Bson::Null) {
            return Err(AppError::internal(
                "Could not create link mapping.",
                json!({ "mapping": new_link.mapping }),
            ));
        }

        // Round-trip read so the caller sees exactly what was stored.
        self.find_by_mapping(&new_link.mapping).await
    }

    #[instrument(skip(self))]
    async fn exists(&self, mapping: &str) -> Result<bool, AppError> {
        let found = self.collection.find_one(doc! { "mapping": mapping }).await?;
        Ok(found.is_some())
    }

    #[instrument(skip(self))]
    async fn find_by_mapping(&self, mapping: &str) -> Result<Link, AppError> {
        match self.collection.find_one(doc! { "mapping": mapping }).await? {
            Some(document) => resolve_link(document, self.users.as_ref()).await,
            None => Err(AppError::not_found(
                "Link mapping not found.",
                json!({ "mapping": mapping }),
            )),
        }
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, email: &str) -> Result<Vec<Link>, AppError> {
        let documents: Vec<LinkDocument> = self
            .collection
            .find(doc! { "email": email })
            .await?
            .try_collect()
            .await?;

        // Owner lookups are independent and read-only; run them concurrently.
        try_join_all(
            documents
                .into_iter()
                .map(|document| resolve_link(document, self.users.as_ref())),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, mapping: &str) -> Result<bool, AppError> {
        let result = self.collection.delete_one(doc! { "mapping": mapping }).await?;
        Ok(result.deleted_count == 1)
    }
}
