//! Connection bootstrap for the link document store.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use serde_json::json;
use tokio::sync::OnceCell;

use crate::config::StoreConfig;
use crate::error::{AppError, map_db_error};
use crate::infrastructure::persistence::LinkDocument;

/// Handle to the `links` collection, created on demand.
///
/// Connecting ensures the target database and collection exist (idempotent)
/// and that the `mapping` uniqueness index is in place. The handle is cheap
/// to clone and safe for concurrent use; the driver owns connection pooling.
/// There is no teardown: the handle lives for the process lifetime.
pub struct LinkStore {
    collection: Collection<LinkDocument>,
}

impl LinkStore {
    /// Connects to the store and ensures the collection exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the endpoint URI cannot be
    /// parsed, [`AppError::Internal`] on any driver failure.
    pub async fn connect(config: &StoreConfig) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(&config.endpoint).await.map_err(|e| {
            AppError::configuration(
                "Invalid COSMOS_ENDPOINT",
                json!({ "source": e.to_string() }),
            )
        })?;

        // Cosmos authenticates with the account name and key unless the URI
        // already embeds credentials.
        if options.credential.is_none() {
            options.credential = Some(
                Credential::builder()
                    .username(config.account_name().map(str::to_string))
                    .password(config.key.clone())
                    .build(),
            );
        }

        let client = Client::with_options(options).map_err(map_db_error)?;
        Self::bootstrap(client, &config.database_name, &config.container_name).await
    }

    /// Ensures the collection and its indexes exist over an already
    /// connected client.
    ///
    /// Used by [`connect`](Self::connect) after credential wiring; also the
    /// entry point for callers that manage their own [`Client`] (e.g. a
    /// local store without Cosmos authentication). Idempotent: re-running it
    /// against an existing collection is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any driver failure.
    pub async fn bootstrap(
        client: Client,
        database_name: &str,
        container_name: &str,
    ) -> Result<Self, AppError> {
        let database = client.database(database_name);

        if let Err(e) = database.create_collection(container_name).await
            && !is_namespace_exists(&e)
        {
            return Err(map_db_error(e));
        }

        let collection = database.collection::<LinkDocument>(container_name);

        // `mapping` is the natural key; `email` backs the list-by-owner query
        // (the store partitions documents by owner email).
        let mapping_index = IndexModel::builder()
            .keys(doc! { "mapping": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let email_index = IndexModel::builder().keys(doc! { "email": 1 }).build();
        collection
            .create_indexes([mapping_index, email_index])
            .await?;

        tracing::info!(
            database = %database_name,
            container = %container_name,
            "link store ready"
        );

        Ok(Self { collection })
    }

    /// Returns the process-wide store, connecting on first use.
    ///
    /// Concurrent first callers are serialized so the collection-creation
    /// sequence runs at most once. A failed attempt leaves the cell empty,
    /// and the next caller retries.
    pub async fn shared(config: &StoreConfig) -> Result<&'static LinkStore, AppError> {
        static STORE: OnceCell<LinkStore> = OnceCell::const_new();
        STORE.get_or_try_init(|| LinkStore::connect(config)).await
    }

    /// Collection handle for building repositories.
    pub fn collection(&self) -> Collection<LinkDocument> {
        self.collection.clone()
    }
}

/// The create-if-absent race loser sees `NamespaceExists` (code 48).
fn is_namespace_exists(e: &mongodb::error::Error) -> bool {
    matches!(*e.kind, mongodb::error::ErrorKind::Command(ref c) if c.code == 48)
}
