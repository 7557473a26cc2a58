//! Repository trait for link mapping data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link mappings.
///
/// A mapping is immutable once created: there is deliberately no update or
/// rename operation. Lookups are by the short `mapping` code; listing is by
/// the owning user's email.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CosmosLinkRepository`] - MongoDB/Cosmos implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link mapping and returns the stored record.
    ///
    /// The returned [`Link`] is re-read from the store after the write is
    /// acknowledged, not echoed from the input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the write is not acknowledged or on
    /// database errors (including a duplicate `mapping`).
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns whether a mapping exists.
    ///
    /// Cheap existence probe: the owning user is not resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, mapping: &str) -> Result<bool, AppError>;

    /// Fetches a link mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no document has that mapping.
    /// Returns [`AppError::Internal`] if the stored document is malformed or
    /// on database errors.
    async fn find_by_mapping(&self, mapping: &str) -> Result<Link, AppError>;

    /// Lists all link mappings owned by the given email.
    ///
    /// An owner with zero links yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the query fails or any returned
    /// document is malformed.
    async fn list_by_owner(&self, email: &str) -> Result<Vec<Link>, AppError>;

    /// Deletes a mapping by its short code.
    ///
    /// Returns `Ok(true)` if exactly one document was removed, `Ok(false)` if
    /// nothing matched. Deleting an absent mapping is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, mapping: &str) -> Result<bool, AppError>;
}
