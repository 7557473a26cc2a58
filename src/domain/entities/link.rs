//! Link entity representing a short code mapped to a destination URL.

use crate::domain::entities::SimpleUser;

/// A link mapping materialized from the store.
///
/// The `mapping` short code is the natural key; `user` is the owner's
/// simplified view, resolved before the entity is constructed. There is no
/// way to build a `Link` without an owner.
#[derive(Debug, Clone)]
pub struct Link {
    pub mapping: String,
    pub link: String,
    pub user: SimpleUser,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(mapping: String, link: String, user: SimpleUser) -> Self {
        Self {
            mapping,
            link,
            user,
        }
    }

    /// Email of the owning user.
    pub fn owner_email(&self) -> &str {
        &self.user.email
    }
}

/// Input data for creating a new link mapping.
///
/// Carries the raw owner email rather than a resolved user: resolution
/// happens on the read path, after the write is acknowledged.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub mapping: String,
    pub link: String,
    pub email: String,
}

impl NewLink {
    pub fn new(
        mapping: impl Into<String>,
        link: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            mapping: mapping.into(),
            link: link.into(),
            email: email.into(),
        }
    }
}
