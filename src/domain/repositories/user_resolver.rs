//! Boundary to the external user store.

use crate::domain::entities::SimpleUser;
use crate::error::AppError;
use async_trait::async_trait;

/// Resolves an owner email into a simplified user view.
///
/// User persistence lives in a separate component; this crate only needs the
/// non-sensitive projection to embed in returned [`crate::domain::entities::Link`]s.
/// Injected into the repository so tests can substitute a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserResolver: Send + Sync {
    /// Fetches the user record for `email` and projects it to a [`SimpleUser`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that email, or
    /// [`AppError::Internal`] on lookup failures.
    async fn resolve_user(&self, email: &str) -> Result<SimpleUser, AppError>;
}
