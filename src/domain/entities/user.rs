//! Simplified user view embedded in link mappings.

/// Non-sensitive projection of a user record.
///
/// This is the only shape of user data this crate ever holds: the owning
/// user's full record (credentials, settings) lives behind the
/// [`crate::domain::repositories::UserResolver`] boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleUser {
    pub email: String,
    pub name: String,
}

impl SimpleUser {
    /// Creates a new simplified user view.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}
