//! The read-only auth capability injected into the client.
//!
//! Authentication itself lives elsewhere; the client only consumes a
//! [`Session`] handed to it at construction. It is never mutated by the
//! client and carries no refresh or login logic.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<CurrentUser>,
    /// Bearer token attached to every request when present.
    pub token: Option<String>,
}

impl Session {
    /// A session with no identity; requests go out unauthenticated.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            user: None,
            token: Some(token.into()),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
