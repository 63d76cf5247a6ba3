//! Ambient session state consulted during resolution.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The account record a session serves as "currently active".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Numeric account id.
    pub aid: u64,
    /// Human-readable account name.
    pub name: String,
}

impl Account {
    /// Creates a new account record.
    #[must_use]
    pub fn new(aid: u64, name: impl Into<String>) -> Self {
        Self {
            aid,
            name: name.into(),
        }
    }
}

/// Read-only view of the host's session state.
///
/// The resolver consults the session on every call instead of holding a
/// process-wide active-account slot, so resolution is a pure function of
/// `(locator, session)` and can be exercised with fabricated sessions.
/// Implementations may perform secure-storage I/O behind `access_token`.
#[async_trait]
pub trait SessionContext: Send + Sync {
    /// Returns the currently active account, if one is selected.
    async fn active_account(&self) -> Option<Account>;

    /// Returns the access token stored for an account, if any.
    async fn access_token(&self, aid: u64) -> Option<String>;
}

/// An in-memory session with a fixed active account and token table.
///
/// # Examples
///
/// ```
/// use lytics_uri::{Account, StaticSession};
///
/// let session = StaticSession::new(Account::new(55, "acme"))
///     .with_token(55, "tok-abc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    active: Option<Account>,
    tokens: HashMap<u64, String>,
}

impl StaticSession {
    /// Creates a session with the given active account and no tokens.
    #[must_use]
    pub fn new(active: Account) -> Self {
        Self {
            active: Some(active),
            tokens: HashMap::new(),
        }
    }

    /// Creates a session with no active account.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Adds an access token for an account.
    #[must_use]
    pub fn with_token(mut self, aid: u64, token: impl Into<String>) -> Self {
        self.tokens.insert(aid, token.into());
        self
    }
}

#[async_trait]
impl SessionContext for StaticSession {
    async fn active_account(&self) -> Option<Account> {
        self.active.clone()
    }

    async fn access_token(&self, aid: u64) -> Option<String> {
        self.tokens.get(&aid).cloned()
    }
}
