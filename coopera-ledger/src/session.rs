//! Session capability: who is looking at the account, with what credential.

/// Read-only access to the active session. Implementations may load a file
/// once, hit a keychain, or be a test fixture; the services don't care.
pub trait SessionAccess {
    /// The account whose history is being viewed, if a session is active.
    fn account_id(&self) -> Option<String>;

    /// Bearer credential for the ledger service, if one is stored.
    fn token(&self) -> Option<String>;
}

/// Fixed in-memory session, mainly for tests and one-shot tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub account_id: Option<String>,
    pub token: Option<String>,
}

impl StaticSession {
    pub fn new(account_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            token: Some(token.into()),
        }
    }
}

impl SessionAccess for StaticSession {
    fn account_id(&self) -> Option<String> {
        self.account_id.clone()
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
