//! Bearer-token providers for authenticated endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Token issuance lives elsewhere; the admin only reads whatever token the
//! login flow persisted. `HttpApi` receives a provider at construction so no
//! call site reads browser storage directly.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// Storage key the login flow writes the session token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Source of the bearer token attached to moderation requests.
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` to send the request unauthenticated.
    fn bearer_token(&self) -> Option<String>;
}

/// Reads the token from `localStorage` on every call.
#[derive(Clone, Debug)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageCredentials {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn bearer_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.key;
            None
        }
    }
}

/// Fixed token, used outside the browser.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials(pub Option<String>);

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Format an `Authorization` header value.
pub fn authorization_header(provider: &dyn CredentialProvider) -> Option<String> {
    provider.bearer_token().map(|token| format!("Bearer {token}"))
}
