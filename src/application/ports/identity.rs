// src/application/ports/identity.rs
use crate::application::{ApplicationResult, dto::CallerIdentity};
use async_trait::async_trait;

/// Adapter for the third-party identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller behind a bearer credential.
    ///
    /// Returns `Ok(None)` for credentials the provider does not accept (expired,
    /// forged, malformed). `Err` is reserved for the provider itself failing.
    async fn resolve_current_user(&self, credential: &str)
    -> ApplicationResult<Option<CallerIdentity>>;
}
