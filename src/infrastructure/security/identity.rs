// src/infrastructure/security/identity.rs
use crate::application::{
    dto::CallerIdentity,
    error::{ApplicationError, ApplicationResult},
    ports::identity::IdentityProvider,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, PublicKey,
    builder::{Algorithm, AuthorizerBuilder},
};

use super::claims::{USER_QUERY, caller_from_subjects};

/// Verifies Ed25519-signed biscuit tokens minted by the identity provider.
///
/// Tokens are expected to carry a `user("<id>")` fact and their own expiry
/// checks (`check if time($now), $now <= <exp>`); the authorizer supplies the
/// current time so those checks are enforced here.
#[derive(Clone)]
pub struct BiscuitIdentityProvider {
    public: PublicKey,
}

impl BiscuitIdentityProvider {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { public })
    }

    pub const fn from_public_key(public: PublicKey) -> Self {
        Self { public }
    }

    fn verify(&self, token: &str) -> ApplicationResult<CallerIdentity> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($id);")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let subjects: Vec<(String,)> = authorizer
            .query(USER_QUERY)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        caller_from_subjects(subjects)
    }
}

#[async_trait]
impl IdentityProvider for BiscuitIdentityProvider {
    async fn resolve_current_user(
        &self,
        credential: &str,
    ) -> ApplicationResult<Option<CallerIdentity>> {
        match self.verify(credential) {
            Ok(caller) => Ok(Some(caller)),
            Err(ApplicationError::Unauthorized(reason)) => {
                tracing::debug!(%reason, "identity token rejected");
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }
}
