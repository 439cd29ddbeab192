// tests/support/mocks/identity.rs
use async_trait::async_trait;
use lead_magnet_api::application::{
    ApplicationResult, dto::CallerIdentity, ports::identity::IdentityProvider,
};
use lead_magnet_api::domain::user::UserId;

pub const USER_1: &str = "user_1";
pub const USER_2: &str = "user_2";
pub const USER_1_TOKEN: &str = "token-user_1";
pub const USER_2_TOKEN: &str = "token-user_2";

/// Accepts `token-<user id>` credentials; everything else is unknown.
pub struct StaticIdentityProvider;

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve_current_user(
        &self,
        credential: &str,
    ) -> ApplicationResult<Option<CallerIdentity>> {
        let Some(user_id) = credential.strip_prefix("token-") else {
            return Ok(None);
        };
        Ok(Some(CallerIdentity::new(UserId::new(user_id)?)))
    }
}
