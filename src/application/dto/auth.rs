use crate::domain::user::UserId;

/// The caller as resolved by the identity provider for the current request.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub id: UserId,
}

impl CallerIdentity {
    pub const fn new(id: UserId) -> Self {
        Self { id }
    }
}
