// src/infrastructure/security/claims.rs
use crate::application::{
    dto::CallerIdentity,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

/// Datalog rule extracting the subject from a verified token.
pub const USER_QUERY: &str = "subject($id) <- user($id)";

/// Turn the `user($id)` facts of a verified token into a caller.
///
/// Exactly one distinct subject is accepted; zero or several is a malformed token.
pub fn caller_from_subjects(subjects: Vec<(String,)>) -> ApplicationResult<CallerIdentity> {
    let mut ids = subjects.into_iter().map(|(id,)| id);
    let first = ids
        .next()
        .ok_or_else(|| ApplicationError::unauthorized("token carries no user"))?;
    if ids.any(|other| other != first) {
        return Err(ApplicationError::unauthorized(
            "token carries more than one user",
        ));
    }

    let id = UserId::new(first).map_err(|_| ApplicationError::unauthorized("empty user id"))?;
    Ok(CallerIdentity::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_subject_becomes_caller() {
        let caller = caller_from_subjects(vec![("user_1".into(),)]).unwrap();
        assert_eq!(caller.id.as_str(), "user_1");
    }

    #[test]
    fn missing_or_conflicting_subjects_are_rejected() {
        assert!(caller_from_subjects(vec![]).is_err());
        assert!(caller_from_subjects(vec![("a".into(),), ("b".into(),)]).is_err());
        assert!(caller_from_subjects(vec![("   ".into(),)]).is_err());
    }
}
