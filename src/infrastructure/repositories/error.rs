use crate::domain::errors::DomainError;

const CNT_LEAD_MAGNET_USER_SLUG: &str = "lead_magnets_user_slug_key";
const CNT_LEAD_MAGNET_PKEY: &str = "lead_magnets_pkey";
const CNT_LEAD_MAGNET_STATUS_CHECK: &str = "lead_magnets_status_chk";
const CNT_LEAD_MAGNET_PUBLISHED_CHECK: &str = "lead_magnets_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LEAD_MAGNET_USER_SLUG => {
                        DomainError::Conflict("slug already in use for this user".into())
                    }
                    CNT_LEAD_MAGNET_PKEY => DomainError::Conflict("lead magnet already exists".into()),
                    CNT_LEAD_MAGNET_STATUS_CHECK => {
                        DomainError::Validation("unknown lead magnet status".into())
                    }
                    CNT_LEAD_MAGNET_PUBLISHED_CHECK => DomainError::Validation(
                        "published lead magnets require published_at".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
