// src/application/dto/serde_time.rs
//! RFC 3339 rendering for timestamps in API payloads.
use chrono::{DateTime, Utc};
use serde::Serializer;

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub mod option {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}
