// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `updated_at` / `published_at` stamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
