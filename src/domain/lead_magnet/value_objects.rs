// src/domain/lead_magnet/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeadMagnetId(String);

impl LeadMagnetId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("lead magnet id cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LeadMagnetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadMagnetName(String);

impl LeadMagnetName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LeadMagnetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe public handle, unique per owner. Only `[a-z0-9-]` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeadMagnetSlug(String);

impl LeadMagnetSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if !is_url_safe(&value) {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits and hyphens",
            ));
        }
        Ok(Self(value))
    }

    /// `base-n`, the candidate tried on the n-th collision.
    pub fn with_suffix(&self, counter: u64) -> Self {
        Self(format!("{}-{counter}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

pub fn is_url_safe(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl fmt::Display for LeadMagnetSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadMagnetStatus {
    #[default]
    Draft,
    Published,
}

impl LeadMagnetStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for LeadMagnetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadMagnetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(DomainError::validation(format!(
                "unknown lead magnet status: {other}"
            ))),
        }
    }
}

/// The six content fields shared by the draft and the published snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadMagnetContent {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub prompt: String,
    pub first_question: String,
    pub email_capture: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert!(LeadMagnetSlug::new("My Guide").is_err());
        assert!(LeadMagnetSlug::new("").is_err());
        assert!(LeadMagnetSlug::new("my-guide-2").is_ok());
    }

    #[test]
    fn slug_suffix_appends_counter() {
        let base = LeadMagnetSlug::new("my-guide").unwrap();
        assert_eq!(base.with_suffix(3).as_str(), "my-guide-3");
    }

    #[test]
    fn status_parses_lowercase_names() {
        assert_eq!(
            "published".parse::<LeadMagnetStatus>().unwrap(),
            LeadMagnetStatus::Published
        );
        assert!("PUBLISHED".parse::<LeadMagnetStatus>().is_err());
    }
}
