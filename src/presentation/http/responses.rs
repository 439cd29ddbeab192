// src/presentation/http/responses.rs
//! Success envelopes: `{ message, data?, success? }`.
use crate::application::dto::LeadMagnetDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeadMagnetResponse {
    pub message: String,
    pub data: LeadMagnetDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl LeadMagnetResponse {
    pub fn new(message: impl Into<String>, data: LeadMagnetDto) -> Self {
        Self {
            message: message.into(),
            data,
            success: None,
        }
    }

    pub const fn succeeded(mut self) -> Self {
        self.success = Some(true);
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub success: bool,
}
