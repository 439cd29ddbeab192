pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::ApplicationResult;
