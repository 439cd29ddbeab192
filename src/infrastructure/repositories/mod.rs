// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_lead_magnet;

pub use error::map_sqlx;
pub use postgres_lead_magnet::{
    PostgresLeadMagnetReadRepository, PostgresLeadMagnetWriteRepository,
};
