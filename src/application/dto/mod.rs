pub mod auth;
pub mod lead_magnets;
pub mod serde_time;

pub use auth::CallerIdentity;
pub use lead_magnets::LeadMagnetDto;
