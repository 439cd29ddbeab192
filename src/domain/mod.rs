pub mod errors;
pub mod lead_magnet;
pub mod user;
