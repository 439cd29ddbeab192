// src/presentation/http/controllers/mod.rs
pub mod lead_magnets;
