// src/application/commands/lead_magnets/mod.rs
mod create;
mod delete;
mod draft;
mod ownership;
mod publish;
mod service;
mod update;

pub use create::CreateLeadMagnetCommand;
pub use delete::DeleteLeadMagnetCommand;
pub use draft::DraftFields;
pub use publish::PublishLeadMagnetCommand;
pub use service::LeadMagnetCommandService;
pub use update::UpdateLeadMagnetCommand;
