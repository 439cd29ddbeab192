pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{LeadMagnet, LeadMagnetUpdate, NewLeadMagnet, PublishedSnapshot};
pub use repository::{LeadMagnetReadRepository, LeadMagnetWriteRepository};
pub use value_objects::{
    LeadMagnetContent, LeadMagnetId, LeadMagnetName, LeadMagnetSlug, LeadMagnetStatus,
};
