//! Common types shared by all managed entities

pub mod entity_status;
pub mod record;

// Re-exports
pub use entity_status::EntityStatus;
pub use record::{normalize_date, EntityId, EntityRecord};
