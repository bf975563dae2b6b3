//! Team: team member profile

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
