//! Contact: inbound contact request

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
