//! Process: step of the working process section

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
