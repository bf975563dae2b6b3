//! Event: dated happening linked to a category by id

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
