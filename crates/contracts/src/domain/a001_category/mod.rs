//! Category: taxonomy entry with a cover image

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
