//! Blog: dated article with categories and a cover image

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
