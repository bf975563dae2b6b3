//! Card: feature card shown on the landing page

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
