//! Banner: hero slide of the public site

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
