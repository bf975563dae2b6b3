//! Logo: partner or client logo

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
