//! About: "about us" section block

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
