//! Service: offered service with an illustration

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
