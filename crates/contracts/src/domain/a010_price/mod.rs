//! Price: pricing plan with up to fifteen feature lines

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
