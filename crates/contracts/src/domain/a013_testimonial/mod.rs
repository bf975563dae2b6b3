//! Testimonial: client quote with profile and background images

mod metadata;
pub use metadata::{ENTITY_METADATA, FIELDS};
