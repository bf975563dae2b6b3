//! Portfolio: showcase project with an image gallery, video links and a
//! manually maintained display order

pub mod media;
mod metadata;

pub use media::embed_url;
pub use metadata::{ENTITY_METADATA, FIELDS, IMAGES_KIND, UPDATE_ORDER_PATH};
