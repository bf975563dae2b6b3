//! Portfolio extensions of the generic list and form pages

mod media_editor;
mod order;
mod video_links;

pub use media_editor::MediaEditor;
pub use order::{save_order, OrderSaveBar};
pub use video_links::VideoLinksEditor;
