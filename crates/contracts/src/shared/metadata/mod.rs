//! Metadata types describing the managed entities
//!
//! Every entity module exposes `ENTITY_METADATA` and `FIELDS` statics built
//! from these types. All types use 'static lifetimes so the whole catalogue
//! is a set of compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a003_banner;
//!
//! let meta = &a003_banner::ENTITY_METADATA;
//! println!("Entity: {}", meta.ui.element_name);
//!
//! for field in a003_banner::FIELDS {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldUiMetadata, SubmitEncoding,
};
pub use validation::ValidationRules;
