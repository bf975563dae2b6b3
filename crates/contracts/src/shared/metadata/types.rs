//! Core metadata types for managed entities
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldKind;
use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for a managed entity
/// All string fields are 'static for zero-cost compile-time access
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityMetadataInfo {
    pub schema_version: &'static str,
    pub entity_name: &'static str,
    pub entity_index: &'static str,
    /// Route and REST segment, e.g. "banner"
    pub slug: &'static str,
    pub ui: EntityUiMetadata,
    pub api: EntityApiMetadata,
    pub list: EntityListMetadata,
    pub submit: SubmitEncoding,
}

impl EntityMetadataInfo {
    fn endpoint(&self, action: &str) -> String {
        format!("/admin/{}/{}", self.slug, action)
    }

    /// GET-all endpoint, e.g. `/admin/banner/getBanners`
    pub fn list_path(&self) -> String {
        self.endpoint(self.api.list)
    }

    pub fn create_path(&self) -> String {
        self.endpoint(self.api.create)
    }

    pub fn update_path(&self) -> String {
        self.endpoint(self.api.update)
    }

    /// Soft-delete endpoint. Entities without a dedicated delete action
    /// terminate records through their update endpoint.
    pub fn delete_path(&self) -> String {
        self.endpoint(self.api.delete.unwrap_or(self.api.update))
    }

    /// List page route, e.g. `/banner`
    pub fn list_route(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn create_route(&self) -> String {
        format!("/create-{}", self.slug)
    }

    pub fn edit_route(&self, id: i64) -> String {
        format!("/edit-{}/{}", self.slug, id)
    }

    /// Singular lowercase noun used in notifications ("banner")
    pub fn noun(&self) -> String {
        self.ui.element_name.to_lowercase()
    }

    /// Plural lowercase noun used in notifications ("banners")
    pub fn plural_noun(&self) -> String {
        self.ui.list_name.to_lowercase()
    }
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    /// Heading of the printed report
    pub report_title: &'static str,
    pub icon: &'static str,
}

/// REST action names under `/admin/<slug>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityApiMetadata {
    pub list: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    /// `None` when termination goes through the update action
    pub delete: Option<&'static str>,
}

/// Table, search and export layout of the list page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityListMetadata {
    pub columns: &'static [ColumnMetadata],
    /// Record fields matched by the search box
    pub search_fields: &'static [&'static str],
    pub csv_columns: &'static [ColumnMetadata],
    pub csv_file_name: &'static str,
    /// Rows can be drag-reordered and the order saved
    pub orderable: bool,
}

/// A table or CSV column bound to a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMetadata {
    pub label: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
}

impl ColumnMetadata {
    pub const fn new(label: &'static str, field: &'static str, kind: FieldKind) -> Self {
        Self { label, field, kind }
    }

    pub const fn text(label: &'static str, field: &'static str) -> Self {
        Self::new(label, field, FieldKind::Text)
    }

    pub const fn image(label: &'static str, field: &'static str) -> Self {
        Self::new(label, field, FieldKind::Image)
    }

    pub const fn id() -> Self {
        Self::new("ID", "id", FieldKind::Id)
    }

    pub const fn status() -> Self {
        Self::new("Status", "status", FieldKind::Status)
    }

    pub fn is_image(&self) -> bool {
        self.kind.is_media()
    }
}

/// How create/update payloads are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEncoding {
    Json,
    Multipart,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Wire name (camelCase, as the API sends it)
    pub name: &'static str,
    pub kind: FieldKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub const fn new(
        name: &'static str,
        kind: FieldKind,
        ui: FieldUiMetadata,
        validation: ValidationRules,
    ) -> Self {
        Self {
            name,
            kind,
            ui,
            validation,
        }
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Check if field should be visible in form
    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    /// Wire names this field expands to. Numbered text fields expand to
    /// `<name>1` .. `<name>N`, everything else maps to its own name.
    pub fn wire_names(&self) -> Vec<String> {
        match self.kind {
            FieldKind::NumberedText { count } => {
                (1..=count).map(|i| format!("{}{}", self.name, i)).collect()
            }
            _ => vec![self.name.to_string()],
        }
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder: Some(placeholder),
            hint: None,
            visible_in_form: true,
        }
    }
}

/// Default values for FieldUiMetadata
impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: None,
            hint: None,
            visible_in_form: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_wire_names() {
        let field = FieldMetadata {
            name: "description",
            kind: FieldKind::NumberedText { count: 3 },
            ui: FieldUiMetadata::default(),
            validation: ValidationRules::none(),
        };
        assert_eq!(
            field.wire_names(),
            vec!["description1", "description2", "description3"]
        );
        assert!(field.is_optional());
    }
}
