//! Create/edit form state shared by every entity.
//!
//! The state is a flat map of wire name to text, shaped by the entity's
//! `FieldMetadata`. Validation and payload construction live here so the UI
//! only binds inputs and sends what `submission` returns.

pub mod gallery;

pub use gallery::{MediaGallery, MediaSlot, MediaSource};

use crate::domain::common::{normalize_date, EntityId, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, FieldKind, FieldMetadata, SubmitEncoding};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// One part of a multipart body. File parts reference files held by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    /// The file chosen for a single-image field
    File { name: String, field: String },
    /// A pending gallery slot
    GalleryFile { name: String, key: Uuid },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBody {
    Json(Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug, Clone)]
pub struct FormState {
    meta: &'static EntityMetadataInfo,
    fields: &'static [FieldMetadata],
    values: BTreeMap<String, String>,
    links: BTreeMap<String, Vec<String>>,
    chosen_files: BTreeSet<String>,
    existing_images: BTreeMap<String, String>,
    galleries: BTreeMap<String, MediaGallery>,
    errors: BTreeMap<String, String>,
}

impl FormState {
    /// Empty form for the create page
    pub fn new(meta: &'static EntityMetadataInfo, fields: &'static [FieldMetadata]) -> Self {
        let mut state = Self {
            meta,
            fields,
            values: BTreeMap::new(),
            links: BTreeMap::new(),
            chosen_files: BTreeSet::new(),
            existing_images: BTreeMap::new(),
            galleries: BTreeMap::new(),
            errors: BTreeMap::new(),
        };
        for field in fields {
            match field.kind {
                FieldKind::LinkList => {
                    state.links.insert(field.name.to_string(), vec![String::new()]);
                }
                FieldKind::ImageList { .. } => {
                    state
                        .galleries
                        .insert(field.name.to_string(), MediaGallery::default());
                }
                FieldKind::Image => {}
                _ => {
                    for name in field.wire_names() {
                        state.values.insert(name, String::new());
                    }
                }
            }
        }
        state
    }

    /// Form pre-filled from a stored record for the edit page
    pub fn from_record(
        meta: &'static EntityMetadataInfo,
        fields: &'static [FieldMetadata],
        record: &EntityRecord,
    ) -> Self {
        let mut state = Self::new(meta, fields);
        for field in fields {
            match field.kind {
                FieldKind::LinkList => {
                    let mut links = record.list_values(field.name);
                    if links.is_empty() {
                        links.push(String::new());
                    }
                    state.links.insert(field.name.to_string(), links);
                }
                FieldKind::ImageList { .. } => {
                    state.galleries.insert(
                        field.name.to_string(),
                        MediaGallery::from_paths(record.image_paths(field.name, field.kind)),
                    );
                }
                FieldKind::Image => {
                    let path = record.text(field.name);
                    if !path.is_empty() {
                        state.existing_images.insert(field.name.to_string(), path);
                    }
                }
                FieldKind::Date => {
                    state
                        .values
                        .insert(field.name.to_string(), normalize_date(&record.text(field.name)));
                }
                _ => {
                    for name in field.wire_names() {
                        let value = record.text(&name);
                        state.values.insert(name, value);
                    }
                }
            }
        }
        state
    }

    pub fn meta(&self) -> &'static EntityMetadataInfo {
        self.meta
    }

    pub fn fields(&self) -> &'static [FieldMetadata] {
        self.fields
    }

    pub fn value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Editing a field clears its error
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    pub fn links(&self, name: &str) -> Vec<String> {
        self.links.get(name).cloned().unwrap_or_default()
    }

    pub fn set_link(&mut self, name: &str, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.links.get_mut(name).and_then(|l| l.get_mut(index)) {
            *slot = value.into();
        }
        self.errors.remove(name);
    }

    pub fn add_link(&mut self, name: &str) {
        self.links
            .entry(name.to_string())
            .or_default()
            .push(String::new());
    }

    /// At least one input always stays
    pub fn remove_link(&mut self, name: &str, index: usize) {
        if let Some(links) = self.links.get_mut(name) {
            if index < links.len() {
                links.remove(index);
            }
            if links.is_empty() {
                links.push(String::new());
            }
        }
    }

    pub fn set_file_chosen(&mut self, name: &str, chosen: bool) {
        if chosen {
            self.chosen_files.insert(name.to_string());
            self.errors.remove(name);
        } else {
            self.chosen_files.remove(name);
        }
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.chosen_files.contains(name)
    }

    /// Stored path of a single-image field, shown until a new file is chosen
    pub fn existing_image(&self, name: &str) -> Option<&str> {
        self.existing_images.get(name).map(String::as_str)
    }

    pub fn gallery(&self, name: &str) -> Option<&MediaGallery> {
        self.galleries.get(name)
    }

    pub fn gallery_mut(&mut self, name: &str) -> Option<&mut MediaGallery> {
        self.errors.remove(name);
        self.galleries.get_mut(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check every visible field, keyed by wire name. Returns true when valid.
    pub fn validate(&mut self, mode: FormMode) -> bool {
        let mut errors = BTreeMap::new();
        for field in self.fields.iter().filter(|f| f.visible_in_form()) {
            let label = field.ui.label;
            let rules = &field.validation;
            match field.kind {
                FieldKind::Image => {
                    // Edit keeps the stored image when no new file is chosen
                    let missing = !self.has_file(field.name)
                        && (mode == FormMode::Create || self.existing_image(field.name).is_none());
                    if rules.required && missing {
                        errors.insert(field.name.to_string(), format!("{} is required", label));
                    }
                }
                FieldKind::ImageList { .. } => {
                    let empty = self.gallery(field.name).map_or(true, MediaGallery::is_empty);
                    if rules.required && empty {
                        errors.insert(field.name.to_string(), format!("{} is required", label));
                    }
                }
                FieldKind::LinkList => {
                    let joined = join_links(&self.links(field.name));
                    if let Err(e) = rules.validate_string(&joined, label) {
                        errors.insert(field.name.to_string(), e);
                    }
                }
                FieldKind::Number => {
                    let raw = self.value(field.name);
                    let result = rules.validate_string(&raw, label).and_then(|_| {
                        if raw.trim().is_empty() {
                            return Ok(());
                        }
                        raw.trim()
                            .parse::<f64>()
                            .map_err(|_| format!("{} must be a number", label))
                            .and_then(|n| rules.validate_number(n, label))
                    });
                    if let Err(e) = result {
                        errors.insert(field.name.to_string(), e);
                    }
                }
                _ => {
                    for name in field.wire_names() {
                        if let Err(e) = rules.validate_string(&self.value(&name), label) {
                            errors.insert(name, e);
                        }
                    }
                }
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Request body for the create or update endpoint
    pub fn submission(&self, mode: FormMode) -> SubmitBody {
        match self.meta.submit {
            SubmitEncoding::Json => SubmitBody::Json(self.json_body(mode)),
            SubmitEncoding::Multipart => SubmitBody::Multipart(self.multipart_parts(mode)),
        }
    }

    fn json_body(&self, mode: FormMode) -> Value {
        let mut body = Map::new();
        if let FormMode::Edit(id) = mode {
            body.insert("id".to_string(), Value::from(id));
        }
        for field in self.fields {
            match field.kind {
                FieldKind::Number => {
                    let raw = self.value(field.name);
                    let value = match raw.trim().parse::<f64>() {
                        Ok(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                            Value::from(n as i64)
                        }
                        Ok(n) => Value::from(n),
                        Err(_) => Value::from(raw),
                    };
                    body.insert(field.name.to_string(), value);
                }
                FieldKind::LinkList => {
                    body.insert(
                        field.name.to_string(),
                        Value::from(join_links(&self.links(field.name))),
                    );
                }
                FieldKind::Image | FieldKind::ImageList { .. } => {}
                _ => {
                    for name in field.wire_names() {
                        let value = self.value(&name);
                        body.insert(name, Value::from(value));
                    }
                }
            }
        }
        Value::Object(body)
    }

    fn multipart_parts(&self, mode: FormMode) -> Vec<FormPart> {
        let mut parts = Vec::new();
        if let FormMode::Edit(id) = mode {
            parts.push(text_part("id", id.to_string()));
        }
        for field in self.fields {
            match field.kind {
                FieldKind::Image => {
                    // Omitted part keeps the stored image on update
                    if self.has_file(field.name) {
                        parts.push(FormPart::File {
                            name: field.name.to_string(),
                            field: field.name.to_string(),
                        });
                    }
                }
                FieldKind::ImageList {
                    upload_part,
                    keep_part,
                } => {
                    let gallery = self.gallery(field.name).cloned().unwrap_or_default();
                    if mode.is_edit() {
                        let kept = serde_json::to_string(&gallery.kept_paths())
                            .unwrap_or_else(|_| "[]".to_string());
                        parts.push(text_part(keep_part, kept));
                    }
                    for key in gallery.pending_keys() {
                        parts.push(FormPart::GalleryFile {
                            name: upload_part.to_string(),
                            key,
                        });
                    }
                }
                FieldKind::LinkList => {
                    parts.push(text_part(field.name, join_links(&self.links(field.name))));
                }
                _ => {
                    for name in field.wire_names() {
                        let value = self.value(&name);
                        parts.push(text_part(&name, value));
                    }
                }
            }
        }
        parts
    }
}

fn text_part(name: &str, value: impl Into<String>) -> FormPart {
    FormPart::Text {
        name: name.to_string(),
        value: value.into(),
    }
}

/// Non-empty links joined by commas
fn join_links(links: &[String]) -> String {
    links
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Record to edit, looked up in the full list response
pub fn find_record(records: Vec<EntityRecord>, id: EntityId) -> Option<EntityRecord> {
    records.into_iter().find(|r| r.id == id)
}

pub fn not_found_message(meta: &EntityMetadataInfo) -> String {
    format!("{} not found", meta.ui.element_name)
}

pub fn saved_message(meta: &EntityMetadataInfo, mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("{} created successfully!", meta.ui.element_name),
        FormMode::Edit(_) => format!("{} updated successfully!", meta.ui.element_name),
    }
}

pub fn save_failed_message(meta: &EntityMetadataInfo, mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("Failed to create {}", meta.noun()),
        FormMode::Edit(_) => "Update failed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStatus;
    use crate::domain::{a001_category, a007_portfolio, a010_price, a011_contact, a012_blog};
    use serde_json::json;

    fn category(id: EntityId) -> EntityRecord {
        EntityRecord::new(id, EntityStatus::Active)
            .with_field("name", format!("Category {}", id))
            .with_field("image", format!("/uploads/cat{}.png", id))
    }

    fn text_names(parts: &[FormPart]) -> Vec<String> {
        parts
            .iter()
            .map(|p| match p {
                FormPart::Text { name, .. } => name.clone(),
                FormPart::File { name, .. } => format!("file:{}", name),
                FormPart::GalleryFile { name, .. } => format!("gallery:{}", name),
            })
            .collect()
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let records = vec![category(1), category(2)];
        assert!(find_record(records, 7).is_none());
        assert_eq!(
            not_found_message(&a001_category::ENTITY_METADATA),
            "Category not found"
        );
    }

    #[test]
    fn test_edit_without_new_file_omits_image() {
        let record = category(3);
        let mut form =
            FormState::from_record(&a001_category::ENTITY_METADATA, a001_category::FIELDS, &record);
        assert_eq!(form.existing_image("image"), Some("/uploads/cat3.png"));
        assert!(form.validate(FormMode::Edit(3)));

        let SubmitBody::Multipart(parts) = form.submission(FormMode::Edit(3)) else {
            panic!("category submits multipart");
        };
        assert_eq!(text_names(&parts), vec!["id", "name"]);
        assert_eq!(
            parts[0],
            FormPart::Text {
                name: "id".to_string(),
                value: "3".to_string()
            }
        );
    }

    #[test]
    fn test_edit_with_new_file_sends_image() {
        let mut form = FormState::from_record(
            &a001_category::ENTITY_METADATA,
            a001_category::FIELDS,
            &category(3),
        );
        form.set_file_chosen("image", true);
        let SubmitBody::Multipart(parts) = form.submission(FormMode::Edit(3)) else {
            panic!("category submits multipart");
        };
        assert_eq!(text_names(&parts), vec!["id", "name", "file:image"]);
    }

    #[test]
    fn test_create_requires_image_and_name() {
        let mut form = FormState::new(&a001_category::ENTITY_METADATA, a001_category::FIELDS);
        assert!(!form.validate(FormMode::Create));
        assert_eq!(form.error("name"), Some("Category name is required"));
        assert_eq!(form.error("image"), Some("Category image is required"));

        form.set_value("name", "Shoes");
        assert_eq!(form.error("name"), None);
        form.set_file_chosen("image", true);
        assert!(form.validate(FormMode::Create));
    }

    #[test]
    fn test_contact_email_pattern() {
        let mut form = FormState::new(&a011_contact::ENTITY_METADATA, a011_contact::FIELDS);
        for field in a011_contact::FIELDS {
            form.set_value(field.name, "filled");
        }
        form.set_value("email", "not-an-email");
        assert!(!form.validate(FormMode::Create));
        assert_eq!(form.error("email"), Some("Invalid email"));

        form.set_value("email", "a@b.co");
        assert!(form.validate(FormMode::Create));
    }

    #[test]
    fn test_price_json_body() {
        let mut form = FormState::new(&a010_price::ENTITY_METADATA, a010_price::FIELDS);
        form.set_value("title", "Pro");
        form.set_value("planPrice", "-1");
        assert!(!form.validate(FormMode::Create));
        assert_eq!(form.error("planPrice"), Some("Price must be at least 0"));

        form.set_value("planPrice", "49");
        form.set_value("description1", "SSL");
        assert!(form.validate(FormMode::Edit(4)));

        let SubmitBody::Json(body) = form.submission(FormMode::Edit(4)) else {
            panic!("price submits json");
        };
        assert_eq!(body["id"], json!(4));
        assert_eq!(body["planPrice"], json!(49));
        assert_eq!(body["description1"], json!("SSL"));
        assert_eq!(body["description15"], json!(""));
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_price_rejects_non_numeric() {
        let mut form = FormState::new(&a010_price::ENTITY_METADATA, a010_price::FIELDS);
        form.set_value("title", "Pro");
        form.set_value("planPrice", "abc");
        assert!(!form.validate(FormMode::Create));
        assert_eq!(form.error("planPrice"), Some("Price must be a number"));
    }

    #[test]
    fn test_blog_date_is_normalized() {
        let record = EntityRecord::new(2, EntityStatus::Active)
            .with_field("date", "2024-03-05T10:00:00.000Z");
        let form = FormState::from_record(&a012_blog::ENTITY_METADATA, a012_blog::FIELDS, &record);
        assert_eq!(form.value("date"), "2024-03-05");
    }

    #[test]
    fn test_link_editing_keeps_one_input() {
        let mut form = FormState::new(&a007_portfolio::ENTITY_METADATA, a007_portfolio::FIELDS);
        assert_eq!(form.links("videoLink"), vec![String::new()]);
        form.add_link("videoLink");
        form.set_link("videoLink", 1, "https://youtu.be/x");
        assert_eq!(form.links("videoLink").len(), 2);
        form.remove_link("videoLink", 0);
        form.remove_link("videoLink", 0);
        assert_eq!(form.links("videoLink"), vec![String::new()]);
    }

    #[test]
    fn test_portfolio_edit_parts() {
        let record = EntityRecord::new(5, EntityStatus::Active)
            .with_field("title", "Site")
            .with_field("category", "Web")
            .with_field("description", "Redesign")
            .with_field("images", json!(["/a.png", "/b.png"]))
            .with_field("videoLink", "https://youtu.be/x,https://youtu.be/y");
        let mut form = FormState::from_record(
            &a007_portfolio::ENTITY_METADATA,
            a007_portfolio::FIELDS,
            &record,
        );
        assert_eq!(form.links("videoLink").len(), 2);
        form.set_link("videoLink", 1, "  ");

        let gallery = form.gallery_mut("images").unwrap();
        let first = gallery.slots()[0].key;
        gallery.remove(first);
        gallery.push_pending();

        assert!(form.validate(FormMode::Edit(5)));
        let SubmitBody::Multipart(parts) = form.submission(FormMode::Edit(5)) else {
            panic!("portfolio submits multipart");
        };
        assert_eq!(
            text_names(&parts),
            vec![
                "id",
                "title",
                "category",
                "description",
                "existingImages",
                "gallery:image",
                "videoLink"
            ]
        );
        assert!(parts.contains(&FormPart::Text {
            name: "existingImages".to_string(),
            value: "[\"/b.png\"]".to_string()
        }));
        assert!(parts.contains(&FormPart::Text {
            name: "videoLink".to_string(),
            value: "https://youtu.be/x".to_string()
        }));
    }

    #[test]
    fn test_portfolio_create_has_no_keep_part() {
        let mut form = FormState::new(&a007_portfolio::ENTITY_METADATA, a007_portfolio::FIELDS);
        form.gallery_mut("images").unwrap().push_pending();
        let SubmitBody::Multipart(parts) = form.submission(FormMode::Create) else {
            panic!("portfolio submits multipart");
        };
        assert!(!text_names(&parts).contains(&"existingImages".to_string()));
        assert!(text_names(&parts).contains(&"gallery:image".to_string()));
    }

    #[test]
    fn test_messages() {
        let meta = &a001_category::ENTITY_METADATA;
        assert_eq!(
            saved_message(meta, FormMode::Create),
            "Category created successfully!"
        );
        assert_eq!(
            saved_message(meta, FormMode::Edit(1)),
            "Category updated successfully!"
        );
        assert_eq!(
            save_failed_message(meta, FormMode::Create),
            "Failed to create category"
        );
        assert_eq!(save_failed_message(meta, FormMode::Edit(1)), "Update failed");
    }
}
