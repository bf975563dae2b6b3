use crate::shared::api_client::{post_json, post_multipart, put_json, put_multipart, ApiError};
use crate::shared::entity_list::api::fetch_all;
use contracts::domain::common::{EntityId, EntityRecord};
use contracts::shared::form::{find_record, FormMode, FormPart, SubmitBody};
use contracts::shared::metadata::EntityMetadataInfo;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;
use web_sys::{File, FormData};

/// Files chosen in the form, keyed the way `FormPart` references them
#[derive(Default)]
pub struct FileStore {
    pub single: HashMap<String, File>,
    pub gallery: HashMap<Uuid, File>,
}

/// The API has no get-by-id: load the whole collection and pick the row
pub async fn fetch_by_id(
    meta: &EntityMetadataInfo,
    id: EntityId,
) -> Result<Option<EntityRecord>, ApiError> {
    let records = fetch_all(meta).await?;
    Ok(find_record(records, id))
}

/// Encoded request body, ready to send
pub enum Payload {
    Json(Value),
    Form(FormData),
}

impl Payload {
    /// Attach held files to multipart bodies
    pub fn encode(body: SubmitBody, files: &FileStore) -> Result<Self, ApiError> {
        match body {
            SubmitBody::Json(json) => Ok(Self::Json(json)),
            SubmitBody::Multipart(parts) => build_form_data(&parts, files).map(Self::Form),
        }
    }
}

/// Create (POST) or update (PUT)
pub async fn submit(meta: &EntityMetadataInfo, mode: FormMode, payload: Payload) -> Result<(), ApiError> {
    let response = match (mode, payload) {
        (FormMode::Create, Payload::Json(json)) => post_json::<_, Value>(&meta.create_path(), &json).await,
        (FormMode::Edit(_), Payload::Json(json)) => put_json::<_, Value>(&meta.update_path(), &json).await,
        (FormMode::Create, Payload::Form(form)) => post_multipart::<Value>(&meta.create_path(), form).await,
        (FormMode::Edit(_), Payload::Form(form)) => put_multipart::<Value>(&meta.update_path(), form).await,
    };
    response.map(|_| ())
}

/// Materialize multipart parts, attaching the held files.
/// A part whose file is no longer held is skipped.
pub fn build_form_data(parts: &[FormPart], files: &FileStore) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    for part in parts {
        let appended = match part {
            FormPart::Text { name, value } => form.append_with_str(name, value),
            FormPart::File { name, field } => match files.single.get(field) {
                Some(file) => form.append_with_blob_and_filename(name, file, &file.name()),
                None => {
                    log::warn!("No file held for field {}", field);
                    Ok(())
                }
            },
            FormPart::GalleryFile { name, key } => match files.gallery.get(key) {
                Some(file) => form.append_with_blob_and_filename(name, file, &file.name()),
                None => {
                    log::warn!("No file held for gallery slot {}", key);
                    Ok(())
                }
            },
        };
        appended.map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    }
    Ok(form)
}
