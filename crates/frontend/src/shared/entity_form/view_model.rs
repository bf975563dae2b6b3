use super::model::{self, FileStore, Payload};
use crate::shared::config::app_config;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::system::auth::context::{use_session, SessionContext};
use contracts::domain::EntityKind;
use contracts::shared::form::{
    not_found_message, save_failed_message, saved_message, FormMode, FormState, MediaSource,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;
use web_sys::{File, Url};

/// ViewModel of the create/edit page of any entity
#[derive(Clone, Copy)]
pub struct EntityFormViewModel {
    pub kind: EntityKind,
    pub mode: FormMode,
    pub form: RwSignal<FormState>,
    /// Object URLs of chosen files, keyed by field name or gallery slot key
    pub previews: RwSignal<HashMap<String, String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    files: StoredValue<FileStore, LocalStorage>,
    notifications: Notifications,
    session: SessionContext,
}

impl EntityFormViewModel {
    pub fn new(kind: EntityKind, mode: FormMode) -> Self {
        Self {
            kind,
            mode,
            form: RwSignal::new(FormState::new(kind.metadata(), kind.fields())),
            previews: RwSignal::new(HashMap::new()),
            loading: RwSignal::new(mode.is_edit()),
            saving: RwSignal::new(false),
            files: StoredValue::new_local(FileStore::default()),
            notifications: use_notifications(),
            session: use_session(),
        }
    }

    /// Fill the form from the stored record in edit mode.
    /// `on_missing` runs when the record cannot be found or loaded.
    pub fn load_if_needed(&self, on_missing: impl FnOnce() + 'static) {
        let FormMode::Edit(id) = self.mode else {
            return;
        };
        let this = *self;
        let meta = self.kind.metadata();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(meta, id).await {
                Ok(Some(record)) => {
                    this.form
                        .set(FormState::from_record(meta, this.kind.fields(), &record));
                    this.loading.set(false);
                }
                Ok(None) => {
                    log::warn!("{} {} not found", meta.slug, id);
                    this.notifications.error(not_found_message(meta));
                    on_missing();
                }
                Err(e) => {
                    this.session.handle_error(&e);
                    this.notifications.error(e.to_string());
                    on_missing();
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    pub fn preview(&self, key: &str) -> Option<String> {
        self.previews.with(|p| p.get(key).cloned())
    }

    /// Hold the file chosen for a single-image field and preview it
    pub fn choose_file(&self, field: &'static str, file: File) {
        self.drop_preview(field);
        self.add_preview(field.to_string(), &file);
        self.files.update_value(|f| {
            f.single.insert(field.to_string(), file);
        });
        self.form.update(|s| s.set_file_chosen(field, true));
    }

    /// Append new pending slots to a gallery
    pub fn add_gallery_files(&self, field: &'static str, files: Vec<File>) {
        for file in files {
            let Some(key) = self
                .form
                .try_update(|s| s.gallery_mut(field).map(|g| g.push_pending()))
                .flatten()
            else {
                log::warn!("{} is not a gallery field", field);
                return;
            };
            self.add_preview(key.to_string(), &file);
            self.files.update_value(|f| {
                f.gallery.insert(key, file);
            });
        }
    }

    pub fn remove_gallery_slot(&self, field: &'static str, key: Uuid) {
        let removed = self
            .form
            .try_update(|s| s.gallery_mut(field).and_then(|g| g.remove(key)))
            .flatten();
        if let Some(slot) = removed {
            if slot.source == MediaSource::Pending {
                self.drop_preview(&key.to_string());
                self.files.update_value(|f| {
                    f.gallery.remove(&key);
                });
            }
        }
    }

    pub fn move_gallery_slot(&self, field: &'static str, from: usize, to: usize) {
        self.form.update(|s| {
            if let Some(gallery) = s.gallery_mut(field) {
                gallery.move_slot(from, to);
            }
        });
    }

    fn add_preview(&self, key: String, file: &File) {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => self.previews.update(|p| {
                p.insert(key, url);
            }),
            Err(e) => log::warn!("Preview unavailable: {:?}", e),
        }
    }

    fn drop_preview(&self, key: &str) {
        let old = self
            .previews
            .try_update(|p| p.remove(key))
            .flatten();
        if let Some(url) = old {
            let _ = Url::revoke_object_url(&url);
        }
    }

    /// Revoke every preview URL; called when the page unmounts
    pub fn release(&self) {
        let urls = self
            .previews
            .try_update_untracked(std::mem::take)
            .unwrap_or_default();
        for url in urls.values() {
            let _ = Url::revoke_object_url(url);
        }
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Validate and submit. `on_saved` runs after the redirect delay.
    pub fn save_command(&self, on_saved: impl FnOnce() + 'static) {
        if self.saving.get_untracked() {
            return;
        }
        let mode = self.mode;
        let valid = self
            .form
            .try_update(|s| s.validate(mode))
            .unwrap_or(false);
        if !valid {
            log::debug!("{}: form has validation errors", self.kind.slug());
            return;
        }

        let this = *self;
        let meta = self.kind.metadata();
        let body = self.form.with_untracked(|s| s.submission(mode));
        let payload = match self.files.with_value(|files| Payload::encode(body, files)) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("{}: {}", meta.slug, e);
                self.notifications.error(save_failed_message(meta, mode));
                return;
            }
        };
        self.saving.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::submit(meta, mode, payload).await;
            this.saving.set(false);

            match outcome {
                Ok(()) => {
                    log::info!("{} saved", meta.slug);
                    this.notifications.success(saved_message(meta, mode));
                    TimeoutFuture::new(app_config().ui.redirect_delay_ms).await;
                    on_saved();
                }
                Err(e) => {
                    this.session.handle_error(&e);
                    log::error!("{} save failed: {}", meta.slug, e);
                    this.notifications.error(save_failed_message(meta, mode));
                }
            }
        });
    }
}
