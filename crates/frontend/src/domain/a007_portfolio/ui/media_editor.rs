use crate::shared::api_utils::asset_url;
use crate::shared::entity_form::selected_files;
use crate::shared::entity_form::view_model::EntityFormViewModel;
use crate::shared::icons::icon;
use contracts::shared::form::{MediaSlot, MediaSource};
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;

/// Image gallery: add files, remove slots and drag previews into order.
///
/// Stored images and newly chosen files share one ordered list.
#[component]
pub fn MediaEditor(field: &'static FieldMetadata, vm: EntityFormViewModel) -> impl IntoView {
    let name = field.name;
    let slots = Memo::new(move |_| {
        vm.form
            .with(|s| s.gallery(name).map(|g| g.slots().to_vec()).unwrap_or_default())
    });
    let drag_from: RwSignal<Option<usize>> = RwSignal::new(None);

    let slot_src = move |slot: &MediaSlot| match &slot.source {
        MediaSource::Existing(path) => Some(asset_url(path)),
        MediaSource::Pending => vm.preview(&slot.key.to_string()),
    };

    view! {
        <div class="media-editor">
            <input
                class="form__file"
                type="file"
                accept="image/*"
                multiple=true
                on:change=move |ev| vm.add_gallery_files(name, selected_files(&ev))
            />
            <div class="media-editor__grid">
                <For
                    each=move || slots.get().into_iter().enumerate()
                    key=|(index, slot)| (*index, slot.key)
                    children=move |(index, slot)| {
                        let key = slot.key;
                        let pending = slot.is_pending();
                        view! {
                            <div
                                class="media-editor__item"
                                class:media-editor__item--new=pending
                                draggable="true"
                                on:dragstart=move |ev: web_sys::DragEvent| {
                                    drag_from.set(Some(index));
                                    if let Some(dt) = ev.data_transfer() {
                                        let _ = dt.set_data("text/plain", &index.to_string());
                                    }
                                }
                                on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(from) = drag_from.get_untracked() {
                                        vm.move_gallery_slot(name, from, index);
                                    }
                                    drag_from.set(None);
                                }
                                on:dragend=move |_| drag_from.set(None)
                            >
                                <span class="media-editor__handle">{icon("grip-vertical")}</span>
                                {move || slot_src(&slot).map(|src| view! {
                                    <img class="media-editor__image" src=src alt="" />
                                })}
                                <button
                                    type="button"
                                    class="media-editor__remove"
                                    title="Remove image"
                                    on:click=move |_| vm.remove_gallery_slot(name, key)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
