//! Input widgets, one per field kind

use super::view_model::EntityFormViewModel;
use crate::domain::a007_portfolio::ui::{MediaEditor, VideoLinksEditor};
use crate::shared::api_utils::asset_url;
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// Files picked in an `<input type="file">`
pub fn selected_files(ev: &leptos::ev::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    };
    // Let the same file be picked again after removal
    input.set_value("");
    files
}

/// Inline validation message under a field
#[component]
pub fn FieldError(vm: EntityFormViewModel, name: String) -> impl IntoView {
    let message = move || vm.form.with(|s| s.error(&name).map(str::to_string));
    view! {
        {move || message().map(|m| view! { <div class="form__error">{m}</div> })}
    }
}

#[component]
pub fn FieldInput(field: &'static FieldMetadata, vm: EntityFormViewModel) -> impl IntoView {
    let input = match field.kind {
        FieldKind::LongText => text_area(field, vm).into_any(),
        FieldKind::NumberedText { count } => numbered_inputs(field, count, vm).into_any(),
        FieldKind::Image => image_input(field, vm).into_any(),
        FieldKind::ImageList { .. } => view! { <MediaEditor field=field vm=vm /> }.into_any(),
        FieldKind::LinkList => view! { <VideoLinksEditor field=field vm=vm /> }.into_any(),
        _ => plain_input(field, field.name.to_string(), field.ui.placeholder.unwrap_or(""), vm).into_any(),
    };
    let shows_own_errors = matches!(field.kind, FieldKind::NumberedText { .. });

    view! {
        <div class="form__group">
            <label class="form__label">
                {field.ui.label}
                {field.validation.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {input}
            {field.ui.hint.map(|h| view! { <div class="form__hint">{h}</div> })}
            {(!shows_own_errors).then(|| view! { <FieldError vm=vm name=field.name.to_string() /> })}
        </div>
    }
}

fn plain_input(
    field: &'static FieldMetadata,
    name: String,
    placeholder: &str,
    vm: EntityFormViewModel,
) -> impl IntoView {
    let key = name.clone();
    let value = move || vm.form.with(|s| s.value(&key));
    view! {
        <input
            class="form__input"
            type=field.kind.input_type()
            placeholder=placeholder.to_string()
            prop:value=value
            on:input=move |ev| {
                let text = event_target_value(&ev);
                vm.form.update(|s| s.set_value(&name, text));
            }
        />
    }
}

fn text_area(field: &'static FieldMetadata, vm: EntityFormViewModel) -> impl IntoView {
    view! {
        <textarea
            class="form__textarea"
            rows="4"
            placeholder=field.ui.placeholder.unwrap_or("")
            prop:value=move || vm.form.with(|s| s.value(field.name))
            on:input=move |ev| {
                let text = event_target_value(&ev);
                vm.form.update(|s| s.set_value(field.name, text));
            }
        ></textarea>
    }
}

fn numbered_inputs(field: &'static FieldMetadata, count: u8, vm: EntityFormViewModel) -> impl IntoView {
    let base = field.ui.placeholder.unwrap_or(field.ui.label);
    view! {
        <div class="form__numbered">
            {field.wire_names().into_iter().zip(1..=count).map(|(name, index)| {
                let placeholder = format!("{} {}", base, index);
                view! {
                    <div class="form__numbered-item">
                        {plain_input(field, name.clone(), &placeholder, vm)}
                        <FieldError vm=vm name=name />
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

fn image_input(field: &'static FieldMetadata, vm: EntityFormViewModel) -> impl IntoView {
    // Newly chosen file first, then the stored image
    let preview = move || {
        vm.preview(field.name).or_else(|| {
            vm.form
                .with(|s| s.existing_image(field.name).map(asset_url))
        })
    };
    view! {
        <input
            class="form__file"
            type="file"
            accept="image/*"
            on:change=move |ev| {
                if let Some(file) = selected_files(&ev).into_iter().next() {
                    vm.choose_file(field.name, file);
                }
            }
        />
        {move || preview().map(|src| view! {
            <img class="form__preview" src=src alt="Preview" />
        })}
    }
}
