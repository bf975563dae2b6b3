pub mod login;
pub mod register;

use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use std::collections::HashMap;

/// Values of the auth forms, keyed by field name
pub(crate) type AuthValues = RwSignal<HashMap<&'static str, String>>;
pub(crate) type AuthErrors = RwSignal<HashMap<&'static str, String>>;

/// Labelled input bound to one auth form field
#[component]
pub(crate) fn AuthInput(
    field: &'static FieldMetadata,
    #[prop(optional)] input_type: Option<&'static str>,
    values: AuthValues,
    errors: AuthErrors,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name;
    let input_type = input_type.unwrap_or_else(|| field.kind.input_type());

    view! {
        <div class="form-group">
            <label for=name>{field.ui.label}</label>
            <input
                type=input_type
                id=name
                placeholder=field.ui.placeholder.unwrap_or_default()
                prop:value=move || values.with(|v| v.get(name).cloned().unwrap_or_default())
                on:input=move |ev| {
                    values.update(|v| {
                        v.insert(name, event_target_value(&ev));
                    });
                    errors.update(|e| {
                        e.remove(name);
                    });
                }
                disabled=move || disabled.get()
            />
            {move || errors.with(|e| e.get(name).cloned()).map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}
        </div>
    }
}

/// Run the field rules; returns false and fills `errors` on failure
pub(crate) fn check_fields(
    fields: &'static [FieldMetadata],
    values: AuthValues,
    errors: AuthErrors,
) -> bool {
    let found = values.with_untracked(|v| {
        contracts::system::auth::validate_fields(fields, |name| {
            v.get(name).cloned().unwrap_or_default()
        })
    });
    let valid = found.is_empty();
    errors.set(found.into_iter().collect());
    valid
}

pub(crate) fn value_of(values: AuthValues, name: &str) -> String {
    values.with_untracked(|v| v.get(name).map(|s| s.trim().to_string()).unwrap_or_default())
}
