use contracts::domain::common::EntityStatus;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

/// Inline Active/Inactive switch of a table row.
///
/// Shows the last confirmed `status`; a pick is only reflected once the
/// owner confirms it and `status` changes.
#[component]
pub fn StatusSelect(
    #[prop(into)] status: Signal<EntityStatus>,
    on_change: Callback<EntityStatus>,
) -> impl IntoView {
    view! {
        <select
            class=move || format!("status-select {}", status.get().css_class())
            prop:value=move || status.get().as_str()
            on:click=|e| e.stop_propagation()
            on:change=move |ev| {
                let current = status.get_untracked();
                let picked = event_target_value(&ev).parse::<EntityStatus>();
                // Back to the confirmed value until the change goes through
                if let Some(select) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                {
                    select.set_value(current.as_str());
                }
                match picked {
                    Ok(next) if next != current => on_change.run(next),
                    Ok(_) => {}
                    Err(e) => log::warn!("{}", e),
                }
            }
        >
            {EntityStatus::SELECTABLE.iter().map(|option| {
                view! {
                    <option value=option.as_str()>
                        {option.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
