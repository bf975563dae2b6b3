use leptos::prelude::*;

/// Row checkbox cell
///
/// Renders a `<td>` with the checkbox inside. Clicking the checkbox does
/// not trigger the row click (stop_propagation).
///
/// # BEM classes
/// - `.table__cell--checkbox` - td wrapper
/// - `.table__checkbox` - input element
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header checkbox selecting the whole loaded collection
#[component]
pub fn TableHeaderCheckbox(checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
