use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

/// Read-only status label, coloured by status
#[component]
pub fn StatusBadge(status: EntityStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", status.css_class())>
            {status.label()}
        </span>
    }
}
