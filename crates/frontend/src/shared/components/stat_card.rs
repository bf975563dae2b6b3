use crate::shared::icons::icon;
use leptos::prelude::*;

/// Counter card of the home page. `None` renders a dash.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<u64>>,
    /// Link target of the card
    href: &'static str,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    view! {
        <a class="stat-card" href=href>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </a>
    }
}
