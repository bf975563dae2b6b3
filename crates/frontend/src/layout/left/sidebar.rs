//! Navigation menu: Dashboard followed by one item per managed entity

use crate::shared::icons::icon;
use contracts::domain::EntityKind;
use contracts::shared::routes::is_active_for;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="app-sidebar__brand">"Admin Panel"</div>
        <nav class="app-sidebar__content">
            <a
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || pathname.get() == "/"
                href="/"
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>"Dashboard"</span>
                </div>
            </a>
            {EntityKind::ALL
                .into_iter()
                .map(|kind| {
                    let meta = kind.metadata();
                    view! {
                        <a
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || is_active_for(kind, &pathname.get())
                            href=meta.list_route()
                        >
                            <div class="app-sidebar__item-content">
                                {icon(meta.ui.icon)}
                                <span>{kind.label()}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
