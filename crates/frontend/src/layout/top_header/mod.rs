//! Top bar: sidebar toggle, title, signed-in admin and logout

use crate::layout::global_context::use_global_context;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let confirm_open = RwSignal::new(false);

    let is_sidebar_visible = move || ctx.left_open.get();

    // The route guard sends the browser to /login once the session is gone
    let on_logout = Callback::new(move |_: ()| {
        spawn_local(async move {
            session.logout().await;
        });
    });

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("list")}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.admin_name()}</span>
                </div>
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| confirm_open.set(true)
                    title="Logout"
                >
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Confirm Logout"
                message=Signal::derive(|| "Are you sure you want to logout?".to_string())
                confirm_label="Logout"
                on_confirm=on_logout
            />
        </header>
    }
}
