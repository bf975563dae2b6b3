use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders children only for an authenticated session.
/// Anonymous visitors are sent to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || {
        if session.is_checking() {
            view! { <div class="session-checking">"Checking session…"</div> }.into_any()
        } else if session.is_authenticated() {
            children().into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}

/// Login and register pages: an authenticated admin goes to the dashboard
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
