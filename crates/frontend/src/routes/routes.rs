//! Router table. Entity pages share two dynamic segments and are dispatched
//! through `AppRoute`.

use crate::dashboards::HomeDashboard;
use crate::layout::Shell;
use crate::shared::entity_form::{EntityFormPage, RecordNotFound};
use crate::shared::entity_list::EntityListPage;
use crate::system::auth::guard::{RedirectIfAuthenticated, RequireAuth};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use contracts::domain::EntityKind;
use contracts::shared::form::FormMode;
use contracts::shared::routes::{AppRoute, RouteError};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <a class="button button--primary" href="/">"Back to Dashboard"</a>
        </div>
    }
}

/// Page for a resolved entity route. A params change remounts the page,
/// so each entity starts from fresh state.
fn render_route(route: Result<AppRoute, RouteError>, page: &str) -> AnyView {
    match route {
        Ok(AppRoute::List(kind)) => view! { <EntityListPage kind=kind /> }.into_any(),
        Ok(AppRoute::Create(kind)) => {
            view! { <EntityFormPage kind=kind mode=FormMode::Create /> }.into_any()
        }
        Ok(AppRoute::Edit(kind, id)) => {
            view! { <EntityFormPage kind=kind mode=FormMode::Edit(id) /> }.into_any()
        }
        Err(RouteError::InvalidId(id)) => {
            match page.strip_prefix("edit-").and_then(EntityKind::from_slug) {
                Some(kind) => {
                    log::warn!("Invalid record id in route: {}", id);
                    view! { <RecordNotFound kind=kind /> }.into_any()
                }
                None => view! { <NotFoundPage /> }.into_any(),
            }
        }
        Ok(_) | Err(RouteError::UnknownPage(_)) => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn EntityPage() -> impl IntoView {
    let params = use_params_map();
    let route = Memo::new(move |_| {
        params.with(|p| {
            let page = p.get("page").unwrap_or_default();
            let resolved = match p.get("id") {
                Some(id) => AppRoute::detail(&page, &id),
                None => AppRoute::page(&page),
            };
            (resolved, page)
        })
    });

    move || {
        let (resolved, page) = route.get();
        render_route(resolved, &page)
    }
}

#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <RequireAuth>
            <Shell>
                {children.with_value(|c| c())}
            </Shell>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=path!("/login")
                    view=|| view! { <RedirectIfAuthenticated><LoginPage /></RedirectIfAuthenticated> }
                />
                <Route
                    path=path!("/register")
                    view=|| view! { <RedirectIfAuthenticated><RegisterPage /></RedirectIfAuthenticated> }
                />
                <Route
                    path=path!("/")
                    view=|| view! { <Protected><HomeDashboard /></Protected> }
                />
                <Route
                    path=path!("/:page")
                    view=|| view! { <Protected><EntityPage /></Protected> }
                />
                <Route
                    path=path!("/:page/:id")
                    view=|| view! { <Protected><EntityPage /></Protected> }
                />
            </Routes>
        </Router>
    }
}
