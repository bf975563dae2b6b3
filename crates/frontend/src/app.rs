use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{Notifications, Toaster};
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are available to every page, including the auth pages
    provide_context(Notifications::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
            <Toaster />
        </ConfigProvider>
    }
}
