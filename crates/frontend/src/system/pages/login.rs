use crate::shared::components::ui::Button;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{check_fields, value_of, AuthErrors, AuthInput, AuthValues};
use crate::shared::notifications::use_notifications;
use crate::system::auth::{api, context::use_session};
use contracts::system::auth::LOGIN_FIELDS;

#[component]
pub fn LoginPage() -> impl IntoView {
    let values: AuthValues = RwSignal::new(Default::default());
    let errors: AuthErrors = RwSignal::new(Default::default());
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !check_fields(LOGIN_FIELDS, values, errors) {
            return;
        }

        let email = value_of(values, "email");
        // Passwords are sent as typed
        let password = values.with_untracked(|v| v.get("password").cloned().unwrap_or_default());
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(email, password).await {
                Ok(response) => {
                    session.sign_in(&response.token);
                    notifications.success("Login successful");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Login rejected: {}", e);
                    notifications.error(
                        e.server_message()
                            .unwrap_or("Invalid email or password")
                            .to_string(),
                    );
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Admin Panel"</h1>
                <h2>"Admin Login"</h2>

                <form on:submit=on_submit novalidate>
                    <AuthInput field=&LOGIN_FIELDS[0] values=values errors=errors disabled=is_loading />
                    <AuthInput
                        field=&LOGIN_FIELDS[1]
                        input_type="password"
                        values=values
                        errors=errors
                        disabled=is_loading
                    />

                    <Button button_type="submit" class="auth-form__submit" disabled=Signal::derive(move || is_loading.get())>
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </Button>
                </form>

                <p class="login-info">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
