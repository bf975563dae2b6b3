use gloo_timers::future::TimeoutFuture;
use crate::shared::components::ui::Button;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{check_fields, value_of, AuthErrors, AuthInput, AuthValues};
use crate::shared::notifications::use_notifications;
use crate::system::auth::api;
use contracts::system::auth::{RegisterRequest, REGISTER_FIELDS};

const REDIRECT_AFTER_REGISTER_MS: u32 = 1000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let values: AuthValues = RwSignal::new(Default::default());
    let errors: AuthErrors = RwSignal::new(Default::default());
    let (is_loading, set_is_loading) = signal(false);

    let notifications = use_notifications();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !check_fields(REGISTER_FIELDS, values, errors) {
            return;
        }

        let request = RegisterRequest {
            name: value_of(values, "name"),
            email: value_of(values, "email"),
            phone: value_of(values, "phone"),
            password: values.with_untracked(|v| v.get("password").cloned().unwrap_or_default()),
        };
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    notifications.success("Account created successfully");
                    TimeoutFuture::new(REDIRECT_AFTER_REGISTER_MS).await;
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    log::warn!("Registration rejected: {}", e);
                    notifications.error(
                        e.server_message()
                            .unwrap_or("Registration failed")
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
                <h2>"Admin Register"</h2>

                <form on:submit=on_submit novalidate>
                    <AuthInput field=&REGISTER_FIELDS[0] values=values errors=errors disabled=is_loading />
                    <AuthInput field=&REGISTER_FIELDS[1] values=values errors=errors disabled=is_loading />
                    <AuthInput field=&REGISTER_FIELDS[2] values=values errors=errors disabled=is_loading />
                    <AuthInput
                        field=&REGISTER_FIELDS[3]
                        input_type="password"
                        values=values
                        errors=errors
                        disabled=is_loading
                    />

                    <Button button_type="submit" class="auth-form__submit" disabled=Signal::derive(move || is_loading.get())>
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </Button>
                </form>

                <p class="login-info">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
