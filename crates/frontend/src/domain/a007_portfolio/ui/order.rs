use crate::shared::api_client::{post_json, ApiError};
use crate::shared::components::ui::Button;
use crate::shared::entity_list::load_items;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use contracts::domain::a007_portfolio::UPDATE_ORDER_PATH;
use contracts::domain::common::EntityId;
use contracts::shared::api::OrderUpdate;
use contracts::shared::list::ListState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

/// Persist the full collection order
pub async fn save_order(order: Vec<EntityId>) -> Result<(), ApiError> {
    let count = order.len();
    post_json::<_, Value>(UPDATE_ORDER_PATH, &OrderUpdate { order }).await?;
    log::info!("Portfolio order saved ({} items)", count);
    Ok(())
}

/// "Save Changes" button, shown while the order differs from the server's
#[component]
pub fn OrderSaveBar(state: RwSignal<ListState>, loading: RwSignal<bool>) -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let saving = RwSignal::new(false);

    let on_save = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let order = state.with_untracked(|s| s.ordered_ids());
        saving.set(true);
        spawn_local(async move {
            match save_order(order).await {
                Ok(()) => {
                    notifications.success("Portfolio order updated");
                    // Refetch: the server answers with the persisted order
                    load_items(state, loading, notifications, session);
                }
                Err(e) => {
                    session.handle_error(&e);
                    notifications.error("Failed to save order");
                }
            }
            saving.set(false);
        });
    };

    view! {
        <Show when=move || state.with(|s| s.is_order_dirty())>
            <Button disabled=Signal::derive(move || saving.get()) on_click=Callback::new(on_save)>
                {icon("save")}
                {move || if saving.get() { " Saving..." } else { " Save Changes" }}
            </Button>
        </Show>
    }
}
