use crate::dashboards::d100_home::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use contracts::dashboards::d100_stats::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Home page: welcome card and entity counters
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    // None until loaded, and after a failed load
    let (stats, set_stats) = signal(None::<DashboardStats>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(err) => {
                    log::error!("Failed to load dashboard stats: {}", err);
                    session.handle_error(&err);
                    notifications.error("Failed to load dashboard stats");
                }
            }
        });
    });

    let cards = DashboardStats::default().cards();

    view! {
        <div class="page">
            <PageHeader title="Dashboard">
                <span></span>
            </PageHeader>

            <div class="welcome-card">
                <h2 class="welcome-card__title">
                    {move || format!("Welcome back, {}!", session.admin_name())}
                </h2>
                <p class="welcome-card__text">
                    "Manage the content of your website from one place."
                </p>
            </div>

            <div class="stat-grid">
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| {
                        let value = Signal::derive(move || {
                            stats.get().and_then(|s| s.cards().get(index).map(|c| c.value))
                        });
                        view! {
                            <StatCard
                                label=card.title
                                icon_name=card.icon
                                value=value
                                href=card.route
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
