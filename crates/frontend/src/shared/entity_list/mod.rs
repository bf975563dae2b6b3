//! List page shared by every managed entity.
//!
//! The page state lives in a single `RwSignal<ListState>`; everything the
//! table shows is derived from it. Network calls go through [`api`].

pub mod api;
mod view_details;

use crate::domain::a007_portfolio::ui::OrderSaveBar;
use crate::shared::api_client::ApiError;
use crate::shared::api_utils::{api_base, asset_url};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_select::StatusSelect;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::Button;
use crate::shared::config::app_config;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::print::print_html;
use crate::system::auth::context::{use_session, SessionContext};
use contracts::domain::common::{EntityId, EntityRecord, EntityStatus};
use contracts::domain::EntityKind;
use contracts::shared::csv::export_selected;
use contracts::shared::list::{
    delete_message, delete_question, status_message, BulkOutcome, ListState,
};
use contracts::shared::metadata::{ColumnMetadata, FieldKind};
use contracts::shared::report::render_report;
use leptos::prelude::*;
use leptos::task::spawn_local;
use view_details::ViewDetailsModal;

/// Load the collection into `state`, reporting failures as toasts
pub fn load_items(
    state: RwSignal<ListState>,
    loading: RwSignal<bool>,
    notifications: Notifications,
    session: SessionContext,
) {
    let meta = state.with_untracked(|s| s.meta());
    loading.set(true);
    spawn_local(async move {
        match api::fetch_all(meta).await {
            Ok(items) => {
                log::debug!("{}: loaded {} records", meta.slug, items.len());
                state.update(|s| s.replace_items(items));
            }
            Err(e) => {
                session.handle_error(&e);
                notifications.error(fetch_error_message(&e, meta.ui.list_name));
            }
        }
        loading.set(false);
    });
}

fn fetch_error_message(error: &ApiError, list_name: &str) -> String {
    match error.server_message() {
        Some(message) => message.to_string(),
        None => format!("Failed to fetch {}", list_name.to_lowercase()),
    }
}

/// Surface a session expiry from any request in a fan-out
fn check_session(results: &api::BulkResults, session: SessionContext) {
    if let Some(e) = api::unauthorized(results) {
        session.handle_error(e);
    }
}

#[component]
pub fn EntityListPage(kind: EntityKind) -> impl IntoView {
    let meta = kind.metadata();
    let notifications = use_notifications();
    let session = use_session();

    let state = RwSignal::new(ListState::new(meta).with_page_size(app_config().list.page_size));
    let loading = RwSignal::new(false);
    let delete_open = RwSignal::new(false);
    let view_open = RwSignal::new(false);
    let drag_from: RwSignal<Option<usize>> = RwSignal::new(None);

    load_items(state, loading, notifications, session);

    // ------------------------------------------------------------------
    // Toolbar actions
    // ------------------------------------------------------------------

    let on_search = Callback::new(move |query: String| state.update(|s| s.set_search(query)));

    let on_download = move |_: leptos::ev::MouseEvent| {
        let result = state.with_untracked(|s| export_selected(s).map_err(|e| e.to_string()));
        match result.and_then(|doc| download_csv(&doc).map(|_| doc)) {
            Ok(doc) => log::info!("{}: exported {} rows", meta.slug, doc.rows),
            Err(message) => notifications.error(message),
        }
    };

    let on_print = move |_: leptos::ev::MouseEvent| {
        let html = state.with_untracked(|s| render_report(meta, &s.page_items(), &api_base()));
        if let Err(e) = print_html(&html) {
            notifications.error(e.to_string());
        }
    };

    // ------------------------------------------------------------------
    // Row actions
    // ------------------------------------------------------------------

    let on_status = move |id: EntityId, status: EntityStatus| {
        let targets = state.with_untracked(|s| s.resolve_targets(id));
        spawn_local(async move {
            let results = api::change_status(meta, &targets, status).await;
            check_session(&results, session);
            let outcome = BulkOutcome::from_results(results);
            state.update(|s| s.apply_status(&outcome.confirmed, status));
            notifications.report(status_message(meta, &outcome, status));
        });
    };

    let on_delete_request = move |id: EntityId| {
        state.update(|s| {
            s.request_delete(id);
        });
        delete_open.set(true);
    };

    let delete_text = Signal::derive(move || {
        state.with(|s| delete_question(s.meta(), s.delete_targets().len()))
    });

    let on_delete_confirm = Callback::new(move |_: ()| {
        let targets = state
            .try_update(|s| s.take_delete_targets())
            .unwrap_or_default();
        if targets.is_empty() {
            return;
        }
        spawn_local(async move {
            let results = api::soft_delete(meta, &targets).await;
            check_session(&results, session);
            let outcome = BulkOutcome::from_results(results);
            state.update(|s| s.remove_ids(&outcome.confirmed));
            notifications.report(delete_message(meta, &outcome));
        });
    });

    let on_delete_cancel = Callback::new(move |_: ()| state.update(|s| s.cancel_delete()));

    let on_view = move |id: EntityId| {
        state.update(|s| s.open_view(id));
        view_open.set(true);
    };

    // ------------------------------------------------------------------
    // Derived view data
    // ------------------------------------------------------------------

    let search_value = Signal::derive(move || state.with(|s| s.search().to_string()));
    let current_page = Signal::derive(move || state.with(|s| s.current_page()));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages()));
    let all_selected = Signal::derive(move || state.with(|s| s.all_selected()));
    let page_rows = Memo::new(move |_| {
        state.with(|s| {
            s.page_items()
                .into_iter()
                .cloned()
                .enumerate()
                .collect::<Vec<(usize, EntityRecord)>>()
        })
    });

    let columns = meta.list.columns;
    let orderable = meta.list.orderable;
    let column_count = columns.len() + 2;

    view! {
        <div class="page">
            <PageHeader title=meta.ui.list_name>
                <a class="button button--ghost" href="/">
                    {icon("arrow-left")} " Back to Dashboard"
                </a>
                <a class="button button--primary" href=meta.create_route()>
                    {icon("plus")} {format!(" Create {}", meta.ui.element_name)}
                </a>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=search_value
                    on_change=on_search
                    placeholder=format!("Search {}...", meta.plural_noun())
                />
                <div class="list-toolbar__actions">
                    <Button variant="secondary" title="Download selected rows as CSV" on_click=Callback::new(on_download)>
                        {icon("download")} " Download"
                    </Button>
                    <Button variant="secondary" title="Print the current page" on_click=Callback::new(on_print)>
                        {icon("printer")} " Print"
                    </Button>
                    {orderable.then(|| view! { <OrderSaveBar state=state loading=loading /> })}
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <TableHeaderCheckbox
                                    checked=all_selected
                                    on_change=Callback::new(move |checked| state.update(|s| s.select_all(checked)))
                                />
                            </th>
                            {columns.iter().map(|c| view! { <th class="table__header-cell">{c.label}</th> }).collect_view()}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || loading.get()>
                            <tr><td class="table__cell table__cell--empty" colspan=column_count.to_string()>"Loading..."</td></tr>
                        </Show>
                        <Show when=move || !loading.get() && page_rows.with(|rows| rows.is_empty())>
                            <tr>
                                <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                                    {format!("No {} found", meta.ui.list_name)}
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || page_rows.get()
                            key=|(index, record)| (*index, record.id, record.status)
                            children=move |(index, record)| {
                                let id = record.id;
                                let selected = Signal::derive(move || state.with(|s| s.is_selected(id)));
                                let fallback = record.status;
                                let status = Signal::derive(move || {
                                    state.with(|s| s.status_of(id).unwrap_or(fallback))
                                });
                                let cells = columns
                                    .iter()
                                    .map(|column| {
                                        cell_view(column, &record, status, move |next| on_status(id, next))
                                    })
                                    .collect_view();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--draggable=orderable
                                        class:table__row--selected=move || selected.get()
                                        draggable=if orderable { "true" } else { "false" }
                                        on:dragstart=move |ev: web_sys::DragEvent| {
                                            if !orderable {
                                                return;
                                            }
                                            drag_from.set(Some(index));
                                            if let Some(dt) = ev.data_transfer() {
                                                let _ = dt.set_data("text/plain", &index.to_string());
                                            }
                                        }
                                        on:dragover=move |ev: web_sys::DragEvent| {
                                            if orderable {
                                                ev.prevent_default();
                                            }
                                        }
                                        on:drop=move |ev: web_sys::DragEvent| {
                                            ev.prevent_default();
                                            if let Some(from) = drag_from.get_untracked() {
                                                state.update(|s| s.reorder_page(from, index));
                                            }
                                            drag_from.set(None);
                                        }
                                        on:dragend=move |_| drag_from.set(None)
                                    >
                                        <td class="table__cell table__cell--checkbox">
                                            <TableCheckbox
                                                checked=selected
                                                on_change=Callback::new(move |checked| state.update(|s| s.set_selected(id, checked)))
                                            />
                                        </td>
                                        {cells}
                                        <td class="table__cell table__cell--actions">
                                            <button class="icon-button" title="View" on:click=move |_| on_view(id)>
                                                {icon("eye")}
                                            </button>
                                            <a class="icon-button" title="Edit" href=meta.edit_route(id)>
                                                {icon("edit")}
                                            </a>
                                            <button class="icon-button icon-button--danger" title="Delete" on:click=move |_| on_delete_request(id)>
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
            />

            <ConfirmDialog
                open=delete_open
                title="Confirm Delete"
                message=delete_text
                confirm_label="Delete"
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />

            <ViewDetailsModal kind=kind state=state open=view_open />
        </div>
    }
}

/// One table cell, shaped by the column kind
fn cell_view(
    column: &ColumnMetadata,
    record: &EntityRecord,
    status: Signal<EntityStatus>,
    on_status: impl Fn(EntityStatus) + Send + Sync + 'static,
) -> AnyView {
    match column.kind {
        FieldKind::Status => view! {
            <td class="table__cell">
                <StatusSelect status=status on_change=Callback::new(on_status) />
            </td>
        }
        .into_any(),
        FieldKind::Image | FieldKind::ImageList { .. } => {
            let thumbnail = record
                .image_paths(column.field, column.kind)
                .into_iter()
                .next()
                .map(|path| view! { <img class="table__thumbnail" src=asset_url(&path) alt="" /> });
            view! {
                <td class="table__cell">
                    {match thumbnail {
                        Some(img) => img.into_any(),
                        None => view! { <span>"-"</span> }.into_any(),
                    }}
                </td>
            }
            .into_any()
        }
        _ => {
            let text = record.cell_text(column);
            let text = if text.trim().is_empty() { "-".to_string() } else { text };
            view! { <td class="table__cell">{text}</td> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_prefers_server_reason() {
        let server = ApiError::Server {
            status: 500,
            message: "Database offline".to_string(),
        };
        assert_eq!(fetch_error_message(&server, "Banners"), "Database offline");
        let network = ApiError::Network("timeout".to_string());
        assert_eq!(fetch_error_message(&network, "Banners"), "Failed to fetch banners");
    }
}
