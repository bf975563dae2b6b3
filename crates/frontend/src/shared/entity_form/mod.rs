//! Create and edit pages shared by every managed entity

mod fields;
pub mod model;
pub mod view_model;

pub use fields::selected_files;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::EntityKind;
use contracts::shared::form::{not_found_message, FormMode};
use fields::FieldInput;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use view_model::EntityFormViewModel;

#[component]
pub fn EntityFormPage(kind: EntityKind, mode: FormMode) -> impl IntoView {
    let meta = kind.metadata();
    let vm = EntityFormViewModel::new(kind, mode);
    let navigate = use_navigate();

    // Set once the page is done: record missing or save finished
    let leave = RwSignal::new(false);
    Effect::new(move |_| {
        if leave.get() {
            navigate(&meta.list_route(), Default::default());
        }
    });

    vm.load_if_needed(move || leave.set(true));
    on_cleanup(move || vm.release());

    let title = match mode {
        FormMode::Create => format!("Create {}", meta.ui.element_name),
        FormMode::Edit(_) => format!("Edit {}", meta.ui.element_name),
    };
    let submit_label = match mode {
        FormMode::Create => "Create",
        FormMode::Edit(_) => "Update",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(move || leave.set(true));
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <a class="button button--ghost" href=meta.list_route()>
                    {icon("arrow-left")} {format!(" Back to {}", meta.ui.list_name)}
                </a>
            </PageHeader>

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <div class="form__loading">"Loading..."</div> }
            >
                <form class="form" on:submit=on_submit>
                    {kind
                        .fields()
                        .iter()
                        .filter(|f| f.visible_in_form())
                        .map(|field| view! { <FieldInput field=field vm=vm /> })
                        .collect_view()}
                    <div class="form__actions">
                        <a class="button button--secondary" href=meta.list_route()>"Cancel"</a>
                        <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                            {icon("save")}
                            {move || if vm.saving.get() { " Saving...".to_string() } else { format!(" {}", submit_label) }}
                        </Button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// Edit route whose id is not a number: nothing to load
#[component]
pub fn RecordNotFound(kind: EntityKind) -> impl IntoView {
    let meta = kind.metadata();
    let notifications = use_notifications();
    let navigate = use_navigate();
    Effect::new(move |_| {
        notifications.error(not_found_message(meta));
        navigate(&meta.list_route(), Default::default());
    });
}
