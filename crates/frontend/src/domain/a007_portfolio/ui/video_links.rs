use crate::shared::entity_form::view_model::EntityFormViewModel;
use crate::shared::icons::icon;
use contracts::domain::a007_portfolio::embed_url;
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;

/// Editable list of video links with an embedded preview per link
#[component]
pub fn VideoLinksEditor(field: &'static FieldMetadata, vm: EntityFormViewModel) -> impl IntoView {
    let name = field.name;
    let links = Memo::new(move |_| vm.form.with(|s| s.links(name)));
    let placeholder = field.ui.placeholder.unwrap_or("https://youtube.com/watch?v=...");

    view! {
        <div class="video-links">
            {move || {
                let rows = links.get();
                let single = rows.len() <= 1;
                rows.into_iter()
                    .enumerate()
                    .map(|(index, link)| {
                        let embed = (!link.trim().is_empty()).then(|| embed_url(&link));
                        view! {
                            <div class="video-links__row">
                                <div class="video-links__input">
                                    <input
                                        class="form__input"
                                        type="url"
                                        placeholder=placeholder
                                        prop:value=link
                                        on:change=move |ev| {
                                            let text = event_target_value(&ev);
                                            vm.form.update(|s| s.set_link(name, index, text));
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="icon-button icon-button--danger"
                                        title="Remove link"
                                        disabled=single
                                        on:click=move |_| vm.form.update(|s| s.remove_link(name, index))
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                                {embed.map(|src| view! {
                                    <iframe
                                        class="video-links__preview"
                                        src=src
                                        title="Video preview"
                                        allowfullscreen=true
                                    ></iframe>
                                })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="button button--secondary"
                on:click=move |_| vm.form.update(|s| s.add_link(name))
            >
                {icon("plus")} " Add Video Link"
            </button>
        </div>
    }
}
