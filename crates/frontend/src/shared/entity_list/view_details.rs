//! Read-only record modal opened from the list "View" action

use crate::shared::api_utils::asset_url;
use crate::shared::components::ui::StatusBadge;
use contracts::domain::a007_portfolio::embed_url;
use contracts::domain::common::EntityRecord;
use contracts::domain::EntityKind;
use contracts::shared::list::ListState;
use contracts::shared::metadata::{ColumnMetadata, FieldKind, FieldMetadata};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Dialog, DialogActions, DialogBody, DialogContent, DialogSurface, DialogTitle};

#[component]
pub fn ViewDetailsModal(kind: EntityKind, state: RwSignal<ListState>, open: RwSignal<bool>) -> impl IntoView {
    let meta = kind.metadata();
    let record = Memo::new(move |_| state.with(|s| s.viewing().cloned()));

    // Closing through the mask or Escape ends viewing as well
    Effect::new(move |_| {
        if !open.get() {
            state.update(|s| s.close_view());
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("{} Details", meta.ui.element_name)}</DialogTitle>
                    <DialogContent>
                        {move || record.get().map(|r| details_view(kind.fields(), r))}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

fn details_view(fields: &'static [FieldMetadata], record: EntityRecord) -> impl IntoView {
    let rows = fields
        .iter()
        .map(|field| {
            let value = field_view(field, &record);
            view! {
                <div class="details__row">
                    <div class="details__label">{field.ui.label}</div>
                    <div class="details__value">{value}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="details">
            <div class="details__row">
                <div class="details__label">"ID"</div>
                <div class="details__value">{record.id}</div>
            </div>
            {rows}
            <div class="details__row">
                <div class="details__label">"Status"</div>
                <div class="details__value"><StatusBadge status=record.status /></div>
            </div>
        </div>
    }
}

fn field_view(field: &FieldMetadata, record: &EntityRecord) -> AnyView {
    match field.kind {
        FieldKind::Image | FieldKind::ImageList { .. } => {
            let paths = record.image_paths(field.name, field.kind);
            if paths.is_empty() {
                return view! { <span>"-"</span> }.into_any();
            }
            view! {
                <div class="details__gallery">
                    {paths.into_iter().map(|path| view! {
                        <img class="details__image" src=asset_url(&path) alt="" />
                    }).collect_view()}
                </div>
            }
            .into_any()
        }
        FieldKind::LinkList => {
            let links = record.list_values(field.name);
            if links.is_empty() {
                return view! { <span>"-"</span> }.into_any();
            }
            view! {
                <div class="details__videos">
                    {links.into_iter().map(|link| view! {
                        <iframe
                            class="details__video"
                            src=embed_url(&link)
                            title="Video preview"
                            allowfullscreen=true
                        ></iframe>
                    }).collect_view()}
                </div>
            }
            .into_any()
        }
        FieldKind::NumberedText { count } => {
            let lines = record.numbered_values(field.name, count);
            view! {
                <ul class="details__list">
                    {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            }
            .into_any()
        }
        _ => {
            let column = ColumnMetadata::new(field.ui.label, field.name, field.kind);
            let text = record.cell_text(&column);
            let text = if text.trim().is_empty() { "-".to_string() } else { text };
            view! { <span>{text}</span> }.into_any()
        }
    }
}
