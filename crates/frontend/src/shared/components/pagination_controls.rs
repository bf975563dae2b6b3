use leptos::prelude::*;

/// Previous, one button per page, Next.
///
/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    "Previous"
                </button>
                {move || (1..=total_pages.get()).map(|page| {
                    view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=move || current_page.get() == page
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }
                }).collect_view()}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
