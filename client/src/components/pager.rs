//! Previous/next pager under a data table.

use leptos::prelude::*;

use crate::state::table::PageState;

/// Hidden unless there is more than one page of results. Boundary buttons are
/// disabled and their clicks ignored.
#[component]
pub fn Pager(#[prop(into)] page: Signal<PageState>, on_page_change: Callback<u32>) -> impl IntoView {
    let go_prev = move |_| {
        if let Some(target) = page.get_untracked().prev() {
            on_page_change.run(target);
        }
    };
    let go_next = move |_| {
        if let Some(target) = page.get_untracked().next() {
            on_page_change.run(target);
        }
    };

    view! {
        <Show when=move || page.get().pager_visible()>
            <nav class="pager" aria-label="Pagination">
                <span class="pager__range">{move || page.get().range_label()}</span>
                <span class="pager__spacer"></span>
                <button class="btn pager__prev" disabled=move || !page.get().has_prev() on:click=go_prev>
                    "Previous"
                </button>
                <span class="pager__current">
                    {move || {
                        let p = page.get();
                        format!("Page {} of {}", p.page, p.total_pages.max(1))
                    }}
                </span>
                <button class="btn pager__next" disabled=move || !page.get().has_next() on:click=go_next>
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
