use crate::api::LeavePage;
use crate::pages::leaves::utils::{page_label, RecordsFilterState};
use leptos::*;

#[component]
pub fn Pagination(page: Signal<Option<LeavePage>>, filter: RecordsFilterState) -> impl IntoView {
    let has_previous = move || page.get().map(|p| p.has_previous()).unwrap_or(false);
    let has_next = move || page.get().map(|p| p.has_next()).unwrap_or(false);
    let total_pages = move || page.get().map(|p| p.total_pages).unwrap_or(0);

    view! {
        <div class="flex items-center justify-between px-4 py-3 text-sm text-fg">
            <span>
                {move || page.get().map(|p| format!("{} leave(s)", p.total_count)).unwrap_or_default()}
            </span>
            <div class="flex items-center gap-3">
                <button
                    class="rounded border border-border px-3 py-1 disabled:opacity-50"
                    disabled=move || !has_previous()
                    on:click=move |_| filter.previous_page()
                >
                    {"Previous"}
                </button>
                <span>
                    {move || page.get().map(|p| page_label(p.current_page, p.total_pages)).unwrap_or_default()}
                </span>
                <button
                    class="rounded border border-border px-3 py-1 disabled:opacity-50"
                    disabled=move || !has_next()
                    on:click=move |_| filter.next_page(total_pages())
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
