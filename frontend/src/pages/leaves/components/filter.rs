use crate::api::{LeaveStatus, StatusFilter};
use crate::pages::leaves::utils::RecordsFilterState;
use leptos::*;

#[component]
pub fn StatusFilterSelect(filter: RecordsFilterState) -> impl IntoView {
    let status = filter.status_signal();
    view! {
        <label class="flex items-center gap-2 text-sm text-fg">
            <span>{"Status"}</span>
            <select
                class="rounded border border-form-control-border px-2 py-1"
                prop:value=move || status.get().as_query_value()
                on:change=move |ev| filter.set_status(StatusFilter::from_select(&event_target_value(&ev)))
            >
                <option value="all">{"All"}</option>
                {LeaveStatus::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
