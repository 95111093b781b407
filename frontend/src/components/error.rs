use crate::api::ApiError;
use leptos::*;

/// Error box that also lists per-field validation messages.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = e.field_messages();
                    if !messages.is_empty() {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
