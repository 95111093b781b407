use crate::api::Leave;
use crate::components::error::InlineErrorMessage;
use crate::pages::leaves::{
    components::form::LeaveFields,
    utils::{LeaveFormState, MessageState},
};
use leptos::*;

#[component]
pub fn LeaveEditModal(
    editing: RwSignal<Option<Leave>>,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let error = Signal::derive(move || message.get().error);
    view! {
        <Show when=move || editing.get().is_some()>
            <div class="fixed inset-0 z-50 flex items-center justify-center">
                <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| on_cancel.call(())></div>
                <div class="relative w-full max-w-2xl rounded-lg bg-surface-elevated p-6 shadow-xl" role="dialog" aria-modal="true">
                    <h3 class="mb-4 text-lg font-semibold text-fg">
                        {move || editing.get().map(|leave| format!("Edit Leave #{}", leave.id)).unwrap_or_default()}
                    </h3>
                    <InlineErrorMessage error=error />
                    <LeaveFields state=form />
                    <div class="mt-6 flex justify-end gap-2">
                        <button
                            class="rounded border border-border px-4 py-2 text-sm"
                            on:click=move |_| on_cancel.call(())
                        >
                            {"Cancel"}
                        </button>
                        <button
                            class="rounded bg-action-primary-bg px-4 py-2 text-sm text-action-primary-text disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_save.call(())
                        >
                            {move || if pending.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
