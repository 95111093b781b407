use crate::pages::admin::utils::{Decision, PendingDecision};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Confirmation step before approving or rejecting a leave.
#[component]
pub fn DecisionDialog(
    target: RwSignal<Option<PendingDecision>>,
    busy: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let close = move || {
        if !busy.get_untracked() {
            target.set(None);
        }
    };

    view! {
        {move || target.get().map(|pending| {
            let decision = pending.decision;
            let confirm_class = match decision {
                Decision::Approve => "rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50",
                Decision::Reject => "rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50",
            };
            view! {
                <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute inset-0 bg-overlay-backdrop"
                        on:click=move |_| close()
                    ></button>
                    <div
                        class="relative z-[71] w-full max-w-md space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-xl"
                        role="dialog"
                        aria-modal="true"
                        tabindex="-1"
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ev.prevent_default();
                                close();
                            }
                        }
                    >
                        <h2 class="text-lg font-semibold text-fg">{decision.confirm_title()}</h2>
                        <p class="text-sm text-fg-muted">{decision.confirm_message(&pending.leave)}</p>
                        <div class="flex justify-end gap-2">
                            <button
                                type="button"
                                class="rounded-md border border-border px-4 py-2 text-sm"
                                disabled=move || busy.get()
                                on:click=move |_| close()
                            >
                                {"Cancel"}
                            </button>
                            <button
                                type="button"
                                class=confirm_class
                                disabled=move || busy.get()
                                on:click=move |_| on_confirm.call(())
                            >
                                {move || if busy.get() { "Working...".to_string() } else { decision.label().to_string() }}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
