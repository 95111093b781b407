use crate::api::LeaveType;
use crate::components::{badges::leave_type_label, error::InlineErrorMessage};
use crate::pages::leaves::utils::{LeaveFormState, MessageState, REASON_MAX_CHARS};
use leptos::*;

/// Inputs shared by the apply form and the edit dialog.
#[component]
pub fn LeaveFields(state: LeaveFormState) -> impl IntoView {
    let employee_name = state.employee_name_signal();
    let leave_type = state.leave_type_signal();
    let from_date = state.from_signal();
    let to_date = state.to_signal();
    let reason = state.reason_signal();

    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg" for="employee-name">{"Employee Name"}</label>
                <input
                    id="employee-name"
                    type="text"
                    class="mt-1 w-full rounded border border-form-control-border px-3 py-2"
                    placeholder="Your full name"
                    prop:value=move || employee_name.get()
                    on:input=move |ev| employee_name.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg" for="leave-type">{"Leave Type"}</label>
                <select
                    id="leave-type"
                    class="mt-1 w-full rounded border border-form-control-border px-3 py-2"
                    prop:value=move || leave_type.get()
                    on:change=move |ev| leave_type.set(event_target_value(&ev))
                >
                    {LeaveType::ALL
                        .iter()
                        .map(|kind| {
                            let value = kind.as_str();
                            view! {
                                <option value=value selected=move || leave_type.get() == value>
                                    {leave_type_label(*kind)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="grid grid-cols-2 gap-2">
                <div>
                    <label class="block text-sm font-medium text-fg" for="from-date">{"From"}</label>
                    <input
                        id="from-date"
                        type="date"
                        class="mt-1 w-full rounded border border-form-control-border px-3 py-2"
                        prop:value=move || from_date.get()
                        on:input=move |ev| from_date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="to-date">{"To"}</label>
                    <input
                        id="to-date"
                        type="date"
                        class="mt-1 w-full rounded border border-form-control-border px-3 py-2"
                        prop:min=move || from_date.get()
                        prop:value=move || to_date.get()
                        on:input=move |ev| to_date.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg" for="reason">{"Reason"}</label>
                <textarea
                    id="reason"
                    rows="4"
                    maxlength=REASON_MAX_CHARS.to_string()
                    class="mt-1 w-full rounded border border-form-control-border px-3 py-2"
                    placeholder="At least 10 characters"
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                ></textarea>
                <p class="mt-1 text-right text-xs text-fg-muted">
                    {move || format!("{}/{}", state.reason_length(), REASON_MAX_CHARS)}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn ApplyLeaveForm(
    state: LeaveFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let error = Signal::derive(move || message.get().error);
    let success = Signal::derive(move || message.get().success);

    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <h2 class="text-lg font-semibold text-fg">{"Apply for Leave"}</h2>
            <InlineErrorMessage error=error />
            <Show when=move || success.get().is_some()>
                <div class="rounded border border-status-success-border bg-status-success-bg px-3 py-2 text-sm text-status-success-text">
                    {move || success.get().unwrap_or_default()}
                </div>
            </Show>
            <LeaveFields state=state />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded border border-border px-4 py-2 text-sm"
                    on:click=move |_| {
                        state.reset();
                        message.update(|msg| msg.clear());
                    }
                >
                    {"Reset"}
                </button>
                <button
                    type="submit"
                    class="rounded bg-action-primary-bg px-4 py-2 text-sm text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </div>
        </form>
    }
}
