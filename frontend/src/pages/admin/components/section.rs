use crate::api::Leave;
use crate::components::{
    badges::{LeaveTypeBadge, StatusBadge},
    empty_state::EmptyState,
};
use crate::pages::admin::utils::{Decision, PendingDecision};
use crate::pages::leaves::utils::{format_date_range, leave_days};
use leptos::*;

/// One block of the admin panel. Rows get decision buttons only when
/// `on_decide` is given.
#[component]
pub fn LeaveSection(
    #[prop(into)] title: String,
    #[prop(into)] empty_message: String,
    leaves: Signal<Vec<Leave>>,
    #[prop(optional)] on_decide: Option<Callback<PendingDecision>>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let empty_message = store_value(empty_message);
    view! {
        <section class="bg-surface-elevated shadow rounded-lg">
            <h3 class="border-b border-border px-4 py-3 text-base font-semibold text-fg">
                {title}
                <span class="ml-2 text-sm font-normal text-fg-muted">
                    {move || format!("({})", leaves.get().len())}
                </span>
            </h3>
            <Show
                when=move || !leaves.get().is_empty()
                fallback=move || view! { <EmptyState title=empty_message.get_value() compact=true /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || leaves.get()
                        key=|leave| (leave.id, leave.updated_at)
                        children=move |leave: Leave| {
                            let stored = store_value(leave.clone());
                            let decide = move |decision: Decision| {
                                if let Some(cb) = on_decide {
                                    cb.call(PendingDecision {
                                        leave: stored.get_value(),
                                        decision,
                                    });
                                }
                            };
                            view! {
                                <li class="flex flex-wrap items-center justify-between gap-3 px-4 py-3">
                                    <div class="space-y-1">
                                        <div class="flex items-center gap-2">
                                            <span class="font-medium text-fg">{leave.employee_name.clone()}</span>
                                            <LeaveTypeBadge kind=leave.leave_type />
                                            <StatusBadge status=leave.status />
                                        </div>
                                        <div class="text-sm text-fg-muted">
                                            {format!(
                                                "{} · {} day(s)",
                                                format_date_range(leave.from_date, leave.to_date),
                                                leave_days(leave.from_date, leave.to_date),
                                            )}
                                        </div>
                                        <p class="text-sm text-fg">{leave.reason.clone()}</p>
                                    </div>
                                    <Show when=move || on_decide.is_some() && stored.with_value(|l| l.is_pending())>
                                        <div class="flex gap-2">
                                            <button
                                                class="rounded bg-action-primary-bg px-3 py-1 text-sm text-action-primary-text disabled:opacity-50"
                                                disabled=move || busy.get()
                                                on:click=move |_| decide(Decision::Approve)
                                            >
                                                {Decision::Approve.label()}
                                            </button>
                                            <button
                                                class="rounded bg-action-danger-bg px-3 py-1 text-sm text-action-danger-text disabled:opacity-50"
                                                disabled=move || busy.get()
                                                on:click=move |_| decide(Decision::Reject)
                                            >
                                                {Decision::Reject.label()}
                                            </button>
                                        </div>
                                    </Show>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
