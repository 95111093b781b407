use crate::api::Leave;
use crate::components::badges::{leave_type_label, StatusBadge};
use crate::pages::leaves::utils::{format_date_range, leave_days};
use leptos::*;

#[component]
pub fn LeaveDetailModal(selected: RwSignal<Option<Leave>>) -> impl IntoView {
    view! {
        {move || selected.get().map(|leave| {
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center">
                    <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| selected.set(None)></div>
                    <div class="relative w-full max-w-lg rounded-lg bg-surface-elevated p-6 shadow-xl" role="dialog" aria-modal="true">
                        <div class="flex items-start justify-between">
                            <h3 class="text-lg font-semibold text-fg">{format!("Leave #{}", leave.id)}</h3>
                            <StatusBadge status=leave.status />
                        </div>
                        <dl class="mt-4 grid grid-cols-3 gap-y-2 text-sm">
                            <dt class="text-fg-muted">{"Employee"}</dt>
                            <dd class="col-span-2 text-fg">{leave.employee_name.clone()}</dd>
                            <dt class="text-fg-muted">{"Type"}</dt>
                            <dd class="col-span-2 text-fg">{leave_type_label(leave.leave_type)}</dd>
                            <dt class="text-fg-muted">{"Dates"}</dt>
                            <dd class="col-span-2 text-fg">
                                {format!(
                                    "{} ({} day(s))",
                                    format_date_range(leave.from_date, leave.to_date),
                                    leave_days(leave.from_date, leave.to_date),
                                )}
                            </dd>
                            <dt class="text-fg-muted">{"Reason"}</dt>
                            <dd class="col-span-2 whitespace-pre-wrap text-fg">{leave.reason.clone()}</dd>
                            <dt class="text-fg-muted">{"Submitted"}</dt>
                            <dd class="col-span-2 text-fg">{leave.created_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                            <dt class="text-fg-muted">{"Updated"}</dt>
                            <dd class="col-span-2 text-fg">{leave.updated_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                        </dl>
                        <div class="mt-6 flex justify-end">
                            <button class="rounded border border-border px-4 py-2 text-sm" on:click=move |_| selected.set(None)>
                                {"Close"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::test_support::helpers::sample_leave;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_nothing_until_selected() {
        let html = render_to_string(|| {
            let selected = create_rw_signal(None::<Leave>);
            view! { <LeaveDetailModal selected=selected /> }
        });
        assert!(!html.contains("dialog"));
    }

    #[test]
    fn shows_leave_details() {
        let html = render_to_string(|| {
            let selected = create_rw_signal(Some(sample_leave(7, LeaveStatus::Rejected)));
            view! { <LeaveDetailModal selected=selected /> }
        });
        assert!(html.contains("Leave #7"));
        assert!(html.contains("Rejected"));
        assert!(html.contains("(6 day(s))"));
        assert!(html.contains("Family trip to Goa"));
    }
}
