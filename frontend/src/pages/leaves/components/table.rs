use crate::api::{Leave, UserResponse};
use crate::components::badges::{LeaveTypeBadge, StatusBadge};
use crate::pages::leaves::utils::{can_edit, format_date_range, leave_days};
use leptos::*;

#[component]
pub fn LeavesTable(
    leaves: Signal<Vec<Leave>>,
    current_user: Signal<Option<UserResponse>>,
    on_view: Callback<Leave>,
    on_edit: Callback<Leave>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">{"Employee"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">{"Type"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">{"Dates"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">{"Days"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">{"Status"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border bg-surface-elevated">
                    <For
                        each=move || leaves.get()
                        key=|leave| (leave.id, leave.updated_at)
                        children=move |leave: Leave| {
                            let editable = can_edit(&leave, current_user.get_untracked().as_ref());
                            let stored = store_value(leave.clone());
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-4 py-3 text-sm text-fg">{leave.employee_name.clone()}</td>
                                    <td class="px-4 py-3 text-sm"><LeaveTypeBadge kind=leave.leave_type /></td>
                                    <td class="px-4 py-3 text-sm text-fg">
                                        {format_date_range(leave.from_date, leave.to_date)}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-fg">
                                        {leave_days(leave.from_date, leave.to_date)}
                                    </td>
                                    <td class="px-4 py-3 text-sm"><StatusBadge status=leave.status /></td>
                                    <td class="px-4 py-3 text-sm">
                                        <div class="flex gap-3">
                                            <button
                                                class="text-action-primary-bg hover:underline"
                                                on:click=move |_| on_view.call(stored.get_value())
                                            >
                                                {"View"}
                                            </button>
                                            <Show when=move || editable>
                                                <button
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(stored.get_value())
                                                >
                                                    {"Edit"}
                                                </button>
                                            </Show>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
