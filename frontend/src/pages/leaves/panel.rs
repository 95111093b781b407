use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, SuccessMessage},
};
use crate::pages::leaves::{
    components::{
        detail_modal::LeaveDetailModal, edit_modal::LeaveEditModal, filter::StatusFilterSelect,
        form::ApplyLeaveForm, pagination::Pagination, table::LeavesTable,
    },
    view_model::{ApplyLeaveViewModel, RecordsViewModel},
};
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn ApplyLeavePanel() -> impl IntoView {
    let vm = ApplyLeaveViewModel::new();
    let pending = vm.apply_action.pending();
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <ApplyLeaveForm
            state=vm.form
            message=vm.message
            pending=pending.into()
            on_submit=on_submit
        />
    }
}

#[component]
pub fn LeaveRecordsPanel() -> impl IntoView {
    let vm = RecordsViewModel::new();
    let (auth, _) = use_auth();
    let current_user = Signal::derive(move || auth.get().user);
    let page = vm.page();
    let load_error = vm.load_error();
    let loading = vm.leaves_resource.loading();
    let leaves = Signal::derive(move || page.get().map(|p| p.leaves).unwrap_or_default());
    let success = Signal::derive(move || vm.message.get().success);
    let update_pending = vm.update_action.pending();

    let on_save = Callback::new(move |_| vm.save_edit());
    let on_cancel = Callback::new(move |_| vm.cancel_edit());

    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <div class="flex flex-wrap items-center justify-between gap-3 border-b border-border px-4 py-4">
                <h2 class="text-lg font-semibold text-fg">
                    {move || if auth.get().is_admin() { "All Leave Records" } else { "My Leave Records" }}
                </h2>
                <StatusFilterSelect filter=vm.filter />
            </div>
            <div class="px-4">
                <Show when=move || success.get().is_some()>
                    <SuccessMessage message=success.get().unwrap_or_default() />
                </Show>
                <InlineErrorMessage error=load_error />
            </div>
            <Show
                when=move || !loading.get() || page.get().is_some()
                fallback=|| view! { <div class="px-4 py-6"><LoadingSpinner /></div> }
            >
                <Show
                    when=move || !leaves.get().is_empty()
                    fallback=move || {
                        if load_error.get().is_some() {
                            ().into_view()
                        } else {
                            view! {
                                <EmptyState
                                    title="No leave records"
                                    description="Leaves matching the selected status will appear here."
                                />
                            }
                            .into_view()
                        }
                    }
                >
                    <LeavesTable
                        leaves=leaves
                        current_user=current_user
                        on_view=vm.on_view()
                        on_edit=vm.on_edit()
                    />
                </Show>
            </Show>
            <Pagination page=page filter=vm.filter />
        </div>
        <LeaveDetailModal selected=vm.selected />
        <LeaveEditModal
            editing=vm.editing
            form=vm.edit_form
            message=vm.edit_message
            pending=update_pending.into()
            on_save=on_save
            on_cancel=on_cancel
        />
    }
}
