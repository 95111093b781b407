use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::admin::{
    components::{decision_dialog::DecisionDialog, section::LeaveSection, stats::AdminStatsCards},
    utils::PendingDecision,
    view_model::use_admin_view_model,
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    let overview = vm.overview();
    let load_error = vm.load_error();
    let action_error = Signal::derive(move || vm.message.get().error);
    let success = Signal::derive(move || vm.message.get().success);
    let busy: Signal<bool> = vm.decision_action.pending().into();

    let pending = Signal::derive(move || overview.get().pending);
    let approved = Signal::derive(move || overview.get().recent_approved);
    let rejected = Signal::derive(move || overview.get().recent_rejected);
    let stats = Signal::derive(move || overview.get().stats);

    let dialog = vm.dialog;
    let on_decide = Callback::new(move |target: PendingDecision| dialog.set(Some(target)));
    let on_confirm = Callback::new(move |_| vm.confirm());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">{"Admin Panel"}</h2>
                <span class="text-sm text-fg-muted">
                    {move || format!("{} pending", stats.get().pending)}
                </span>
            </div>
            <InlineErrorMessage error=load_error />
            <InlineErrorMessage error=action_error />
            <Show when=move || success.get().is_some()>
                <SuccessMessage message=success.get().unwrap_or_default() />
            </Show>
            <AdminStatsCards stats=stats />
            <LeaveSection
                title="Pending Requests"
                empty_message="No pending requests"
                leaves=pending
                on_decide=on_decide
                busy=busy
            />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <LeaveSection
                    title="Recently Approved"
                    empty_message="No approved requests yet"
                    leaves=approved
                />
                <LeaveSection
                    title="Recently Rejected"
                    empty_message="No rejected requests yet"
                    leaves=rejected
                />
            </div>
            <DecisionDialog target=dialog busy=busy on_confirm=on_confirm />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_all_sections() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <AdminPanel /> }
        });
        assert!(html.contains("Admin Panel"));
        assert!(html.contains("Pending Requests"));
        assert!(html.contains("Recently Approved"));
        assert!(html.contains("Recently Rejected"));
        assert!(html.contains("No pending requests"));
    }
}
