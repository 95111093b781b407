use crate::pages::admin::utils::AdminStats;
use leptos::*;

#[component]
fn StatCard(#[prop(into)] label: String, value: Signal<i64>, accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border p-4 {}", accent)>
            <div class="text-sm font-medium">{label}</div>
            <div class="mt-1 text-2xl font-bold">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn AdminStatsCards(stats: Signal<AdminStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
            <StatCard
                label="Pending"
                value=Signal::derive(move || stats.get().pending)
                accent="border-status-warning-border bg-status-warning-bg text-status-warning-text"
            />
            <StatCard
                label="Approved"
                value=Signal::derive(move || stats.get().approved)
                accent="border-status-success-border bg-status-success-bg text-status-success-text"
            />
            <StatCard
                label="Rejected"
                value=Signal::derive(move || stats.get().rejected)
                accent="border-status-error-border bg-status-error-bg text-status-error-text"
            />
            <StatCard
                label="Total"
                value=Signal::derive(move || stats.get().total())
                accent="border-border bg-surface-muted text-fg"
            />
        </div>
    }
}
