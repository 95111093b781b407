use crate::components::{guard::RequireAdmin, layout::Layout};
use crate::pages::{
    admin::AdminPanel,
    leaves::{view_model::use_leaves_reload, ApplyLeavePanel, LeaveRecordsPanel},
};
use crate::state::auth::use_auth;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HomeTab {
    #[default]
    Apply,
    Records,
    Admin,
}

impl HomeTab {
    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::Apply => "Apply Leave",
            HomeTab::Records => "Leave Records",
            HomeTab::Admin => "Admin Panel",
        }
    }
}

/// Tabs visible to the current user; the admin tab is admin-only.
pub fn available_tabs(is_admin: bool) -> Vec<HomeTab> {
    let mut tabs = vec![HomeTab::Apply, HomeTab::Records];
    if is_admin {
        tabs.push(HomeTab::Admin);
    }
    tabs
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    // Owns the reload counter so every tab refetches after a change.
    let _ = use_leaves_reload();
    let active = create_rw_signal(HomeTab::default());
    let tabs = Signal::derive(move || available_tabs(auth.get().is_admin()));

    // Demoted or signed out while on the admin tab.
    create_effect(move |_| {
        if !tabs.get().contains(&active.get_untracked()) {
            active.set(HomeTab::Apply);
        }
    });

    view! {
        <Layout>
            <nav class="mb-6 flex gap-2 border-b border-border" role="tablist">
                <For
                    each=move || tabs.get()
                    key=|tab| *tab
                    children=move |tab: HomeTab| {
                        view! {
                            <button
                                role="tab"
                                aria-selected=move || (active.get() == tab).to_string()
                                class=move || {
                                    if active.get() == tab {
                                        "border-b-2 border-action-primary-bg px-4 py-2 text-sm font-semibold text-fg"
                                    } else {
                                        "border-b-2 border-transparent px-4 py-2 text-sm text-fg-muted hover:text-fg"
                                    }
                                }
                                on:click=move |_| active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    }
                />
            </nav>
            <div role="tabpanel">
                {move || match active.get() {
                    HomeTab::Apply => view! { <ApplyLeavePanel /> }.into_view(),
                    HomeTab::Records => view! { <LeaveRecordsPanel /> }.into_view(),
                    HomeTab::Admin => view! { <RequireAdmin><AdminPanel /></RequireAdmin> }.into_view(),
                }}
            </div>
        </Layout>
    }
}
