use crate::state::auth::{self, use_auth};
use leptos::*;

/// Up to two initials from a username such as `priya_sharma`.
pub fn user_initials(name: &str) -> String {
    let initials: String = name
        .split(|c: char| c == ' ' || c == '_' || c == '.' || c == '-')
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();
    if initials.is_empty() {
        "U".to_string()
    } else {
        initials.to_uppercase()
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let on_logout = auth::use_logout();

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let email = move || auth.get().user.map(|user| user.email).unwrap_or_default();
    let role_label = move || {
        auth.get()
            .user
            .map(|user| user.role.label())
            .unwrap_or_default()
    };
    let initials = move || user_initials(&username());
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">
                        "Employee Leave Management System"
                    </h1>
                    <div class="relative flex items-center gap-3">
                        <button
                            type="button"
                            class="flex items-center gap-2 rounded-md px-2 py-1 hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="user-menu"
                        >
                            <span class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-sm font-semibold">
                                {initials}
                            </span>
                            <span class="text-sm font-medium text-fg">{username}</span>
                            <Show when=move || auth.get().is_admin()>
                                <span class="text-xs rounded px-2 py-0.5 bg-status-warning-bg text-status-warning-text">
                                    {role_label}
                                </span>
                            </Show>
                        </button>
                        <Show when=move || menu_open.get()>
                            <div
                                id="user-menu"
                                class="absolute right-0 top-12 w-56 rounded-md border border-border bg-surface-elevated shadow-lg py-1"
                            >
                                <p class="px-4 py-2 text-sm text-fg-muted truncate">{email}</p>
                                <button
                                    type="button"
                                    class="w-full text-left px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        on_logout.call(());
                                    }
                                >
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_username_and_admin_badge() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Header /> }
        });
        assert!(html.contains("rajesh_kumar"));
        assert!(html.contains("Admin"));
    }

    #[test]
    fn header_omits_badge_for_employees() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Header /> }
        });
        assert!(html.contains("priya_sharma"));
        assert!(!html.contains("bg-status-warning-bg"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Employee Leave Management System"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
