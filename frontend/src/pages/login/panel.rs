use crate::components::error::InlineErrorMessage;
use crate::pages::login::{
    components::{form::LoginForm, register_form::RegisterForm},
    utils::LoginTab,
    view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.pending();
    let tab = vm.tab;
    let error: Signal<Option<_>> = vm.error.into();

    let tab_button = move |target: LoginTab| {
        view! {
            <button
                type="button"
                class=move || {
                    if tab.get() == target {
                        "flex-1 border-b-2 border-action-primary-bg py-2 text-sm font-semibold text-fg"
                    } else {
                        "flex-1 border-b-2 border-transparent py-2 text-sm text-fg-muted"
                    }
                }
                on:click=move |_| vm.switch_tab(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted py-12 px-4">
            <div class="max-w-md w-full space-y-6 rounded-lg bg-surface-elevated p-8 shadow">
                <div class="text-center">
                    <h1 class="text-2xl font-extrabold text-fg">{"Employee Leave Management"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">{"Sign in to apply for and track your leave"}</p>
                </div>
                <div class="flex">
                    {tab_button(LoginTab::SignIn)}
                    {tab_button(LoginTab::Register)}
                </div>
                <form
                    class="space-y-4"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <InlineErrorMessage error=error />
                    <Show
                        when=move || tab.get() == LoginTab::SignIn
                        fallback=move || view! { <RegisterForm form=vm.form pending=pending /> }
                    >
                        <LoginForm form=vm.form pending=pending />
                    </Show>
                </form>
            </div>
        </div>
    }
}
