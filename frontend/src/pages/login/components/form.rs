use crate::pages::login::utils::CredentialsFormState;
use leptos::*;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border rounded-md placeholder-fg-muted text-fg focus:outline-none focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn EmailPasswordFields(form: CredentialsFormState) -> impl IntoView {
    let email = form.email;
    let password = form.password;
    view! {
        <div>
            <label for="email" class="block text-sm font-medium text-fg">{"Email"}</label>
            <input
                id="email"
                name="email"
                type="email"
                autocomplete="email"
                required
                class=INPUT_CLASS
                placeholder="you@company.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
        </div>
        <div>
            <label for="password" class="block text-sm font-medium text-fg">{"Password"}</label>
            <input
                id="password"
                name="password"
                type="password"
                autocomplete="current-password"
                required
                class=INPUT_CLASS
                placeholder="At least 6 characters"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SubmitButton(pending: Signal<bool>, #[prop(into)] label: String) -> impl IntoView {
    let label = store_value(label);
    view! {
        <button
            type="submit"
            disabled=move || pending.get()
            class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
        >
            {move || if pending.get() { "Please wait...".to_string() } else { label.get_value() }}
        </button>
    }
}

#[component]
pub fn LoginForm(form: CredentialsFormState, pending: Signal<bool>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <EmailPasswordFields form=form />
            <SubmitButton pending=pending label="Sign In" />
        </div>
    }
}
