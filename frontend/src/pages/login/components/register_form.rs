use crate::pages::login::{
    components::form::{EmailPasswordFields, SubmitButton},
    utils::CredentialsFormState,
};
use leptos::*;

#[component]
pub fn RegisterForm(form: CredentialsFormState, pending: Signal<bool>) -> impl IntoView {
    let username = form.username;
    view! {
        <div class="space-y-4">
            <div>
                <label for="username" class="block text-sm font-medium text-fg">{"Username"}</label>
                <input
                    id="username"
                    name="username"
                    type="text"
                    autocomplete="username"
                    required
                    class="appearance-none relative block w-full px-3 py-2 border border-form-control-border rounded-md placeholder-fg-muted text-fg sm:text-sm"
                    placeholder="Letters, digits and underscores"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>
            <EmailPasswordFields form=form />
            <SubmitButton pending=pending label="Create Account" />
        </div>
    }
}
