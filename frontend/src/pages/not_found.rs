use crate::utils::navigation::HOME_PATH;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen w-full flex items-center justify-center bg-surface-muted">
            <div class="mx-2 w-full max-w-md rounded-lg bg-surface-elevated p-6 shadow">
                <h1 class="text-2xl font-bold text-fg">{"404 Page Not Found"}</h1>
                <p class="mt-2 text-sm text-fg-muted">{"The page you are looking for does not exist."}</p>
                <a href=HOME_PATH class="mt-4 inline-block text-sm text-action-primary-bg hover:underline">
                    {"Back to home"}
                </a>
            </div>
        </div>
    }
}
