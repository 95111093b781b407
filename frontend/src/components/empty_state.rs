use leptos::*;

/// Placeholder for a list with no rows. `compact` is for lists nested in a card.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let class = if compact {
        "px-4 py-6 text-center text-sm text-fg-muted"
    } else {
        "mx-4 my-6 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted px-4 py-10 text-center"
    };
    view! {
        <div class=class>
            <Show when=move || !compact>
                <svg class="mx-auto h-10 w-10 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z" />
                </svg>
            </Show>
            <p class="mt-2 font-medium text-fg">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn compact_variant_drops_the_icon() {
        let html = render_to_string(|| view! { <EmptyState title="No pending requests" compact=true /> });
        assert!(html.contains("No pending requests"));
        assert!(!html.contains("<svg"));

        let html = render_to_string(|| {
            view! { <EmptyState title="No leave records" description="Apply for leave to get started." /> }
        });
        assert!(html.contains("<svg"));
        assert!(html.contains("Apply for leave to get started."));
    }
}
