use leptos::*;

/// Runs `f` inside a fresh reactive runtime. Resources never start loading,
/// so nothing is spawned outside a browser.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
