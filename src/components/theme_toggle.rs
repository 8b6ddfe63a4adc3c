use leptos::prelude::*;

const THEME_KEY: &str = "theme";

/// Dark/light toggle. The operator's choice is persisted to localStorage and
/// wins over the OS preference on the next visit.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (dark, set_dark) = signal(initial_dark());

    Effect::new(move |_| apply_theme(dark.get()));

    view! {
        <label class="theme-toggle">
            <input
                type="checkbox"
                class="theme-toggle-checkbox"
                prop:checked=dark
                on:change=move |_| set_dark.update(|d| *d = !*d)
            />
            <span class="sun">"☀️"</span>
            <span class="moon">"🌙"</span>
            <span class="theme-toggle-switch"></span>
        </label>
    }
}

/// Saved preference first, then the `prefers-color-scheme` media query.
fn initial_dark() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(saved)) = storage.get_item(THEME_KEY) {
            return saved == "dark";
        }
    }
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(dark: bool) {
    let theme = if dark { "dark" } else { "light" };
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme);
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_KEY, theme);
    }
}
