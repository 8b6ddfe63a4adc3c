use leptos::prelude::*;

use crate::components::config_modal::ConfigModal;
use crate::components::theme_toggle::ThemeToggle;

/// Top bar: title, theme toggle and the button opening the settings modal.
#[component]
pub fn Header() -> impl IntoView {
    let (config_open, set_config_open) = signal(false);

    view! {
        <header class="header">
            <div class="header-left">
                <div class="logo">
                    <h1>"WhatsApp Bot Admin"</h1>
                </div>
            </div>
            <div class="header-right">
                <ThemeToggle />
                <button class="primary-btn" on:click=move |_| set_config_open.set(true)>
                    "Settings"
                </button>
            </div>
        </header>
        // Mounting the modal lazily makes it reload the config list on open.
        {move || {
            config_open
                .get()
                .then(|| view! { <ConfigModal set_open=set_config_open /> })
        }}
    }
}
