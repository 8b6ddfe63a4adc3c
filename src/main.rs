mod api;
mod components;
mod format;
mod models;
mod state;
mod sync;

use gloo_timers::callback::Interval;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::conversation_detail::ConversationDetail;
use components::conversation_list::ConversationList;
use components::header::Header;
use components::stats_cards::StatsCards;
use state::AppState;

/// How often the conversation list and counters are re-fetched.
const POLL_INTERVAL_MS: u32 = 30_000;

/// Root dashboard component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();
    let error = state.error;

    // Initial load, then a fixed-cadence poll. The interval handle is moved
    // into the cleanup closure so teardown always cancels it.
    state.refresh();
    let poll = {
        let state = state.clone();
        send_wrapper::SendWrapper::new(Interval::new(POLL_INTERVAL_MS, move || state.refresh()))
    };
    on_cleanup(move || drop(poll));

    view! {
        <div class="admin-panel">
            <Header />
            {move || {
                error.get().map(|err| {
                    view! { <div class="error-banner">{err}</div> }
                })
            }}
            <StatsCards />
            <div class="main-content">
                <ConversationList />
                <ConversationDetail />
            </div>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
