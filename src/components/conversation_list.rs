use leptos::ev;
use leptos::prelude::*;

use crate::format;
use crate::models::Conversation;
use crate::state::AppState;
use crate::sync;

/// Searchable conversation list with per-item pause/resume/delete actions.
#[component]
pub fn ConversationList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let set_search = state.set_search_query;

    // Recomputed on every keystroke and every list refresh; never a fetch.
    let filtered = {
        let state = state.clone();
        Memo::new(move |_| {
            sync::filter_by_identifier(&state.conversations.get(), &state.search_query.get())
        })
    };

    view! {
        <div class="conversations-list">
            <div class="list-header">
                <h2 class="list-title">"Conversations"</h2>
            </div>

            <div class="search-container">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search conversations..."
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="conversations">
                {move || {
                    if filtered.get().is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3 class="empty-title">"No conversations found"</h3>
                                <p class="empty-description">
                                    "Adjust your search term or wait for new conversations"
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <For each=move || filtered.get() key=|c| c.id let:conv>
                                <ConversationItem conv=conv />
                            </For>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ConversationItem(conv: Conversation) -> impl IntoView {
    let state = expect_context::<AppState>();
    let selected_id = state.selected_id;

    let phone = format::format_phone(&conv.identifier);
    let avatar = format::initials(&conv.identifier);
    let updated = format::format_timestamp(&conv.updated_at);
    let preview = format::format_preview(conv.last_message.as_deref().unwrap_or(""));
    let paused = conv.paused;

    let id_select = conv.identifier.clone();
    let select_state = state.clone();
    let on_select = move |_| select_state.select_conversation(id_select.clone());

    let id_toggle = conv.identifier.clone();
    let toggle_state = state.clone();
    let on_toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        toggle_state.toggle_pause(id_toggle.clone(), paused);
    };

    let id_delete = conv.identifier.clone();
    let on_delete = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        state.delete_conversation(id_delete.clone());
    };

    let id_active = conv.identifier.clone();

    view! {
        <div
            class="conversation-item"
            class:selected=move || selected_id.get().as_deref() == Some(id_active.as_str())
            on:click=on_select
        >
            <div class="user-avatar">
                <span class="avatar-text">{avatar}</span>
                <span class=if paused {
                    "status-indicator paused"
                } else {
                    "status-indicator active"
                }></span>
            </div>

            <div class="conversation-details">
                <div class="conversation-header">
                    <h3 class="conversation-name">{phone}</h3>
                    <span class="conversation-time">{updated}</span>
                </div>
                <div class="conversation-preview">{preview}</div>
            </div>

            <div class="conversation-actions">
                <button
                    class=if paused { "action-button resume" } else { "action-button pause" }
                    title=if paused { "Resume" } else { "Pause" }
                    on:click=on_toggle
                >
                    {if paused { "▶" } else { "⏸" }}
                </button>
                <button class="action-button delete" title="Delete" on:click=on_delete>
                    "✕"
                </button>
            </div>
        </div>
    }
}
