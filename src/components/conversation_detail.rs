use leptos::ev;
use leptos::prelude::*;

use crate::format;
use crate::models::{Conversation, Message};
use crate::state::AppState;

/// Detail pane for the selected conversation: header with paused badge,
/// message history and the reply box.
#[component]
pub fn ConversationDetail() -> impl IntoView {
    let state = expect_context::<AppState>();
    let selected = state.selected;

    view! {
        <div class="conversation-details-panel">
            {move || {
                match selected.get() {
                    Some(conv) => view! { <DetailPane conv=conv /> }.into_any(),
                    None => {
                        view! {
                            <div class="no-conversation-selected">
                                <p>"Select a conversation to view its details"</p>
                                <p class="hint">
                                    "You will see the message history and can reply to the contact"
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn DetailPane(conv: Conversation) -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages = state.messages;
    let loading = state.loading_messages;

    let phone = format::format_phone(&conv.identifier);
    let avatar = format::initials(&conv.identifier);
    let paused = conv.paused;

    let identifier = conv.identifier.clone();
    let on_toggle = move |_| state.toggle_pause(identifier.clone(), paused);

    view! {
        <div class="details-header">
            <h2 class="details-title">
                <div class="user-avatar small">
                    <span class="avatar-text">{avatar}</span>
                </div>
                {phone}
                <span class=if paused {
                    "badge badge-warning"
                } else {
                    "badge badge-success"
                }>{if paused { "Paused" } else { "Active" }}</span>
            </h2>
            <div class="details-actions">
                <button class="action-btn secondary-btn" on:click=on_toggle>
                    {if paused { "Resume" } else { "Pause" }}
                </button>
            </div>
        </div>

        <div class="conversation-messages">
            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading messages..."</div> }.into_any()
                } else if messages.get().is_empty() {
                    view! {
                        <div class="empty-state">
                            <h3 class="empty-title">"No messages"</h3>
                            <p class="empty-description">
                                "This conversation has no messages yet"
                            </p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="messages-container">
                            <For each=move || messages.get() key=|m| m.id let:msg>
                                <MessageBubble message=msg />
                            </For>
                        </div>
                    }
                        .into_any()
                }
            }}
            <ReplyBox />
        </div>
    }
}

/// One message, styled by its role (user / assistant / operator).
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = format!("message {}", message.role);
    let time = format::format_timestamp(&message.created_at);

    view! {
        <div class=css_class>
            <div class="message-content">{message.content}</div>
            <div class="message-time">{time}</div>
        </div>
    }
}

/// Input appending an operator reply to the open conversation.
#[component]
fn ReplyBox() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    let send_on_key = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send_on_key();
        }
    };

    view! {
        <div class="reply-box">
            <input
                type="text"
                class="reply-input"
                placeholder="Type a message..."
                prop:value=input
                on:input=move |ev| set_input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="reply-button"
                on:click=move |_| send()
                disabled=move || input.get().trim().is_empty()
            >
                "Send"
            </button>
        </div>
    }
}
