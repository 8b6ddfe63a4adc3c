use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Conversation, Message, Stats};
use crate::sync;

/// Role under which operator replies are appended to a thread.
const OPERATOR_ROLE: &str = "assistant";

/// Shared dashboard state, provided via Leptos context.
///
/// The backend is the sole source of truth: every refresh replaces the
/// relevant slice of state wholesale, and every mutating action is a server
/// round trip followed by the re-fetches needed to keep list, stats and the
/// selected conversation coherent.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub conversations: ReadSignal<Vec<Conversation>>,
    pub stats: ReadSignal<Stats>,
    /// Identifier of the conversation the operator currently has open.
    /// Set synchronously on click so in-flight detail responses can be
    /// checked against current intent before they are applied.
    pub selected_id: ReadSignal<Option<String>>,
    pub selected: ReadSignal<Option<Conversation>>,
    pub messages: ReadSignal<Vec<Message>>,
    pub search_query: ReadSignal<String>,
    pub loading_messages: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,

    // --- Write signals ---
    pub set_conversations: WriteSignal<Vec<Conversation>>,
    pub set_stats: WriteSignal<Stats>,
    pub set_selected_id: WriteSignal<Option<String>>,
    pub set_selected: WriteSignal<Option<Conversation>>,
    pub set_messages: WriteSignal<Vec<Message>>,
    pub set_search_query: WriteSignal<String>,
    pub set_loading_messages: WriteSignal<bool>,
    pub set_error: WriteSignal<Option<String>>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (conversations, set_conversations) = signal(Vec::<Conversation>::new());
        let (stats, set_stats) = signal(Stats::default());
        let (selected_id, set_selected_id) = signal(None::<String>);
        let (selected, set_selected) = signal(None::<Conversation>);
        let (messages, set_messages) = signal(Vec::<Message>::new());
        let (search_query, set_search_query) = signal(String::new());
        let (loading_messages, set_loading_messages) = signal(false);
        let (error, set_error) = signal(None::<String>);

        let state = Self {
            conversations,
            stats,
            selected_id,
            selected,
            messages,
            search_query,
            loading_messages,
            error,
            set_conversations,
            set_stats,
            set_selected_id,
            set_selected,
            set_messages,
            set_search_query,
            set_loading_messages,
            set_error,
        };

        provide_context(state.clone());
        state
    }

    fn report(&self, action: &str, err: String) {
        log::error!("Failed to {action}: {err}");
        self.set_error.set(Some(format!("Failed to {action}: {err}")));
    }

    /// One poll tick: refresh the list and the aggregate counters.
    pub fn refresh(&self) {
        self.refresh_list();
        self.refresh_stats();
    }

    /// Re-fetch the conversation list, replacing it wholesale. A selected
    /// conversation that vanished from the fresh list (deleted on the
    /// backend) has its selection and message pane cleared.
    pub fn refresh_list(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::fetch_conversations().await {
                Ok(list) => {
                    if let Some(id) = state.selected_id.get_untracked() {
                        if !sync::selection_survives(&list, &id) {
                            state.clear_selection();
                        }
                    }
                    state.set_conversations.set(list);
                }
                Err(e) => state.report("fetch conversations", e),
            }
        });
    }

    /// Re-fetch the aggregate counters, replacing them wholesale.
    pub fn refresh_stats(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(stats) => state.set_stats.set(stats),
                Err(e) => state.report("fetch stats", e),
            }
        });
    }

    /// Open a conversation in the detail pane and load its messages.
    pub fn select_conversation(&self, identifier: String) {
        self.set_selected_id.set(Some(identifier.clone()));
        self.set_loading_messages.set(true);
        self.set_error.set(None);
        self.refresh_detail(identifier);
    }

    /// Re-fetch one conversation plus its messages. The response is applied
    /// only if its identifier is still the selected one when it resolves, so
    /// a stale fetch can neither clobber a newer selection nor repopulate a
    /// pane that a delete just cleared.
    pub fn refresh_detail(&self, identifier: String) {
        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_conversation(&identifier).await;
            let current = state.selected_id.get_untracked();
            if !sync::detail_applies(&identifier, current.as_deref()) {
                log::debug!("Discarding stale detail response for {identifier}");
                return;
            }
            match result {
                Ok(detail) => {
                    state.set_selected.set(Some(detail.thread));
                    state.set_messages.set(detail.messages);
                }
                Err(e) => state.report("fetch conversation detail", e),
            }
            state.set_loading_messages.set(false);
        });
    }

    /// Pause or resume a conversation, then re-sync list, stats and (if it
    /// is the open one) the detail pane.
    pub fn toggle_pause(&self, identifier: String, currently_paused: bool) {
        let state = self.clone();
        spawn_local(async move {
            let result = if currently_paused {
                api::resume_conversation(&identifier).await
            } else {
                api::pause_conversation(&identifier).await
            };
            let action = if currently_paused { "resume" } else { "pause" };
            match result {
                Ok(()) => {
                    log::info!("Conversation {identifier} {action}d");
                    state.refresh_list();
                    state.refresh_stats();
                    if state.selected_id.get_untracked().as_deref() == Some(identifier.as_str()) {
                        state.refresh_detail(identifier);
                    }
                }
                Err(e) => state.report(&format!("{action} conversation"), e),
            }
        });
    }

    /// Delete a conversation after interactive confirmation. Deleting the
    /// open conversation clears the selection locally instead of re-fetching
    /// a now-gone identifier.
    pub fn delete_conversation(&self, identifier: String) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Are you sure you want to delete the conversation {identifier}?"
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let state = self.clone();
        spawn_local(async move {
            match api::delete_conversation(&identifier).await {
                Ok(()) => {
                    log::info!("Conversation {identifier} deleted");
                    if state.selected_id.get_untracked().as_deref() == Some(identifier.as_str()) {
                        state.clear_selection();
                    }
                    state.refresh_list();
                    state.refresh_stats();
                }
                Err(e) => state.report("delete conversation", e),
            }
        });
    }

    /// Append an operator reply to the open conversation, then re-fetch its
    /// detail so the new message shows up.
    pub fn send_message(&self, content: String) {
        let Some(identifier) = self.selected_id.get_untracked() else {
            return;
        };
        let state = self.clone();
        spawn_local(async move {
            match api::send_message(&identifier, &content, OPERATOR_ROLE).await {
                Ok(()) => state.refresh_detail(identifier),
                Err(e) => state.report("send message", e),
            }
        });
    }

    fn clear_selection(&self) {
        self.set_selected_id.set(None);
        self.set_selected.set(None);
        self.set_messages.set(Vec::new());
        self.set_loading_messages.set(false);
    }
}
