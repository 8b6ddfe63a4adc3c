use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::models::{
    Ack, ApiResponse, ConfigMap, ConfigWrite, Conversation, ConversationDetail,
    ConversationsData, NewMessage, Stats,
};

/// Base URL of the backend API server. Overridable at build time via the
/// `API_BASE_URL` environment variable.
const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Checks the transport-level status and unwraps the `{success, data}`
/// envelope into its payload.
async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }
    resp.json::<ApiResponse<T>>()
        .await
        .map_err(|e| format!("Parse error: {e}"))?
        .into_data()
}

/// Checks a bare `{success}` acknowledgement from a mutating endpoint.
async fn read_ack(resp: Response) -> Result<(), String> {
    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }
    let ack = resp
        .json::<Ack>()
        .await
        .map_err(|e| format!("Parse error: {e}"))?;
    if ack.success {
        Ok(())
    } else {
        Err("Server reported failure".to_string())
    }
}

/// Fetches the full conversation list.
pub async fn fetch_conversations() -> Result<Vec<Conversation>, String> {
    let resp = Request::get(&format!("{API_BASE}/api/conversations"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_envelope::<ConversationsData>(resp)
        .await
        .map(|data| data.conversations)
}

/// Fetches the aggregate conversation counters.
pub async fn fetch_stats() -> Result<Stats, String> {
    let resp = Request::get(&format!("{API_BASE}/api/conversations/stats/metrics"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_envelope(resp).await
}

/// Fetches one conversation together with its message history.
pub async fn fetch_conversation(identifier: &str) -> Result<ConversationDetail, String> {
    let resp = Request::get(&format!("{API_BASE}/api/conversations/{identifier}"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_envelope(resp).await
}

/// Suspends automated responses for a conversation.
pub async fn pause_conversation(identifier: &str) -> Result<(), String> {
    let resp = Request::post(&format!("{API_BASE}/api/conversations/{identifier}/pause"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_ack(resp).await
}

/// Re-enables automated responses for a conversation.
pub async fn resume_conversation(identifier: &str) -> Result<(), String> {
    let resp = Request::post(&format!("{API_BASE}/api/conversations/{identifier}/resume"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_ack(resp).await
}

/// Permanently removes a conversation.
pub async fn delete_conversation(identifier: &str) -> Result<(), String> {
    let resp = Request::delete(&format!("{API_BASE}/api/conversations/{identifier}"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_ack(resp).await
}

/// Appends a message to a conversation under the given role.
pub async fn send_message(identifier: &str, content: &str, role: &str) -> Result<(), String> {
    let body = NewMessage {
        content: content.to_string(),
        role: role.to_string(),
    };

    let resp = Request::post(&format!(
        "{API_BASE}/api/conversations/{identifier}/messages"
    ))
    .json(&body)
    .map_err(|e| format!("Serialize error: {e}"))?
    .send()
    .await
    .map_err(|e| format!("Network error: {e}"))?;

    read_ack(resp).await
}

/// Fetches the whole backend configuration store.
pub async fn fetch_configs() -> Result<ConfigMap, String> {
    let resp = Request::get(&format!("{API_BASE}/api/config"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_envelope(resp).await
}

/// Creates a configuration entry.
pub async fn set_config(key: &str, value: &str, description: Option<&str>) -> Result<(), String> {
    let body = ConfigWrite {
        key: key.to_string(),
        value: value.to_string(),
        description: description.map(|s| s.to_string()),
    };

    let resp = Request::post(&format!("{API_BASE}/api/config"))
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_ack(resp).await
}

/// Updates an existing configuration entry.
pub async fn update_config(
    key: &str,
    value: &str,
    description: Option<&str>,
) -> Result<(), String> {
    let body = ConfigWrite {
        key: key.to_string(),
        value: value.to_string(),
        description: description.map(|s| s.to_string()),
    };

    let resp = Request::put(&format!("{API_BASE}/api/config/{key}"))
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    read_ack(resp).await
}
