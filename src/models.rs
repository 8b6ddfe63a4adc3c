use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Matches the backend `Conversation` (thread) model. Field names on the wire
/// are camelCase.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Conversation {
    pub id: i64,
    pub identifier: String,
    pub medium: String,
    pub paused: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "lastMessage", default)]
    pub last_message: Option<String>,
}

/// Matches the backend `Message` model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub id: i64,
    pub thread_id: i64,
    pub role: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Aggregate conversation counters from `/api/conversations/stats/metrics`.
/// Missing fields default to zero rather than failing the whole fetch.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Stats {
    #[serde(rename = "totalConversations", default)]
    pub total: u32,
    #[serde(rename = "activeConversations", default)]
    pub active: u32,
    #[serde(rename = "pausedConversations", default)]
    pub paused: u32,
}

/// The `{success, data}` envelope every backend endpoint wraps its payload in.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, turning `success:false` or a missing `data`
    /// field into an error string.
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err("Server reported failure".to_string());
        }
        self.data
            .ok_or_else(|| "Response missing data field".to_string())
    }
}

/// Bare `{success}` acknowledgement returned by mutating endpoints.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// Payload of `GET /api/conversations`.
#[derive(Clone, Debug, Deserialize)]
pub struct ConversationsData {
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub total: u32,
}

/// Payload of `GET /api/conversations/:id`: the thread plus its messages.
#[derive(Clone, Debug, Deserialize)]
pub struct ConversationDetail {
    pub thread: Conversation,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Request body for appending a message to a conversation.
#[derive(Clone, Debug, Serialize)]
pub struct NewMessage {
    pub content: String,
    pub role: String,
}

/// Backend configuration store: key to value. `BTreeMap` keeps the modal
/// table in a stable order across reloads.
pub type ConfigMap = BTreeMap<String, String>;

/// Request body for config set/update.
#[derive(Clone, Debug, Serialize)]
pub struct ConfigWrite {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_list_envelope_parses() {
        let raw = r#"{
            "success": true,
            "data": {
                "conversations": [{
                    "id": 7,
                    "identifier": "5511999998888@c.us",
                    "medium": "whatsapp",
                    "paused": false,
                    "createdAt": "2024-05-12T14:33:09.000Z",
                    "updatedAt": "2024-05-12T15:01:44.000Z",
                    "lastMessage": "ok, obrigado!"
                }],
                "total": 1
            }
        }"#;
        let parsed: ApiResponse<ConversationsData> = serde_json::from_str(raw).unwrap();
        let data = parsed.into_data().unwrap();
        assert_eq!(data.total, 1);
        assert_eq!(data.conversations[0].identifier, "5511999998888@c.us");
        assert!(!data.conversations[0].paused);
        assert_eq!(
            data.conversations[0].last_message.as_deref(),
            Some("ok, obrigado!")
        );
    }

    #[test]
    fn missing_last_message_is_none() {
        let raw = r#"{
            "id": 1,
            "identifier": "abc",
            "medium": "whatsapp",
            "paused": true,
            "createdAt": "x",
            "updatedAt": "y"
        }"#;
        let conv: Conversation = serde_json::from_str(raw).unwrap();
        assert_eq!(conv.last_message, None);
        assert!(conv.paused);
    }

    #[test]
    fn stats_default_to_zero_on_missing_fields() {
        let parsed: ApiResponse<Stats> =
            serde_json::from_str(r#"{"success": true, "data": {"totalConversations": 4}}"#)
                .unwrap();
        let stats = parsed.into_data().unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.paused, 0);
    }

    #[test]
    fn unsuccessful_envelope_is_an_error() {
        let parsed: ApiResponse<Stats> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(parsed.into_data().is_err());
    }

    #[test]
    fn detail_envelope_parses_thread_and_messages() {
        let raw = r#"{
            "success": true,
            "data": {
                "thread": {
                    "id": 3,
                    "identifier": "5511999998888@c.us",
                    "medium": "whatsapp",
                    "paused": true,
                    "createdAt": "2024-05-12T14:33:09.000Z",
                    "updatedAt": "2024-05-12T15:01:44.000Z"
                },
                "messages": [
                    {"id": 10, "thread_id": 3, "role": "user", "content": "oi", "createdAt": "2024-05-12T14:33:10.000Z"},
                    {"id": 11, "thread_id": 3, "role": "assistant", "content": "Olá!", "createdAt": "2024-05-12T14:33:12.000Z"}
                ]
            }
        }"#;
        let parsed: ApiResponse<ConversationDetail> = serde_json::from_str(raw).unwrap();
        let detail = parsed.into_data().unwrap();
        assert!(detail.thread.paused);
        assert_eq!(detail.messages.len(), 2);
        assert_eq!(detail.messages[1].role, "assistant");
        assert_eq!(detail.messages[1].content, "Olá!");
    }

    #[test]
    fn config_write_omits_empty_description() {
        let body = ConfigWrite {
            key: "OPENAI_KEY".to_string(),
            value: "sk-123".to_string(),
            description: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("description"));
    }
}
