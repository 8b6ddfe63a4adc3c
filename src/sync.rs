//! Pure list/selection synchronization rules, kept free of signals so they
//! can be unit tested off the browser.

use crate::models::Conversation;

/// Case-insensitive substring filter over conversation identifiers. This is
/// purely client-side; it never triggers a fetch.
pub fn filter_by_identifier(conversations: &[Conversation], query: &str) -> Vec<Conversation> {
    if query.is_empty() {
        return conversations.to_vec();
    }
    let needle = query.to_lowercase();
    conversations
        .iter()
        .filter(|c| c.identifier.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Whether a selected identifier is still present in a freshly fetched list.
/// When it is not (the conversation was deleted out from under us), the
/// selection and its message pane must be cleared.
pub fn selection_survives(conversations: &[Conversation], identifier: &str) -> bool {
    conversations.iter().any(|c| c.identifier == identifier)
}

/// Whether a resolved detail fetch may be applied: the identifier it was
/// issued for must still be the selected one. A stale response for a
/// previously selected conversation is discarded.
pub fn detail_applies(requested: &str, selected: Option<&str>) -> bool {
    selected == Some(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(identifier: &str) -> Conversation {
        Conversation {
            id: 1,
            identifier: identifier.to_string(),
            medium: "whatsapp".to_string(),
            paused: false,
            created_at: "2024-05-12T14:33:09.000Z".to_string(),
            updated_at: "2024-05-12T14:33:09.000Z".to_string(),
            last_message: None,
        }
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let list = vec![
            conv("5511999998888@c.us"),
            conv("5521888887777@c.us"),
            conv("Group-Support@g.us"),
        ];

        let hits = filter_by_identifier(&list, "5511");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identifier, "5511999998888@c.us");

        let hits = filter_by_identifier(&list, "group-sup");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identifier, "Group-Support@g.us");
    }

    #[test]
    fn empty_query_returns_everything() {
        let list = vec![conv("a@c.us"), conv("b@c.us")];
        assert_eq!(filter_by_identifier(&list, "").len(), 2);
    }

    #[test]
    fn filter_with_no_hits_is_empty() {
        let list = vec![conv("5511999998888@c.us")];
        assert!(filter_by_identifier(&list, "zzz").is_empty());
    }

    #[test]
    fn deleted_selection_does_not_survive_refresh() {
        let list = vec![conv("a@c.us"), conv("b@c.us")];
        assert!(selection_survives(&list, "a@c.us"));
        assert!(!selection_survives(&list, "gone@c.us"));
        assert!(!selection_survives(&[], "a@c.us"));
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        // The user clicked "b" while the fetch for "a" was in flight: only
        // the response for "b" may land.
        assert!(!detail_applies("a@c.us", Some("b@c.us")));
        assert!(detail_applies("b@c.us", Some("b@c.us")));
    }

    #[test]
    fn detail_never_applies_after_selection_cleared() {
        assert!(!detail_applies("a@c.us", None));
    }
}
