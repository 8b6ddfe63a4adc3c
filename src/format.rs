//! Display helpers for conversation identifiers, timestamps and previews.
//! All pure string transforms.

/// Longest preview shown in the conversation list before truncation.
const PREVIEW_MAX: usize = 40;

/// Extracts the digit run of a WhatsApp-style `<digits>@c.us` identifier.
fn wa_digits(identifier: &str) -> Option<&str> {
    let prefix = identifier.strip_suffix("@c.us")?;
    let run = prefix
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let digits = &prefix[prefix.len() - run..];
    (!digits.is_empty()).then_some(digits)
}

/// Pretty-prints a phone-style identifier: `5511999998888@c.us` becomes
/// `+55 (11) 99999-8888`. Identifiers without the `@c.us` digit pattern pass
/// through verbatim; digit runs of unexpected length are shown bare.
pub fn format_phone(identifier: &str) -> String {
    let Some(digits) = wa_digits(identifier) else {
        return identifier.to_string();
    };
    if digits.len() == 13 {
        format!(
            "+{} ({}) {}-{}",
            &digits[..2],
            &digits[2..4],
            &digits[4..9],
            &digits[9..13]
        )
    } else {
        digits.to_string()
    }
}

/// Two-character avatar initials: the last two digits of a phone-style
/// identifier, or `WA` when there are none.
pub fn initials(identifier: &str) -> String {
    wa_digits(identifier)
        .filter(|d| d.len() >= 2)
        .map(|d| d[d.len() - 2..].to_string())
        .unwrap_or_else(|| "WA".to_string())
}

/// Renders an ISO-8601 backend timestamp as `DD/MM/YYYY HH:MM`. Anything
/// that does not look like one is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_string();
    };
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return raw.to_string();
    };
    let date_ok = year.len() == 4
        && month.len() == 2
        && day.len() == 2
        && [year, month, day]
            .iter()
            .all(|p| p.bytes().all(|b| b.is_ascii_digit()));
    let clock = time.as_bytes();
    let time_ok = clock.len() >= 5
        && clock[..5]
            .iter()
            .enumerate()
            .all(|(i, &b)| if i == 2 { b == b':' } else { b.is_ascii_digit() });
    if !date_ok || !time_ok {
        return raw.to_string();
    }
    format!("{day}/{month}/{year} {}", &time[..5])
}

/// Truncates a message preview to 40 characters plus an ellipsis.
pub fn format_preview(message: &str) -> String {
    if message.chars().count() > PREVIEW_MAX {
        let cut: String = message.chars().take(PREVIEW_MAX).collect();
        format!("{cut}...")
    } else {
        message.to_string()
    }
}

/// Masks sensitive config values (API keys, URLs) down to their first and
/// last five characters for display.
pub fn mask_config_value(key: &str, value: &str) -> String {
    let sensitive = key.contains("KEY") || key.contains("URL");
    let count = value.chars().count();
    if sensitive && count > 10 {
        let head: String = value.chars().take(5).collect();
        let tail: String = value.chars().skip(count - 5).collect();
        format!("{head}...{tail}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazilian_mobile_number_is_regrouped() {
        assert_eq!(
            format_phone("5511999998888@c.us"),
            "+55 (11) 99999-8888"
        );
    }

    #[test]
    fn non_matching_identifier_passes_through() {
        assert_eq!(format_phone("support-group@g.us"), "support-group@g.us");
        assert_eq!(format_phone("not a phone"), "not a phone");
    }

    #[test]
    fn unexpected_digit_count_is_shown_bare() {
        assert_eq!(format_phone("123456@c.us"), "123456");
    }

    #[test]
    fn initials_are_last_two_digits() {
        assert_eq!(initials("5511999998888@c.us"), "88");
        assert_eq!(initials("something-else"), "WA");
        assert_eq!(initials("7@c.us"), "WA");
    }

    #[test]
    fn long_preview_is_truncated_at_forty_chars() {
        let long = "a".repeat(45);
        let preview = format_preview(&long);
        assert_eq!(preview, format!("{}...", "a".repeat(40)));
        assert_eq!(preview.chars().count(), 43);
    }

    #[test]
    fn short_preview_is_unchanged() {
        assert_eq!(format_preview("tudo bem?"), "tudo bem?");
        assert_eq!(format_preview(""), "");
        let exactly_forty = "b".repeat(40);
        assert_eq!(format_preview(&exactly_forty), exactly_forty);
    }

    #[test]
    fn preview_truncation_respects_char_boundaries() {
        let accented = "á".repeat(41);
        let preview = format_preview(&accented);
        assert_eq!(preview.chars().count(), 43);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn iso_timestamp_renders_day_first() {
        assert_eq!(
            format_timestamp("2024-05-12T15:01:44.000Z"),
            "12/05/2024 15:01"
        );
    }

    #[test]
    fn malformed_timestamp_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp("2024-05-12"), "2024-05-12");
        assert_eq!(format_timestamp("2024-5-12T15:01"), "2024-5-12T15:01");
    }

    #[test]
    fn sensitive_config_values_are_masked() {
        assert_eq!(
            mask_config_value("OPENAI_API_KEY", "sk-abcdefghijklmnop"),
            "sk-ab...lmnop"
        );
        assert_eq!(mask_config_value("BOT_NAME", "atendente"), "atendente");
        // Short secrets are not worth masking.
        assert_eq!(mask_config_value("API_KEY", "short"), "short");
    }
}
