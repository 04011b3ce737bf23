//! Parsing of cross-window checkout messages. The browser's messaging channel
//! is shared process-wide, so events are accepted only when the sender origin
//! belongs to the payment provider; everything else must be ignored without
//! affecting the payment outcome.

/// Signal extracted from a provider `postMessage` payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderEvent {
    Success,
    Error(String),
}

/// Default reason when the provider reports an error without a message.
const DEFAULT_FAILURE_REASON: &str = "Payment failed";

/// Maps a message (sender origin + JSON payload) to a provider event.
/// Returns `None` for foreign origins, malformed payloads, and unrelated
/// message types.
pub fn provider_event(origin: &str, payload: &str, provider_origin: &str) -> Option<ProviderEvent> {
    if provider_origin.is_empty() || !origin.contains(provider_origin) {
        return None;
    }

    let data: serde_json::Value = serde_json::from_str(payload).ok()?;
    let kind = data
        .get("type")
        .or_else(|| data.get("status"))
        .and_then(|value| value.as_str())?;

    match kind {
        "payment_success" | "success" => Some(ProviderEvent::Success),
        "payment_error" | "error" => {
            let reason = data
                .get("message")
                .and_then(|value| value.as_str())
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(DEFAULT_FAILURE_REASON);
            Some(ProviderEvent::Error(reason.to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVIDER: &str = "xsolla.com";

    #[test]
    fn foreign_origins_are_ignored() {
        let payload = r#"{"type":"payment_success"}"#;
        assert_eq!(provider_event("https://evil.example", payload, PROVIDER), None);
        assert_eq!(provider_event("", payload, PROVIDER), None);
    }

    #[test]
    fn success_is_accepted_by_type_or_status() {
        assert_eq!(
            provider_event(
                "https://secure.xsolla.com",
                r#"{"type":"payment_success"}"#,
                PROVIDER
            ),
            Some(ProviderEvent::Success)
        );
        assert_eq!(
            provider_event(
                "https://sandbox-secure.xsolla.com",
                r#"{"status":"success"}"#,
                PROVIDER
            ),
            Some(ProviderEvent::Success)
        );
    }

    #[test]
    fn errors_carry_the_provider_reason() {
        assert_eq!(
            provider_event(
                "https://secure.xsolla.com",
                r#"{"type":"payment_error","message":"Card declined"}"#,
                PROVIDER
            ),
            Some(ProviderEvent::Error("Card declined".to_string()))
        );
    }

    #[test]
    fn errors_without_a_message_use_the_default_reason() {
        assert_eq!(
            provider_event("https://secure.xsolla.com", r#"{"status":"error"}"#, PROVIDER),
            Some(ProviderEvent::Error("Payment failed".to_string()))
        );
    }

    #[test]
    fn malformed_and_unrelated_payloads_are_ignored() {
        assert_eq!(provider_event("https://secure.xsolla.com", "not json", PROVIDER), None);
        assert_eq!(
            provider_event("https://secure.xsolla.com", r#"{"type":"resize"}"#, PROVIDER),
            None
        );
        assert_eq!(
            provider_event("https://secure.xsolla.com", r#"{"count":3}"#, PROVIDER),
            None
        );
    }

    #[test]
    fn empty_provider_origin_never_matches() {
        assert_eq!(
            provider_event("https://secure.xsolla.com", r#"{"status":"success"}"#, ""),
            None
        );
    }
}
