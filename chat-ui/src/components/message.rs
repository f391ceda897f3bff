use chat_core::{Message, Role};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// One transcript entry. User messages align right in the accent bubble,
/// assistant messages align left in the surface bubble.
#[component]
pub fn MessageBubble(message: Message) -> Element {
    let is_user = matches!(message.role, Role::User);
    let sender_name = if is_user { "You" } else { "Assistant" };
    let sender_initial = if is_user { "Y" } else { "A" };

    rsx! {
        div {
            class: if is_user { "message-row user-row" } else { "message-row assistant-row" },

            // Avatar
            div {
                class: if is_user { "avatar user-avatar" } else { "avatar assistant-avatar" },
                "{sender_initial}"
            }

            // Message content
            div {
                class: "message-content",

                // Sender name and time
                div {
                    class: "message-header",
                    span { class: "sender-name", "{sender_name}" }
                    span { class: "message-time", "{format_timestamp(message.created_at)}" }
                }

                // Message bubble
                div {
                    class: if is_user { "message-bubble user-bubble" } else { "message-bubble assistant-bubble" },
                    "{message.content}"
                }
            }
        }
    }
}

/// Animated dots shown while a reply is still pending
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "message-row assistant-row",
            div {
                class: "avatar assistant-avatar",
                "A"
            }
            div {
                class: "message-content",
                div {
                    class: "message-header",
                    span { class: "sender-name", "Assistant" }
                }
                div {
                    class: "typing-indicator",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // ============================================================================
    // Test 1: Timestamps render as zero-padded hour and minute
    // ============================================================================

    #[test]
    fn test_format_timestamp_hour_minute() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 42).unwrap();
        assert_eq!(format_timestamp(ts), "09:05");

        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();
        assert_eq!(format_timestamp(ts), "23:59");
    }
}
