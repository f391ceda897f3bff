//! Session model for the minchat interface
//!
//! These types are used by both:
//! - Dioxus components (WASM)
//! - native unit and integration tests
//!
//! A session lives entirely in memory: it is seeded when the chat view is
//! entered and discarded when the view is left. Nothing here touches the
//! network or any storage.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Types
// ============================================================================

/// Who authored a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique message ID (UUID, except the fixed seed id)
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::stamped(Role::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::stamped(Role::Assistant, content.into())
    }

    fn stamped(role: Role, content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Sidebar entry for one conversation: only what the navigation rail renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Session Transcript
// ============================================================================

/// Greeting every fresh session opens with
pub const GREETING: &str = "Hello! Ask me anything.";

/// Append-only message sequence for one chat session.
///
/// Display order is insertion order; entries are never edited or removed.
/// `push_user` is the only validated entry point: empty or whitespace-only
/// text is rejected without touching state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Transcript opened with the assistant greeting, timestamped slightly
    /// in the past.
    pub fn seeded() -> Self {
        let mut transcript = Self::new();
        transcript.messages.push(Message {
            id: "m1".to_string(),
            role: Role::Assistant,
            content: GREETING.to_string(),
            created_at: Utc::now() - Duration::seconds(20),
        });
        transcript
    }

    /// Append a user message. The text is trimmed first; `None` means the
    /// trimmed text was empty and nothing was appended.
    pub fn push_user(&mut self, text: &str) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.push(Message::user(text)))
    }

    /// Append an assistant message
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &Message {
        self.push(Message::assistant(content))
    }

    fn push(&mut self, message: Message) -> &Message {
        let index = self.messages.len();
        self.messages.push(message);
        &self.messages[index]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Replies
// ============================================================================

/// Canned assistant reply echoing the user's text
pub fn placeholder_reply(user_text: &str) -> String {
    format!("You said: \"{user_text}\". This is a placeholder AI reply.")
}

// ============================================================================
// Identifiers & Titles
// ============================================================================

/// Title used when a session has no derived one
pub const DEFAULT_TITLE: &str = "New Chat";

const SESSION_ID_LEN: usize = 8;
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random 8-character base-36 session identifier, drawn from UUID entropy.
/// Uniqueness is probabilistic; there is no collision check.
pub fn generate_session_id() -> String {
    let mut value = uuid::Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(SESSION_ID_LEN);
    for _ in 0..SESSION_ID_LEN {
        let digit = (value % 36) as usize;
        id.push(BASE36_ALPHABET[digit] as char);
        value /= 36;
    }
    id
}

/// Header/sidebar title for a session: "Chat " plus the first four
/// characters of its id. Ids shorter than four characters keep what exists.
pub fn session_title(session_id: &str) -> String {
    let prefix: String = session_id.chars().take(4).collect();
    format!("Chat {prefix}")
}

// ============================================================================
// Sidebar Seeds
// ============================================================================

/// Fixed id of the seeded "Welcome" conversation
const WELCOME_ID: &str = "welcome";

/// Sidebar entries for a freshly opened session: the fixed "Welcome" chat
/// plus the session itself. Opening the welcome chat itself seeds only the
/// one entry, keeping sidebar ids unique. `updated_at` is seeded once and
/// not refreshed when messages arrive later.
pub fn seed_summaries(session_id: &str, title: &str) -> Vec<ChatSummary> {
    let now = Utc::now();
    let welcome = ChatSummary {
        id: WELCOME_ID.to_string(),
        title: "Welcome".to_string(),
        updated_at: now - Duration::minutes(10),
    };
    if session_id == WELCOME_ID {
        return vec![welcome];
    }
    vec![
        welcome,
        ChatSummary {
            id: session_id.to_string(),
            title: title.to_string(),
            updated_at: now - Duration::seconds(30),
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Test 1: Fresh sessions open with the assistant greeting
    // ============================================================================

    #[test]
    fn test_seeded_transcript_starts_with_greeting() {
        let transcript = Transcript::seeded();

        assert_eq!(transcript.len(), 1);
        let seed = &transcript.messages()[0];
        assert_eq!(seed.role, Role::Assistant);
        assert_eq!(seed.content, GREETING);
        assert_eq!(seed.id, "m1");
        assert!(seed.created_at < Utc::now());
    }

    // ============================================================================
    // Test 2: Sending appends exactly one user message
    // ============================================================================

    #[test]
    fn test_push_user_appends_message() {
        let mut transcript = Transcript::seeded();

        let message = transcript.push_user("Hello world").cloned();

        let message = message.unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "Hello world");
        assert_eq!(transcript.len(), 2);
    }

    // ============================================================================
    // Test 3: User input is trimmed before storage
    // ============================================================================

    #[test]
    fn test_push_user_trims_whitespace() {
        let mut transcript = Transcript::new();

        let message = transcript.push_user("  hi there \n").cloned().unwrap();

        assert_eq!(message.content, "hi there");
    }

    // ============================================================================
    // Test 4: Empty and whitespace-only input is rejected
    // ============================================================================

    #[test]
    fn test_empty_input_rejected() {
        let mut transcript = Transcript::seeded();
        let before = transcript.clone();

        assert!(transcript.push_user("").is_none());
        assert!(transcript.push_user("   ").is_none());
        assert!(transcript.push_user("\t\n").is_none());

        // Transcript unchanged, greeting included
        assert_eq!(transcript, before);
        assert_eq!(transcript.len(), 1);
    }

    // ============================================================================
    // Test 5: Messages keep insertion order
    // ============================================================================

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut transcript = Transcript::new();

        transcript.push_user("first");
        transcript.push_assistant("reply to first");
        transcript.push_user("second");
        transcript.push_assistant("reply to second");

        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(
            contents,
            vec!["first", "reply to first", "second", "reply to second"]
        );
    }

    // ============================================================================
    // Test 6: Every generated message gets a unique id
    // ============================================================================

    #[test]
    fn test_message_ids_unique() {
        let mut transcript = Transcript::seeded();

        for i in 0..10 {
            transcript.push_user(format!("msg {i}").as_str());
            transcript.push_assistant(format!("reply {i}"));
        }

        let mut ids: Vec<&str> = transcript.messages().iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), transcript.len());
    }

    // ============================================================================
    // Test 7: Reply template matches exactly
    // ============================================================================

    #[test]
    fn test_placeholder_reply_template() {
        assert_eq!(
            placeholder_reply("hello"),
            "You said: \"hello\". This is a placeholder AI reply."
        );
        // Quotes in the user text are carried through verbatim
        assert_eq!(
            placeholder_reply("say \"hi\""),
            "You said: \"say \"hi\"\". This is a placeholder AI reply."
        );
    }

    // ============================================================================
    // Test 8: Session titles use the first four id characters
    // ============================================================================

    #[test]
    fn test_session_title_prefix() {
        assert_eq!(session_title("abcd1234"), "Chat abcd");
        assert_eq!(session_title("ab"), "Chat ab");
        assert_eq!(session_title(""), "Chat ");
    }

    // ============================================================================
    // Test 9: Session ids are 8 chars of base-36 and vary
    // ============================================================================

    #[test]
    fn test_generate_session_id_shape() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let id = generate_session_id();
            assert_eq!(id.len(), 8);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
            seen.insert(id);
        }
        assert_eq!(seen.len(), 100);
    }

    // ============================================================================
    // Test 10: Sidebar seeds hold the welcome chat plus the session
    // ============================================================================

    #[test]
    fn test_seed_summaries_contents() {
        let summaries = seed_summaries("abcd1234", "Chat abcd");

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "welcome");
        assert_eq!(summaries[0].title, "Welcome");
        assert_eq!(summaries[1].id, "abcd1234");
        assert_eq!(summaries[1].title, "Chat abcd");
        // Welcome is the older entry
        assert!(summaries[0].updated_at < summaries[1].updated_at);
    }

    // ============================================================================
    // Test 11: Opening the welcome chat seeds a single sidebar entry
    // ============================================================================

    #[test]
    fn test_welcome_session_seeds_single_entry() {
        let summaries = seed_summaries("welcome", "Chat welc");

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "welcome");
        assert_eq!(summaries[0].title, "Welcome");
    }

    // ============================================================================
    // Test 12: Roles serialize to their lowercase wire names
    // ============================================================================

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }
}
