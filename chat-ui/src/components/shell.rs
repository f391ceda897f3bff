use chat_core::{placeholder_reply, DEFAULT_TITLE};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::chat_input::ChatInput;
use super::message::{LoadingIndicator, MessageBubble};
use super::sidebar::Sidebar;
use crate::interop;
use crate::session::use_session_state;

/// Fixed "thinking" pause before the canned reply lands
const REPLY_DELAY_MS: u32 = 400;

/// Full session view: sidebar, header, scrolling message feed, input row.
///
/// Owns the transcript and sidebar entries for one session at a time.
/// Navigating between session ids reruns this scope with a new prop; the
/// session hook reseeds the signals in place and orphans replies still in
/// flight. Leaving the chat routes drops the scope and its scheduled
/// tasks, so a reply never lands in a session the user already left.
#[component]
pub fn ChatShell(session_id: String, title: Option<String>) -> Element {
    let header_title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let state = use_session_state(&session_id, &header_title);
    let mut transcript = state.transcript;
    let chats = state.chats;
    let mut pending_replies = state.pending_replies;
    let generation = state.generation;

    let feed_id = use_signal(|| format!("chat-feed-{}", uuid::Uuid::new_v4()));

    // Scroll to bottom whenever the message count changes
    use_effect(move || {
        let _ = transcript.read().len();
        interop::scroll_to_bottom(&feed_id.read());
    });

    let handle_send = use_callback(move |text: String| {
        // Rejected input schedules no reply
        let content = match transcript.write().push_user(&text) {
            Some(message) => message.content.clone(),
            None => return,
        };
        pending_replies += 1;
        let scheduled_in = *generation.peek();

        spawn(async move {
            TimeoutFuture::new(REPLY_DELAY_MS).await;
            // The session may have been rebound while the delay ran
            if *generation.peek() != scheduled_in {
                return;
            }
            transcript.write().push_assistant(placeholder_reply(&content));
            pending_replies -= 1;
        });
    });

    rsx! {
        div {
            class: "chat-shell",

            Sidebar {
                chats: chats.read().clone(),
                active_id: session_id,
            }

            main {
                class: "chat-main",

                // Header
                header {
                    class: "chat-header",
                    h1 { "{header_title}" }
                }

                // Messages - scrollable area
                div {
                    id: "{feed_id}",
                    class: "message-feed",
                    aria_label: "Chat messages",
                    div {
                        class: "message-list",
                        for message in transcript.read().messages().iter() {
                            MessageBubble { key: "{message.id}", message: message.clone() }
                        }
                        if pending_replies() > 0 {
                            LoadingIndicator {}
                        }
                    }
                }

                // Input area
                div {
                    class: "chat-input-area",
                    ChatInput { on_send: handle_send }
                }
            }
        }
    }
}
