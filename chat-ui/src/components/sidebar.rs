use chat_core::{generate_session_id, ChatSummary};
use dioxus::prelude::*;

use crate::routes::Route;

/// Navigation rail: new-chat action on top, past conversations in the
/// middle with the active one highlighted, settings pinned to the bottom.
#[component]
pub fn Sidebar(chats: Vec<ChatSummary>, active_id: String) -> Element {
    let nav = navigator();

    rsx! {
        aside {
            class: "sidebar",
            aria_label: "Chat sidebar",

            div {
                class: "sidebar-top",
                button {
                    class: "new-chat-button",
                    aria_label: "Start a new chat",
                    onclick: move |_| {
                        let id = generate_session_id();
                        dioxus_logger::tracing::info!("starting new session {}", id);
                        nav.push(Route::ChatPage { id });
                    },
                    "New Chat"
                }
            }

            // Conversation list
            div {
                class: "chat-list",
                if chats.is_empty() {
                    div { class: "chat-list-empty", "No chats yet" }
                } else {
                    for chat in chats.iter() {
                        Link {
                            key: "{chat.id}",
                            class: if chat.id == active_id { "chat-list-item active" } else { "chat-list-item" },
                            to: Route::ChatPage { id: chat.id.clone() },
                            "{chat.title}"
                        }
                    }
                }
            }

            div {
                class: "sidebar-footer",
                Link {
                    class: "settings-link",
                    to: Route::SettingsPage {},
                    "Settings"
                }
            }
        }
    }
}
