use chat_core::generate_session_id;
use dioxus::prelude::*;

use crate::routes::Route;

/// Entry page with a single action: start a fresh session under a new id.
#[component]
pub fn LandingPage() -> Element {
    let nav = navigator();

    rsx! {
        main {
            class: "landing",
            div {
                class: "landing-card",
                h1 { "Minimal AI Chat" }
                p {
                    class: "landing-tagline",
                    "A modern, professional chat interface. Start a conversation below."
                }
                button {
                    class: "start-button",
                    aria_label: "Start a new chat",
                    onclick: move |_| {
                        let id = generate_session_id();
                        dioxus_logger::tracing::info!("starting session {}", id);
                        nav.push(Route::ChatPage { id });
                    },
                    "Start a chat"
                }
            }
        }
    }
}
