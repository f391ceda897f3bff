//! Per-session state behind the chat shell.
//!
//! Route changes between `/chat/:id` values rerun the same shell scope with
//! a new id prop instead of remounting it, so `use_signal` initializers
//! alone cannot reseed a session. The hook here tracks the id the signals
//! were seeded for and swaps the whole cluster in place when it changes.

use chat_core::{seed_summaries, ChatSummary, Transcript};
use dioxus::prelude::*;

/// Signal cluster owned by one chat shell instance.
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Message feed for the bound session.
    pub transcript: Signal<Transcript>,
    /// Sidebar entries seeded for the bound session.
    pub chats: Signal<Vec<ChatSummary>>,
    /// Replies scheduled but not yet delivered.
    pub pending_replies: Signal<u32>,
    /// Bumped on every rebind. A scheduled reply captures the generation at
    /// send time and must find it unchanged before appending.
    pub generation: Signal<u64>,
    bound_id: Signal<String>,
}

/// Creates the session signals on first render and rebinds them in place
/// whenever `session_id` no longer matches the id they were seeded for.
pub fn use_session_state(session_id: &str, title: &str) -> SessionState {
    let bound_id = use_signal(|| session_id.to_string());
    let transcript = use_signal(Transcript::seeded);
    let chats = use_signal({
        let session_id = session_id.to_string();
        let title = title.to_string();
        move || seed_summaries(&session_id, &title)
    });
    let pending_replies = use_signal(|| 0u32);
    let generation = use_signal(|| 0u64);

    let mut state = SessionState {
        transcript,
        chats,
        pending_replies,
        generation,
        bound_id,
    };
    if state.bound_id.peek().as_str() != session_id {
        state.rebind(session_id, title);
    }
    state
}

impl SessionState {
    /// Point the signals at a new session with fresh seeds and no pending
    /// replies. The generation bump orphans replies still in flight for
    /// the old session.
    fn rebind(&mut self, session_id: &str, title: &str) {
        self.bound_id.set(session_id.to_string());
        self.transcript.set(Transcript::seeded());
        self.chats.set(seed_summaries(session_id, title));
        self.pending_replies.set(0);
        self.generation += 1;
    }
}
