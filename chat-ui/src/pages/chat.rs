use chat_core::session_title;
use dioxus::prelude::*;

use crate::components::ChatShell;

/// Session route. The id comes verbatim from the path; the shell rebinds
/// its per-session state whenever navigation changes the id.
#[component]
pub fn ChatPage(id: String) -> Element {
    let title = session_title(&id);

    rsx! {
        ChatShell {
            session_id: id,
            title,
        }
    }
}
