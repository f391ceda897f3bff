use dioxus::prelude::*;

/// Message entry row. Enter or the Send button submits; the submitted text
/// is trimmed, empty submissions are dropped, and a successful submit
/// clears the field.
#[component]
pub fn ChatInput(on_send: Callback<String>) -> Element {
    let mut draft = use_signal(String::new);

    let submit = use_callback(move |_: ()| {
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        on_send.call(text);
        draft.set(String::new());
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            e.prevent_default();
            submit.call(());
        }
    });

    let oninput = use_callback(move |e: FormEvent| {
        draft.set(e.value());
    });

    rsx! {
        div {
            class: "chat-input-bar",

            input {
                class: "chat-input",
                r#type: "text",
                placeholder: "Send a message…",
                aria_label: "Message input",
                value: "{draft}",
                oninput,
                onkeydown,
            }
            button {
                class: "send-button",
                aria_label: "Send message",
                disabled: draft.read().trim().is_empty(),
                onclick: move |_| submit.call(()),
                "Send"
            }
        }
    }
}
