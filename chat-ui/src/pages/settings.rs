use dioxus::prelude::*;

use crate::routes::Route;

/// Static settings placeholders; nothing here is persisted yet.
#[component]
pub fn SettingsPage() -> Element {
    rsx! {
        div {
            class: "settings-page",

            header {
                class: "chat-header",
                h1 { "Settings" }
            }

            main {
                class: "settings-main",

                section {
                    class: "settings-section",
                    h2 { "Theme" }
                    div {
                        class: "settings-card",
                        "Dark mode is enabled by default for this app."
                    }
                }

                section {
                    class: "settings-section",
                    h2 { "Account" }
                    div {
                        class: "settings-card",
                        "Placeholder account options. Connect authentication to manage profile settings."
                    }
                }

                div {
                    class: "settings-back",
                    Link {
                        class: "back-link",
                        to: Route::LandingPage {},
                        "Back to Home"
                    }
                }
            }
        }
    }
}
