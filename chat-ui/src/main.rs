use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use chat_ui::components::APP_STYLES;
use chat_ui::theme::DEFAULT_TOKENS;
use chat_ui::Route;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        style { {DEFAULT_TOKENS} }
        style { {APP_STYLES} }
        Router::<Route> {}
    }
}
