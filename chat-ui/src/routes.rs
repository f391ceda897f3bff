//! Client-side route table.
//!
//! Each variant renders the page component of the same name. Session ids
//! come straight from the path; nothing validates them beyond routing.

use dioxus::prelude::*;

use crate::pages::{ChatPage, LandingPage, SettingsPage};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    LandingPage {},

    #[route("/chat/:id")]
    ChatPage { id: String },

    #[route("/settings")]
    SettingsPage {},
}
