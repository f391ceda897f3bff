//! Direct DOM access the framework does not mediate.

/// Pin an element's scroll position to its bottom. Keeps the message feed
/// following new entries; outside a browser this is a no-op.
pub fn scroll_to_bottom(element_id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        match document.get_element_by_id(element_id) {
            Some(element) => element.set_scroll_top(element.scroll_height()),
            None => log::warn!("scroll target #{} not found", element_id),
        }
    }
}
