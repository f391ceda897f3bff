//! Dark-theme CSS tokens, injected once at the app root.
//!
//! Component stylesheets consume these through `var(--token, #fallback)`
//! so the palette stays swappable in one place.

pub const DEFAULT_TOKENS: &str = r#"
:root {
    /* Surfaces */
    --background: #0F1115;
    --sidebar-bg: #1A1D23;
    --sidebar-hover: #2A2E38;
    --input-bg: #111827;

    /* Text */
    --primary-text: #E5E7EB;
    --secondary-text: #9CA3AF;
    --input-text: #F9FAFB;

    /* Bubbles */
    --assistant-bubble: #1F2937;
    --user-bubble: #374151;

    /* Accents */
    --border-color: #2D2D2D;
    --button-bg: #2563EB;
    --button-hover-bg: #1D4ED8;
}
"#;
