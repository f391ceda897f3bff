pub mod chat_input;
pub mod message;
pub mod shell;
pub mod sidebar;
pub mod styles;

pub use chat_input::ChatInput;
pub use message::{LoadingIndicator, MessageBubble};
pub use shell::ChatShell;
pub use sidebar::Sidebar;
pub use styles::APP_STYLES;
