pub mod chat;
pub mod landing;
pub mod settings;

pub use chat::ChatPage;
pub use landing::LandingPage;
pub use settings::SettingsPage;
