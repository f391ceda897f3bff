pub mod components;
pub mod interop;
pub mod pages;
pub mod routes;
pub mod session;
pub mod theme;

pub use components::*;
pub use pages::*;
pub use routes::*;
