//! Todo frontend library: theme preference, controller, platform seams, UI.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod platform;
pub mod store;
pub mod surface;
pub mod theme;
pub mod widgets;
pub mod worker;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
