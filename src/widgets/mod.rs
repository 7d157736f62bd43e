mod theme_toggle;
mod themed_background;

pub use theme_toggle::ThemeToggle;
pub use themed_background::ThemedBackground;
