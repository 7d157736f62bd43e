//! Theme preference and the palette each theme selects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display mode persisted under the preference key and mirrored on the root attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme a toggle switches to, given the raw attribute value.
    /// Only an exact `"dark"` counts as dark; anything else (missing included) flips to dark.
    pub fn next_after(marker: Option<&str>) -> Self {
        if marker == Some(Theme::Dark.as_str()) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Material 3 style colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub on_primary: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
    pub outline: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#6750A4",
        on_primary: "#FFFFFF",
        surface: "#FFFBFE",
        on_surface: "#1C1B1F",
        outline: "#79747E",
    };

    pub const DARK: Palette = Palette {
        primary: "#D0BCFF",
        on_primary: "#381E72",
        surface: "#1C1B1F",
        on_surface: "#E6E1E5",
        outline: "#938F99",
    };

    fn css_vars(&self) -> String {
        format!(
            "--primary: {}; --on-primary: {}; --surface: {}; --on-surface: {}; --outline: {};",
            self.primary, self.on_primary, self.surface, self.on_surface, self.outline
        )
    }
}

/// 8dp grid spacing (Material 3).
pub mod spacing {
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
}

/// Stylesheet keyed on `attribute`: light values on `:root`, dark values on `[attribute="dark"]`.
pub fn stylesheet(attribute: &str) -> String {
    format!(
        ":root, [{attr}=\"{light}\"] {{ {light_vars} }}\n[{attr}=\"{dark}\"] {{ {dark_vars} }}\n",
        attr = attribute,
        light = Theme::Light,
        dark = Theme::Dark,
        light_vars = Theme::Light.palette().css_vars(),
        dark_vars = Theme::Dark.palette().css_vars(),
    )
}
