//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are embedded TOML files; custom themes are loaded from a
//! TOML file given in the plugin configuration.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#89dceb"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#45475a"
//! search_bar_focus = "#89dceb"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! loading_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! image_marker_fg = "#a6e3a1"
//! overlay_border = "#cba6f7"
//! overlay_label_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use stargazer::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").expect("built-in theme");
//! print!("{}{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, StargazerError};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Result row under the cursor.
    pub cursor_fg: String,
    pub cursor_bg: String,

    pub text_normal: String,
    /// Footer, dates and other secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Search bar border while the query box has focus.
    pub search_bar_focus: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    pub loading_fg: String,
    pub error_fg: String,

    /// Marker shown next to items that have a preview image.
    pub image_marker_fg: String,

    pub overlay_border: String,
    /// Field labels inside the detail overlay.
    pub overlay_label_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StargazerError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            StargazerError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            StargazerError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Parses `#rrggbb` (the `#` is optional); anything else renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the embedded default theme fails to parse, which the tests
    /// below rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("ff0000"), "\u{1b}[48;2;255;0;0m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_theme_from_file() {
        let builtin = Theme::default();
        let mut custom = builtin.clone();
        custom.name = "custom".to_string();
        custom.colors.error_fg = "#ff0000".to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nheader_fg = 3\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StargazerError::Theme(_)));

        let err = Theme::from_file("/nonexistent/stargazer-theme.toml").unwrap_err();
        assert!(matches!(err, StargazerError::Theme(_)));
    }
}
