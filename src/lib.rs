//! Stargazer: a Zellij plugin for searching a public image library.
//!
//! Type a query, get a numbered grid of matching images five at a time, page
//! through them and open any item in a detail overlay showing its
//! description, creation date, keywords and preview link.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Query controller, paginator, selection overlay   │
//! │  - Event handling and key bindings                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ UI Layer (ui/)        │       │ Service Layer         │
//! │ - Rendering           │       │ (service/)            │
//! │ - Theming             │       │ - Request building    │
//! │ - Components          │       │ - Response decoding   │
//! └───────────────────────┘       │ - Permission gate     │
//!                                 └───────────────────────┘
//!         │                                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! 1. **Input**: Zellij key events → `app::map_key` → `app::Event`
//! 2. **Handling**: `app::handle_event` mutates `AppState`, returns `Action`s
//! 3. **Search**: `Action::IssueSearch` → `SearchService::dispatch` → web request
//! 4. **Completion**: web response → `Event::from_web_response` → `handle_event`
//! 5. **Rendering**: `AppState::compute_viewmodel` → `ui::render` → ANSI output
//!
//! Responses are matched to requests by sequence number, so a slow response
//! to an old query can never overwrite the results of a newer one.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod service;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, Focus};
pub use domain::{ResultItem, Result, StargazerError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Base URL of the public image search service.
pub const DEFAULT_ENDPOINT: &str = "https://images-api.nasa.gov";

/// Default tracing filter directive.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from the KDL layout.
///
/// ```kdl
/// plugin location="file:/path/to/stargazer.wasm" {
///     endpoint "https://images-api.nasa.gov"
///     page_size "5"
///     theme "catppuccin-mocha"
///     theme_file "~/themes/dusk.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search service base URL, without a trailing slash.
    pub endpoint: String,

    /// Results per page, at least 1.
    pub page_size: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` refers to the host home.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...).
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: app::DEFAULT_PAGE_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Missing, blank or invalid values fall back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use stargazer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "https://images.example/".to_string());
    /// map.insert("page_size".to_string(), "0".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "https://images.example");
    /// assert_eq!(config.page_size, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|raw| raw.trim())
                .filter(|raw| !raw.is_empty())
        };

        let endpoint = value("endpoint")
            .map(|raw| raw.trim_end_matches('/'))
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        let page_size = value("page_size").map_or(app::DEFAULT_PAGE_SIZE, |raw| {
            parse_page_size(raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default page size");
                app::DEFAULT_PAGE_SIZE
            })
        });

        Self {
            endpoint,
            page_size,
            theme_name: value("theme").map(String::from),
            theme_file: value("theme_file").map(String::from),
            trace_level: value("trace_level")
                .unwrap_or(DEFAULT_TRACE_LEVEL)
                .to_string(),
        }
    }

    /// Resolves the configured theme, falling back to the default on any
    /// failure.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Parses a `page_size` value, which must be a whole number of at least 1.
fn parse_page_size(raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(StargazerError::Config(format!(
            "page_size must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Builds the initial application state for `config`.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size, "initializing stargazer");
    AppState::new(config.page_size, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "https://images.example//"),
            ("page_size", "8"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/dusk.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "https://images.example");
        assert_eq!(config.page_size, 8);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/dusk.toml"));
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn invalid_page_size_falls_back() {
        for raw in ["0", "-3", "five", ""] {
            let config = Config::from_zellij(&map(&[("page_size", raw)]));
            assert_eq!(config.page_size, app::DEFAULT_PAGE_SIZE, "page_size = {raw:?}");
        }
    }

    #[test]
    fn invalid_page_size_is_a_config_error() {
        assert_eq!(parse_page_size("12").unwrap(), 12);
        for raw in ["0", "-1", "lots"] {
            let err = parse_page_size(raw).unwrap_err();
            assert!(matches!(err, StargazerError::Config(_)), "page_size = {raw:?}");
            assert!(err.to_string().contains(raw));
        }
    }

    #[test]
    fn blank_endpoint_falls_back() {
        let config = Config::from_zellij(&map(&[("endpoint", " / ")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn theme_resolution_order() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-frappe");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");

        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "from-file");
    }

    #[test]
    fn initialize_uses_page_size() {
        let config = Config {
            page_size: 3,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.pagination.page_size(), 3);
    }
}
