//! Draftboard: a League of Legends draft screen as a Zellij plugin.
//!
//! Draftboard fetches the champion roster from a backend once, shows it as a
//! grid of tiles and filters it live as the user types:
//! - One HTTP GET per mounted screen, issued through the Zellij host
//! - Tri-state load lifecycle: `Loading`, then exactly one of `Ready` or `Failed`
//! - Case-insensitive substring filtering on display names, order preserved
//! - Blue and red team panels framing the grid

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ Client Layer  │
//! │ (ui/)         │                       │ (client/)     │
//! │ - Layout      │                       │ - Request     │
//! │ - Theming     │                       │ - Response    │
//! │ - Components  │                       │   parsing     │
//! └───────────────┘                       └───────────────┘
//!         │                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Champion, LoadState, filtering (domain/)         │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/draftboard.wasm" {
//!         endpoint "http://localhost:5000/api/champions"
//!         blue_team "Blue Team"
//!         red_team "Red Team"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use draftboard::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! let Some(Action::FetchChampions(request)) = actions.first() else { unreachable!() };
//!
//! let body = br#"{"success": true, "champions": [
//!     {"champion_id": "Ahri", "name": "Ahri", "icon_url": "https://cdn/Ahri.png"}
//! ]}"#;
//! handle_event(&mut state, &Event::ChampionsReceived {
//!     request_id: request.request_id,
//!     status: 200,
//!     body: body.to_vec(),
//! })?;
//! assert_eq!(state.visible_champions().len(), 1);
//! # Ok::<(), draftboard::DraftError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Direction, Event};
pub use domain::{Champion, DraftError, LoadState, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/draftboard.wasm" {
///     endpoint "http://draft.local:5000/api/champions"
///     blue_team "T1"
///     red_team "Gen.G"
///     theme_file "~/.config/draftboard/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute URL of the champions endpoint.
    pub endpoint: String,

    /// Title of the left team panel.
    pub blue_team: String,

    /// Title of the right team panel.
    pub red_team: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` resolves inside the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: app::DEFAULT_ENDPOINT.to_string(),
            blue_team: "Blue Team".to_string(),
            red_team: "Red Team".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or blank values keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use draftboard::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("endpoint".to_string(), "http://10.0.0.2:5000/api/champions".to_string()),
    ///     ("red_team".to_string(), "  ".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://10.0.0.2:5000/api/champions");
    /// assert_eq!(config.red_team, "Red Team");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            endpoint: get("endpoint").unwrap_or(defaults.endpoint),
            blue_team: get("blue_team").unwrap_or(defaults.blue_team),
            red_team: get("red_team").unwrap_or(defaults.red_team),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Resolves the configured theme, falling back to the default.
    ///
    /// A theme file takes precedence over a theme name.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the state of a freshly loaded plugin from `config`.
///
/// The champion request is not issued here; it follows from
/// [`Event::Mount`] once the host grants web access.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing draftboard plugin");

    AppState::new(
        config.endpoint.clone(),
        config.blue_team.clone(),
        config.red_team.clone(),
        config.resolve_theme(),
    )
}
