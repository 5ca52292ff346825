//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Draftboard library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait,
//! translates Zellij events into library events, and executes the resulting
//! actions against the host API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, permission and
//!    `BeforeClose` events, and request `WebAccess`
//! 3. **Mount**: Once web access is granted, issue the champion request
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//! 6. **Close**: Mark the screen unmounted so late responses are dropped
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::Mount`
//! - `PermissionRequestResult(Denied)` → `Event::FetchUnavailable`
//! - `WebRequestResult` → `Event::ChampionsReceived` (own requests only)
//! - `BeforeClose` → `Event::Unmount`
//!
//! # Keybindings
//!
//! - Printable characters: type into the search box
//! - `Backspace`: delete the last character
//! - `Esc`: clear the search, or hide the plugin when it is empty
//! - Arrow keys: move the selection
//! - `Ctrl+n` / `Ctrl+p`: next / previous tile

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

// Register plugin with Zellij
#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use draftboard::client::{latency_ms_from_context, request_id_from_context, ChampionRequest};
    use draftboard::{handle_event, Action, AppState, Config, Direction, Event};

    /// Plugin state wrapper.
    pub struct State {
        /// Core application state from library layer.
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: draftboard::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Initializes the plugin on load.
        ///
        /// Requests `WebAccess` for the champion fetch. The fetch itself waits
        /// for the permission result.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            draftboard::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(
                endpoint = %config.endpoint,
                theme = ?config.theme_name,
                theme_file = ?config.theme_file,
                "parsed configuration"
            );
            self.app = draftboard::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
                EventType::BeforeClose,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        /// Handles incoming Zellij events.
        ///
        /// Returns `true` if the UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::event_name(&event);
            let span = tracing::debug_span!(
                "plugin_update_event",
                otel.name = %format!("plugin_update::{event_name}"),
                event_type = %event_name
            );
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    Self::map_permission_result(status)
                }
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    match Self::map_web_result(status, body, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::BeforeClose => Event::Unmount,
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for a in actions {
                        Self::execute_action(&a);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.app.resize(rows, cols);
            draftboard::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
                _ => "Other".to_string(),
            }
        }

        /// Maps keyboard events to application events.
        fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
            let ctrl = key.key_modifiers.contains(&KeyModifier::Ctrl);

            if ctrl {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::Move(Direction::Right)),
                    BareKey::Char('p') => Some(Event::Move(Direction::Left)),
                    _ => None,
                };
            }

            Some(match key.bare_key {
                BareKey::Left => Event::Move(Direction::Left),
                BareKey::Right => Event::Move(Direction::Right),
                BareKey::Up => Event::Move(Direction::Up),
                BareKey::Down => Event::Move(Direction::Down),
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !key.key_modifiers.contains(&KeyModifier::Alt) => Event::Char(c),
                _ => return None,
            })
        }

        fn map_permission_result(status: PermissionStatus) -> Event {
            match status {
                PermissionStatus::Granted => {
                    tracing::debug!("web access granted");
                    Event::Mount
                }
                PermissionStatus::Denied => {
                    tracing::warn!("web access denied - champions cannot be loaded");
                    Event::FetchUnavailable {
                        reason: "web access permission denied".to_string(),
                    }
                }
            }
        }

        /// Maps web request results to application events.
        ///
        /// Responses without a Draftboard request id belong to other code paths
        /// and are ignored.
        fn map_web_result(
            status: u16,
            body: Vec<u8>,
            context: &BTreeMap<String, String>,
        ) -> Option<Event> {
            let Some(request_id) = request_id_from_context(context) else {
                tracing::debug!("ignoring web result without a request id");
                return None;
            };

            tracing::info!(
                status,
                body_len = body.len(),
                latency_ms = latency_ms_from_context(context),
                request_id,
                "champion response received"
            );

            Some(Event::ChampionsReceived {
                request_id,
                status,
                body,
            })
        }

        /// Executes an action returned from event handling.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::FetchChampions(request) => {
                    web_request(
                        request.url.clone(),
                        HttpVerb::Get,
                        ChampionRequest::headers(),
                        vec![],
                        request.to_context(),
                    );
                }
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("draftboard is a Zellij plugin; build it for wasm32-wasip1 and load the .wasm from Zellij");
}
