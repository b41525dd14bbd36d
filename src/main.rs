//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Stargazer
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait, owns the host web requests, and translates host events into
//! library events.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; searches issued before the answer are held
//! 3. **Subscribe**: Register for Key, `WebRequestResult`, `PermissionRequestResult` events
//! 4. **Update**: Handle events, delegate to library layer, execute actions
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → `stargazer::map_key` (depends on focus and overlay)
//! - `WebRequestResult` → `Event::SearchCompleted { seq, outcome }`
//! - `PermissionRequestResult(Denied)` → `Event::SearchCompleted` failure for any held search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use stargazer::service::{PermissionGate, SearchRequest, SearchService, TraceContext};
use stargazer::{handle_event, map_key, Action, Config, Event};

register_plugin!(State);

/// Sends search requests through the host's web request API.
#[derive(Debug)]
struct ZellijSearchService {
    endpoint: String,
}

impl SearchService for ZellijSearchService {
    fn dispatch(&mut self, request: &SearchRequest) -> stargazer::Result<()> {
        let url = request.url(&self.endpoint);
        tracing::debug!(seq = %request.seq, url = %url, "issuing web request");

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        web_request(url, HttpVerb::Get, headers, vec![], request.context());
        Ok(())
    }
}

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific transport.
struct State {
    /// Core application state from library layer.
    app: stargazer::AppState,

    /// Search transport, gated on the web access permission.
    service: PermissionGate<ZellijSearchService>,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: stargazer::initialize(&default_config),
            service: PermissionGate::new(ZellijSearchService {
                endpoint: default_config.endpoint,
            }),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` to reach the search service.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = stargazer::observability::init_tracing(&config) {
            eprintln!("stargazer: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size, "parsed configuration");
        self.app = stargazer::initialize(&config);
        self.service = PermissionGate::new(ZellijSearchService {
            endpoint: config.endpoint,
        });

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");

        // Responses continue the trace of the span that issued the request.
        let _remote_parent = match &event {
            zellij_tile::prelude::Event::WebRequestResult(_, _, _, context) => {
                TraceContext::read_from(context).and_then(|trace| trace.attach())
            }
            _ => None,
        };

        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                tracing::debug!(bare_key = ?key.bare_key, "key event");
                match map_key(&self.app, key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                match Event::from_web_response(status, &body, &context) {
                    Some(event) => event,
                    None => {
                        tracing::debug!("ignoring web response without a request sequence");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match self.handle_permission_result(status) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        self.process(&our_event)
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        stargazer::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Feeds an event to the library and executes the resulting actions.
    fn process(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(&action);
                }
                render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Handles permission request results.
    ///
    /// A granted permission releases the held search. A denied one turns the
    /// held search into a failed completion.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> Option<Event> {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                let request = self.service.grant()?;
                if let Err(e) = self.service.dispatch(&request) {
                    return Some(Event::SearchCompleted {
                        seq: request.seq,
                        outcome: Err(e.to_string()),
                    });
                }
                None
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - searches will fail");
                let seq = self.service.deny()?;
                Some(Event::SearchCompleted {
                    seq,
                    outcome: Err("web access permission denied".to_string()),
                })
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Returns `true` if executing it changed state that needs a re-render.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::IssueSearch(request) => match self.service.dispatch(request) {
                Ok(()) => false,
                Err(e) => {
                    tracing::warn!(seq = %request.seq, error = %e, "search could not be dispatched");
                    let failed = Event::SearchCompleted {
                        seq: request.seq,
                        outcome: Err(e.to_string()),
                    };
                    self.process(&failed)
                }
            },
        }
    }
}
