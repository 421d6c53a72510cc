//! RPC method handler for the pageview JSON-lines protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` maps a method call onto an `App` trigger. Triggers that
//! start a navigation return the ticket in [`Dispatch::fetch`]; the server
//! runs that fetch and reports it later through [`content_event`].

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::page::{NavigationOutcome, NavigationTicket};

/// Reply to one request, plus the fetch it asks the server to run.
#[derive(Debug)]
pub struct Dispatch {
    pub result: Value,
    pub fetch: Option<NavigationTicket>,
}

impl Dispatch {
    fn reply(result: Value) -> Self {
        Self { result, fetch: None }
    }

    fn navigation(ticket: Option<NavigationTicket>) -> Self {
        let result = match &ticket {
            Some(t) => json!({"token": t.token, "url": t.url}),
            None => json!({"token": null, "url": null}),
        };
        Self { result, fetch: ticket }
    }
}

fn set_field_from_params(app: &mut App, params: &Value) {
    if let Some(url) = params.get("url").and_then(|v| v.as_str()) {
        app.set_url_field(url);
    }
}

fn index_param(params: &Value) -> Result<usize, String> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

fn bookmark_list(app: &App) -> Result<Value, String> {
    serde_json::to_value(app.bookmark_items()).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the matching `App` trigger.
///
/// Returns `Ok(Dispatch)` on success or `Err(String)` with a user-facing message.
pub fn handle_method(
    app: &mut App,
    settings: &mut SettingsEngine,
    method: &str,
    params: &Value,
) -> Result<Dispatch, String> {
    match method {
        // ─── Page ───
        "page.load" => {
            set_field_from_params(app, params);
            let ticket = app.submit_url().map_err(|e| e.to_string())?;
            Ok(Dispatch::navigation(Some(ticket)))
        }
        "page.content" => {
            let content = serde_json::to_value(app.content()).map_err(|e| e.to_string())?;
            Ok(Dispatch::reply(content))
        }

        // ─── Navigation ───
        "nav.back" => Ok(Dispatch::navigation(app.go_back())),
        "nav.forward" => Ok(Dispatch::navigation(app.go_forward())),
        "nav.state" => {
            let state = app.nav_state();
            Ok(Dispatch::reply(json!({
                "can_go_back": state.can_go_back,
                "can_go_forward": state.can_go_forward,
                "entries": app.history().entries(),
                "cursor": app.history().cursor(),
                "url_field": app.url_field(),
            })))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            set_field_from_params(app, params);
            app.add_bookmark().map_err(|e| e.to_string())?;
            Ok(Dispatch::reply(bookmark_list(app)?))
        }
        "bookmark.list" => Ok(Dispatch::reply(bookmark_list(app)?)),
        "bookmark.open" => {
            let index = index_param(params)?;
            let ticket = app.activate_bookmark(index).map_err(|e| e.to_string())?;
            Ok(Dispatch::navigation(Some(ticket)))
        }
        "bookmark.delete" => {
            let index = index_param(params)?;
            let removed = app.delete_bookmark(index).map_err(|e| e.to_string())?;
            Ok(Dispatch::reply(json!({
                "removed": removed.url,
                "bookmarks": bookmark_list(app)?,
            })))
        }

        // ─── Settings ───
        "settings.get" => {
            let json_val = serde_json::to_value(settings.get_settings()).map_err(|e| e.to_string())?;
            Ok(Dispatch::reply(json_val))
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            settings.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(Dispatch::reply(json!({"ok": true})))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Event line announcing how a navigation finished.
pub fn content_event(app: &App, ticket: &NavigationTicket, outcome: &NavigationOutcome) -> Value {
    let mut event = json!({
        "event": "content",
        "token": ticket.token,
        "url": ticket.url,
        "outcome": outcome,
    });
    if *outcome != NavigationOutcome::Stale {
        event["content"] = json!(app.content());
        event["nav"] = json!(app.nav_state());
    }
    event
}
