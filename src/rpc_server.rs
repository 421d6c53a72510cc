//! pageview RPC Server: JSON-lines over stdin/stdout for embedding in another UI.
//!
//! Protocol: one JSON object per line.
//! Request:  {"id":1, "method":"page.load", "params":{"url":"https://example.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Event:    {"event":"content", "token":1, "outcome":{...}, "content":{...}}
//!
//! Fetches run as spawned tasks. Their results come back over a channel and
//! are applied in this loop, where stale tokens are discarded.

use std::io::{self, Write};

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use pageview::app::App;
use pageview::rpc_handler::{content_event, handle_method};
use pageview::services::content_fetcher::{HttpFetcher, PageFetcher};
use pageview::services::settings_engine::SettingsEngine;
use pageview::types::errors::FetchError;
use pageview::types::page::NavigationTicket;

type Completion = (NavigationTicket, Result<String, FetchError>);

fn emit(value: &Value) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", value);
    let _ = stdout.flush();
}

fn spawn_fetch(fetcher: &HttpFetcher, ticket: NavigationTicket, done: mpsc::UnboundedSender<Completion>) {
    let fetcher = fetcher.clone();
    tokio::spawn(async move {
        let result = fetcher.fetch_body(&ticket.url).await;
        // The receiver only goes away on shutdown.
        let _ = done.send((ticket, result));
    });
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut settings = SettingsEngine::new(None);
    let loaded = settings.load_or_default();

    let mut app = match App::open(&loaded) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize pageview: {}", e);
            std::process::exit(1);
        }
    };
    let fetcher = match HttpFetcher::new(&loaded.network) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to initialize pageview: {}", e);
            std::process::exit(1);
        }
    };

    emit(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));

    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        log::error!("stdin read failed: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                let req: Value = match serde_json::from_str(&line) {
                    Ok(v) => v,
                    Err(e) => {
                        emit(&json!({"id": null, "error": format!("parse error: {}", e)}));
                        continue;
                    }
                };

                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                let response = match handle_method(&mut app, &mut settings, method, &params) {
                    Ok(dispatch) => {
                        if let Some(ticket) = dispatch.fetch {
                            spawn_fetch(&fetcher, ticket, done_tx.clone());
                        }
                        json!({"id": id, "result": dispatch.result})
                    }
                    Err(err) => json!({"id": id, "error": err}),
                };
                emit(&response);
            }
            Some((ticket, result)) = done_rx.recv() => {
                let outcome = app.complete_navigation(&ticket, result);
                emit(&content_event(&app, &ticket, &outcome));
            }
        }
    }
}
