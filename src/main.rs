//! pageview: a minimal page viewer with back/forward history and persisted bookmarks.
//!
//! Entry point: an interactive console. Type a URL and press Enter to load it.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};

use pageview::app::App;
use pageview::services::content_fetcher::HttpFetcher;
use pageview::services::settings_engine::SettingsEngine;
use pageview::ui::console::{self, Command};
use pageview::ui::view;

fn prompt() {
    print!("pageview> ");
    let _ = io::stdout().flush();
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

    println!("pageview v{} (type 'help' for commands)", env!("CARGO_PKG_VERSION"));
    println!("{}", view::bookmark_list_text(&app.bookmark_items()));
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match console::parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                let output = console::run_command(&mut app, &fetcher, command).await;
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Ok(None) => {}
            Err(e) => println!("warning: {}", e),
        }
        prompt();
    }
}
