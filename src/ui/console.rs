//! Line-oriented console front end.
//!
//! Each input line is one UI interaction. The output of a command is the
//! re-rendered part of the screen it affected.

use crate::app::App;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::services::content_fetcher::PageFetcher;
use crate::types::bookmark::BookmarkAction;
use crate::types::page::{NavigationOutcome, NavigationTicket};
use crate::ui::view;

pub const HELP: &str = "\
commands:
  open <url> | <url>   load a page (Enter submits the URL field)
  back | forward       step through history
  add [url]            bookmark the URL field (or the given url)
  list                 show bookmarks
  go <n>               open bookmark n
  rm <n>               delete bookmark n
  state                show history and URL field
  help                 this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Back,
    Forward,
    Add(Option<String>),
    List,
    Bookmark(BookmarkAction),
    State,
    Help,
    Quit,
}

/// Parses one input line. Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let command = match word {
        "open" => Command::Open(rest.to_string()),
        "back" => Command::Back,
        "forward" => Command::Forward,
        "add" if rest.is_empty() => Command::Add(None),
        "add" => Command::Add(Some(rest.to_string())),
        "list" => Command::List,
        "go" => Command::Bookmark(BookmarkAction::Activate(parse_index(rest)?)),
        "rm" => Command::Bookmark(BookmarkAction::Delete(parse_index(rest)?)),
        "state" => Command::State,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Open(line.to_string()),
    };
    Ok(Some(command))
}

fn parse_index(arg: &str) -> Result<usize, String> {
    arg.parse()
        .map_err(|_| format!("expected a bookmark number, got '{}'", arg))
}

fn warning(message: impl std::fmt::Display) -> String {
    format!("warning: {}", message)
}

async fn load<F: PageFetcher>(app: &mut App, fetcher: &F, ticket: NavigationTicket) -> String {
    log::debug!("console: loading {}", ticket.url);
    let outcome = app.navigate(fetcher, ticket).await;
    if outcome == NavigationOutcome::Stale {
        return String::new();
    }
    format!(
        "{}\n{}",
        view::nav_controls_text(app.nav_state()),
        view::content_text(app.content())
    )
}

/// Runs a command against `app`, awaiting any fetch it starts, and returns
/// the text to display.
pub async fn run_command<F: PageFetcher>(app: &mut App, fetcher: &F, command: Command) -> String {
    match command {
        Command::Open(url) => {
            app.set_url_field(&url);
            match app.submit_url() {
                Ok(ticket) => load(app, fetcher, ticket).await,
                Err(e) => warning(e),
            }
        }
        Command::Back => match app.go_back() {
            Some(ticket) => load(app, fetcher, ticket).await,
            None => view::nav_controls_text(app.nav_state()),
        },
        Command::Forward => match app.go_forward() {
            Some(ticket) => load(app, fetcher, ticket).await,
            None => view::nav_controls_text(app.nav_state()),
        },
        Command::Add(url) => {
            if let Some(url) = url {
                app.set_url_field(&url);
            }
            match app.add_bookmark() {
                Ok(()) => view::bookmark_list_text(&app.bookmark_items()),
                Err(e) => warning(e),
            }
        }
        Command::List => view::bookmark_list_text(&app.bookmark_items()),
        Command::Bookmark(action) => match app.handle_bookmark_action(action) {
            Ok(Some(ticket)) => load(app, fetcher, ticket).await,
            Ok(None) => view::bookmark_list_text(&app.bookmark_items()),
            Err(e) => warning(e),
        },
        Command::State => {
            let history = app.history();
            let entries = history
                .entries()
                .iter()
                .enumerate()
                .map(|(i, url)| {
                    let marker = if Some(i) == history.cursor() { ">" } else { " " };
                    format!("{} {}", marker, url)
                })
                .collect::<Vec<_>>();
            format!(
                "url: {}\n{}\n{}",
                app.url_field(),
                view::nav_controls_text(app.nav_state()),
                entries.join("\n")
            )
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}
