// pageview platform paths for Linux
// Config: ~/.config/pageview
// Data:   ~/.local/share/pageview

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for pageview on Linux.
/// Uses `$XDG_CONFIG_HOME/pageview` if set, otherwise `~/.config/pageview`.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

/// Returns the data directory for pageview on Linux.
/// Uses `$XDG_DATA_HOME/pageview` if set, otherwise `~/.local/share/pageview`.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn config_dir_from(xdg: Option<String>, home: Option<String>) -> PathBuf {
    match xdg {
        Some(xdg) => PathBuf::from(xdg).join("pageview"),
        None => home_or_tmp(home).join(".config").join("pageview"),
    }
}

fn data_dir_from(xdg: Option<String>, home: Option<String>) -> PathBuf {
    match xdg {
        Some(xdg) => PathBuf::from(xdg).join("pageview"),
        None => home_or_tmp(home)
            .join(".local")
            .join("share")
            .join("pageview"),
    }
}

fn home_or_tmp(home: Option<String>) -> PathBuf {
    PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")))
}
