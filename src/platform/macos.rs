// pageview platform paths for macOS
// Config: ~/Library/Application Support/pageview
// Data:   ~/Library/Application Support/pageview

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

fn app_support_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("pageview")
}

/// `~/Library/Application Support/pageview`
pub fn get_config_dir() -> PathBuf {
    app_support_dir()
}

/// `~/Library/Application Support/pageview`
pub fn get_data_dir() -> PathBuf {
    app_support_dir()
}
