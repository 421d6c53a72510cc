// pageview platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "PAGEVIEW_DATA_DIR";

/// Returns the platform-specific configuration directory for pageview.
///
/// - **Linux**: `~/.config/pageview` (or `$XDG_CONFIG_HOME/pageview`)
/// - **macOS**: `~/Library/Application Support/pageview`
/// - **Windows**: `%APPDATA%/pageview`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory for pageview: `$PAGEVIEW_DATA_DIR` when set,
/// otherwise the platform default.
///
/// - **Linux**: `~/.local/share/pageview` (or `$XDG_DATA_HOME/pageview`)
/// - **macOS**: `~/Library/Application Support/pageview`
/// - **Windows**: `%APPDATA%/pageview`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
