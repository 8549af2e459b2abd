//! Path resolution for data and configuration files.
//!
//! Follows the XDG base directory conventions, falling back to the usual
//! `$HOME`-relative locations. The `*_from` variants take the environment values as
//! arguments so they can be tested without touching the process environment.

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "jobboard";
const CONFIG_FILE: &str = "config.toml";

/// Returns the data directory for logs and other runtime files.
///
/// Resolves to `$XDG_DATA_HOME/jobboard`, else `$HOME/.local/share/jobboard`, else
/// a `jobboard` directory under the system temp dir.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(std::env::var_os("XDG_DATA_HOME"), std::env::var_os("HOME"))
}

/// [`get_data_dir`] with explicit environment values.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use jobboard::infrastructure::paths::data_dir_from;
///
/// let dir = data_dir_from(None, Some("/home/ada".into()));
/// assert_eq!(dir, PathBuf::from("/home/ada/.local/share/jobboard"));
/// ```
#[must_use]
pub fn data_dir_from(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    non_empty(xdg_data_home)
        .map(PathBuf::from)
        .or_else(|| non_empty(home).map(|h| PathBuf::from(h).join(".local").join("share")))
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the default configuration file path, if a home can be determined.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
}

/// [`default_config_path`] with explicit environment values.
#[must_use]
pub fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    non_empty(xdg_config_home)
        .map(PathBuf::from)
        .or_else(|| non_empty(home).map(|h| PathBuf::from(h).join(".config")))
        .map(|base| base.join(APP_DIR).join(CONFIG_FILE))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or with no `$HOME` set, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_from(path, std::env::var_os("HOME"))
}

/// [`expand_tilde`] with an explicit home directory.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use jobboard::infrastructure::paths::expand_tilde_from;
///
/// let home = Some("/home/ada".into());
/// assert_eq!(expand_tilde_from("~/logs", home.clone()), PathBuf::from("/home/ada/logs"));
/// assert_eq!(expand_tilde_from("~", home.clone()), PathBuf::from("/home/ada"));
/// assert_eq!(expand_tilde_from("/var/log", home), PathBuf::from("/var/log"));
/// ```
#[must_use]
pub fn expand_tilde_from(path: &str, home: Option<OsString>) -> PathBuf {
    let Some(home) = non_empty(home) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}
