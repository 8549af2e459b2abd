//! Jobboard: a job listing browser backed by a remote JSON API.
//!
//! Jobboard provides:
//! - One-shot fetching of all listings from `GET {base_url}/jobs`
//! - Filtering by title, company, location, level, salary range and recency
//! - Default and filtered sort orders with fixed-size pagination
//! - Application tracking with recent/older partitions
//! - Aggregate statistics (average salary, level and location breakdowns)
//! - Background fetching and recomputation on a worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Job store with change notification               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Worker Layer  │
//! │ (ui/)         │   │ (engine/)     │   │ (worker/)     │
//! │ - Formatting  │   │ - Filter/sort │   │ - Fetch       │
//! │ - Rendering   │   │ - Pagination  │   │ - Recompute   │
//! │               │   │ - Stats       │   │ - Channels    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Client, Infrastructure & Domain Layers             │
//! │  - HTTP job source (client/)                        │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Job model, criteria, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is layered: built-in defaults, then an optional TOML file, then
//! `JOBBOARD_*` environment overrides.
//!
//! ```toml
//! # ~/.config/jobboard/config.toml
//! trace_level = "debug"
//!
//! [api]
//! base_url = "https://myfirstapi.website"
//! token = "secret"
//!
//! [format]
//! currency_symbol = "$"
//! date_format = "%b %-d, %Y"
//! ```
//!
//! # Example
//!
//! ```rust
//! use jobboard::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(!should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), jobboard::JobBoardError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, CriteriaChange, Event, JobStore, StoreChange, ViewMode};
pub use domain::{
    FetchError, FilterCriteria, Job, JobBoardError, JobId, JobLevel, LocationFilter, PostedWithin,
    Result, SalaryRange,
};
pub use ui::format::{FormatConfig, Formatter};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "https://myfirstapi.website";

/// Connection settings for the listing API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host, optionally with a path prefix; `/jobs` is appended.
    pub base_url: String,

    /// Static token sent in the `x_token` header.
    pub token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
        }
    }
}

/// Application configuration.
///
/// # Example
///
/// ```toml
/// trace_level = "debug"
/// log_file = "~/jobboard.log"
///
/// [api]
/// token = "secret"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API endpoint and credentials.
    pub api: ApiConfig,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` takes
    /// precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file location. Default: `jobboard.log` in the data directory.
    pub log_file: Option<PathBuf>,

    /// Salary and date presentation.
    pub format: FormatConfig,
}

impl Config {
    /// Parses configuration from TOML text; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] if the text is not valid TOML, a value
    /// has the wrong type, or `format.date_format` is not a valid `chrono` pattern.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| JobBoardError::Config(e.to_string()))?;
        config.format.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Io`] if the file cannot be read and
    /// [`JobBoardError::Config`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `JOBBOARD_*` overrides from a variable map.
    ///
    /// # Parsing Rules
    ///
    /// - `JOBBOARD_BASE_URL` → `api.base_url`
    /// - `JOBBOARD_API_TOKEN` → `api.token`
    /// - `JOBBOARD_TRACE_LEVEL` → `trace_level`
    /// - `JOBBOARD_LOG_FILE` → `log_file` (tilde expanded)
    ///
    /// Empty values are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jobboard::Config;
    ///
    /// let mut vars = BTreeMap::new();
    /// vars.insert("JOBBOARD_API_TOKEN".to_string(), "secret".to_string());
    ///
    /// let mut config = Config::default();
    /// config.apply_overrides(&vars);
    /// assert_eq!(config.api.token, "secret");
    /// ```
    pub fn apply_overrides(&mut self, vars: &BTreeMap<String, String>) {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        if let Some(base_url) = get("JOBBOARD_BASE_URL") {
            self.api.base_url = base_url.to_string();
        }
        if let Some(token) = get("JOBBOARD_API_TOKEN") {
            self.api.token = token.to_string();
        }
        if let Some(level) = get("JOBBOARD_TRACE_LEVEL") {
            self.trace_level = Some(level.to_string());
        }
        if let Some(log_file) = get("JOBBOARD_LOG_FILE") {
            self.log_file = Some(infrastructure::paths::expand_tilde(log_file));
        }
    }

    /// Loads configuration from all layers.
    ///
    /// An explicit `path` must exist. Without one, the default config path is read
    /// if present. Process environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match infrastructure::paths::default_config_path() {
                Some(default_path) if default_path.is_file() => Self::from_file(&default_path)?,
                _ => Self::default(),
            },
        };

        let vars: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("JOBBOARD_"))
            .collect();
        config.apply_overrides(&vars);

        if let Some(log_file) = config.log_file.take() {
            config.log_file = Some(infrastructure::paths::expand_tilde(&log_file.to_string_lossy()));
        }

        Ok(config)
    }
}

/// Creates the application state for a configuration.
///
/// The store starts empty; listings arrive once the worker answers the initial
/// fetch.
///
/// # Example
///
/// ```rust
/// use jobboard::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.store.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.api.base_url, "initializing jobboard");

    AppState::new(Formatter::new(config.format.clone()))
}
