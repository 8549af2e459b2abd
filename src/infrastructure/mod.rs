//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration is read from and where logs are written.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_data_dir};
