//! Presentation layer: formatting, view models and plain-text rendering.
//!
//! # Modules
//!
//! - [`format`]: Currency and date formatting with explicit settings
//! - [`viewmodel`]: Display-ready data computed from application state
//! - [`renderer`]: Writes a view model to any `io::Write`

pub mod format;
pub mod renderer;
pub mod viewmodel;

pub use format::{FormatConfig, Formatter};
pub use renderer::render;
pub use viewmodel::UIViewModel;
