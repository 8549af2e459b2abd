//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the shell (main.rs) and the engine/worker layers. It
//! implements the event-driven loop that powers the interactive listing.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Command → Event → Event Handler → State Mutations → Actions → Worker
//!                             ↑                                        ↓
//!                             └─────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen selection
//! - [`state`]: Central application state container and view model computation
//! - [`store`]: Master job collection with change notification
//!
//! # Example
//!
//! ```rust
//! use jobboard::{handle_event, AppState, Event, Formatter};
//!
//! let mut state = AppState::new(Formatter::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::ShowStats)?;
//! assert!(should_render);
//! # Ok::<(), jobboard::JobBoardError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, CriteriaChange, Event};
pub use modes::ViewMode;
pub use state::AppState;
pub use store::{JobStore, StoreChange};
