//! Actions representing side effects to be executed by the shell.
//!
//! The event handler returns a `Vec<Action>` after processing each event, keeping
//! state transitions free of I/O. The shell executes the actions in order.
//!
//! # Example
//!
//! ```rust
//! use jobboard::Action;
//! use jobboard::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::fetch_jobs())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the shell.
#[derive(Debug, Clone)]
pub enum Action {
    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Ends the session.
    Quit,
}
