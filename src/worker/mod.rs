//! Background worker thread for fetching and recomputation.
//!
//! Network I/O and order recomputation run off the shell thread so input stays
//! responsive. Requests and responses travel over `std::sync::mpsc` channels.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with span propagation
//! - `handler`: Worker implementation, thread spawning and message processing

pub mod handler;
pub mod messages;

pub use handler::{JobWorker, WorkerHandle};
pub use messages::{WorkerMessage, WorkerResponse};
