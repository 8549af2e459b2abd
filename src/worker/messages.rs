//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the shell thread
//! and the background worker that fetches listings and recomputes the visible
//! order. Every request carries the [`tracing::Span`] it was created in, so worker
//! log lines nest under the event that caused them.

use crate::domain::{FetchError, FilterCriteria, Job, JobId};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::Span;

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// span as the parent of the worker-side span.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message parented to the current span")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        parent: Span::current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    fetch_jobs(FetchJobs {}),
    compute_order(ComputeOrder {
        generation: u64,
        jobs: Arc<Vec<Job>>,
        criteria: FilterCriteria,
        today_only: bool,
        today: NaiveDate,
    }),
}

/// Messages sent from the shell thread to the worker thread.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Fetch the full listing batch from the job source.
    FetchJobs {
        /// Span the request was issued from.
        parent: Span,
    },

    /// Recompute the visible order over a snapshot of the collection.
    ComputeOrder {
        /// Request counter; the owner drops answers for older generations.
        generation: u64,

        /// Snapshot of the master collection at request time.
        jobs: Arc<Vec<Job>>,

        /// Criteria in effect at request time.
        criteria: FilterCriteria,

        /// Restrict to jobs posted on `today`.
        today_only: bool,

        /// Calendar date the computation is relative to.
        today: NaiveDate,

        /// Span the request was issued from.
        parent: Span,
    },
}

impl WorkerMessage {
    /// Short variant name for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchJobs { .. } => "fetch_jobs",
            Self::ComputeOrder { .. } => "compute_order",
        }
    }

    #[must_use]
    pub const fn parent(&self) -> &Span {
        match self {
            Self::FetchJobs { parent } | Self::ComputeOrder { parent, .. } => parent,
        }
    }
}

/// Responses sent from the worker thread back to the shell thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The fetch succeeded with a decoded batch.
    JobsFetched {
        /// Listings in payload order.
        jobs: Vec<Job>,
    },

    /// The fetch attempt failed; nothing is retried.
    FetchFailed {
        /// Reason for the failure.
        error: FetchError,
    },

    /// A recomputation finished.
    OrderComputed {
        /// Generation of the request this answers.
        generation: u64,

        /// Visible job IDs in display order.
        ids: Vec<JobId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_attach_a_parent_span() {
        let message = WorkerMessage::fetch_jobs();
        assert_eq!(message.kind(), "fetch_jobs");
        // No subscriber is installed here, so the captured span is disabled.
        assert!(message.parent().is_disabled());
    }

    #[test]
    fn compute_order_carries_its_inputs() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let message =
            WorkerMessage::compute_order(4, Arc::new(Vec::new()), FilterCriteria::default(), true, today);

        match message {
            WorkerMessage::ComputeOrder {
                generation,
                today_only,
                ..
            } => {
                assert_eq!(generation, 4);
                assert!(today_only);
            }
            WorkerMessage::FetchJobs { .. } => panic!("wrong variant"),
        }
    }
}
