//! Domain layer for the job board.
//!
//! Core types independent of transport, threading or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job record model and payload decoding
//! - [`criteria`]: Filter criteria value objects
//!
//! # Examples
//!
//! ```
//! use jobboard::domain::{decode_batch, FilterCriteria};
//!
//! let jobs = decode_batch(br#"[{"id": 1, "title": "Rust Engineer", "company": "Ferrous",
//!     "location": "Remote", "salary": null, "job_type": "Senior",
//!     "post_date": "2025-02-10", "job_link": "https://example.com/1"}]"#)?;
//! assert_eq!(jobs[0].level.as_deref(), Some("Senior"));
//! assert!(!FilterCriteria::default().is_active());
//! # Ok::<(), jobboard::FetchError>(())
//! ```

pub mod criteria;
pub mod error;
pub mod job;

pub use criteria::{FilterCriteria, JobLevel, LocationFilter, PostedWithin, SalaryRange};
pub use error::{FetchError, JobBoardError, Result};
pub use job::{decode_batch, Job, JobId, NOT_APPLICABLE_LOCATION, POST_DATE_FORMAT};
